/*
 * animate.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Staged animation containers.
//!
//! ```rst
//! .. container:: animate 3-
//!
//!    Shown from the third overlay on.
//! ```
//!
//! The optional third class selects the overlays: `N` shows the content on
//! overlay N only, `N-` from overlay N on. Without a selector (or with one
//! that does not parse) the content appears from overlay 2 on.
//!
//! Content is wrapped in `visibleenv` rather than `onlyenv`, so hidden text
//! still takes up its space and the slide does not resize between overlays.

use crate::latex;
use beamer_pandoc_types::Block;

const VISIBLE_ENV: &str = "visibleenv";
const DEFAULT_SELECTOR: &str = "<2->";

/// The beamer overlay specification for a selector class.
pub fn overlay_selector(selector: Option<&str>) -> String {
    let Some(selector) = selector else {
        return DEFAULT_SELECTOR.to_string();
    };
    let (number, from_here_on) = match selector.strip_suffix('-') {
        Some(number) => (number, true),
        None => (selector, false),
    };
    match number.parse::<u32>() {
        Ok(n) if from_here_on => format!("<{}->", n),
        Ok(n) => format!("<{}>", n),
        Err(_) => DEFAULT_SELECTOR.to_string(),
    }
}

pub fn animate(classes: &[String], content: &[Block], raw_format: &str) -> Vec<Block> {
    let selector = overlay_selector(classes.get(2).map(String::as_str));
    latex::wrap_blocks(
        raw_format,
        format!("{}{}", latex::begin(VISIBLE_ENV), selector),
        content,
        latex::end(VISIBLE_ENV),
    )
}
