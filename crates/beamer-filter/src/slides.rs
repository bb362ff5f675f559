/*
 * slides.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Slide-level policies: bullet animation and frame decorators.

use crate::walk::Rewrite;
use beamer_pandoc_types::{Block, BlockQuote, Header};

/// Beamer reveals the bullets of a quoted list one at a time. Unless bullet
/// animation is wanted, the quote is replaced by its content so every bullet
/// shows at once.
pub fn bullet_policy(quote: &BlockQuote, bullet_point_animation: bool) -> Rewrite<Block> {
    if bullet_point_animation {
        Rewrite::Unchanged
    } else {
        Rewrite::Replace(quote.content.clone())
    }
}

/// A copy of `header` with `decorators` appended to its classes.
///
/// Slide titles are level 2 for a single input file and level 3 for
/// several, so every level is decorated.
pub fn decorate_header(header: &Header, decorators: &[String]) -> Header {
    let mut attr = header.attr.clone();
    attr.1.extend(decorators.iter().cloned());
    Header {
        level: header.level,
        attr,
        content: header.content.clone(),
    }
}
