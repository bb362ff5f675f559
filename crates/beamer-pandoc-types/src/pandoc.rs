/*
 * pandoc.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use crate::meta::Meta;

/// The pandoc-types API version written when a document did not carry one.
pub const PANDOC_API_VERSION: [u64; 3] = [1, 23, 1];

/*
 * A data structure that mimics Pandoc's `data Pandoc` type.
 * The API version read from JSON input is kept so that the filter hands
 * back exactly the version pandoc sent.
 */

#[derive(Debug, Clone, PartialEq)]
pub struct Pandoc {
    pub api_version: Vec<u64>,
    pub meta: Meta,
    pub blocks: Blocks,
}

impl Default for Pandoc {
    fn default() -> Self {
        Pandoc {
            api_version: PANDOC_API_VERSION.to_vec(),
            meta: Meta::new(),
            blocks: Vec::new(),
        }
    }
}
