//! Configuration for the block-style encoder.
//!
//! The dense family has exactly one rendering; the block family has a single
//! configuration constant, the column at which dash markers of a sequence
//! nested under a key are placed. Two constants are in circulation for this:
//! four spaces and zero spaces. Both are supported; the choice is fixed per
//! encoder instance, not inferred from the data.
//!
//! ## Examples
//!
//! ```rust
//! use omitempty::{to_block_string_with_options, BlockOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Tags { data: Vec<String> }
//!
//! let tags = Tags { data: vec!["a".to_string()] };
//!
//! let indented = to_block_string_with_options(&tags, BlockOptions::new()).unwrap();
//! assert_eq!(indented, "data:\n    - a\n");
//!
//! let flat = to_block_string_with_options(&tags, BlockOptions::flat()).unwrap();
//! assert_eq!(flat, "data:\n- a\n");
//! ```

/// Configuration for the block-style family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockOptions {
    /// Number of spaces before the dash marker of a sequence nested under a
    /// key, relative to the key's own indentation.
    pub seq_indent: usize,
}

impl Default for BlockOptions {
    fn default() -> Self {
        BlockOptions { seq_indent: 4 }
    }
}

impl BlockOptions {
    /// Creates the default options: nested sequence items indented four
    /// spaces past their key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the flat variant: dash markers of nested sequences share
    /// their key's column.
    #[must_use]
    pub fn flat() -> Self {
        BlockOptions { seq_indent: 0 }
    }

    /// Sets the nested sequence indentation.
    #[must_use]
    pub fn with_seq_indent(mut self, seq_indent: usize) -> Self {
        self.seq_indent = seq_indent;
        self
    }
}
