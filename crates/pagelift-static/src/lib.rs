//! Build output flattening for multi-page sites.
//!
//! A bundler writes page HTML nested under the pages subdirectory of its
//! output. This crate relocates those files to the output root after the
//! bundle is written and prunes the directories it emptied.

pub mod flatten;

pub use flatten::{flatten, FlattenError, FlattenResult};
