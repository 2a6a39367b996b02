//! Core business logic for the file browser and document round-tripper.
//!
//! This module provides:
//! - [`build_tree`] folder reconstruction from flat path lists
//! - [`search`] content-search matching and candidate filtering
//! - [`DocumentSnapshot`] HTML header/footer round-tripping
//! - [`editor`] bridge to the external WYSIWYG widget
//! - [`viewer`] document builders for viewer windows

pub mod document;
pub mod editor;
pub mod error;
pub mod search;
mod tree;
pub mod viewer;

pub use document::DocumentSnapshot;
pub use tree::build_tree;
