//! UI components built with Leptos.
//!
//! - [`browser`] - folder picker, tree, and search UI
//! - [`editor`] - editor pane hosting the WYSIWYG widget
//! - [`icons`] - centralized icon definitions (change theme here)
//! - [`status`] - notice bar for status notifications

pub mod browser;
pub mod editor;
pub mod icons;
pub mod status;
