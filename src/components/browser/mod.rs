//! File browser UI components.
//!
//! Components:
//! - [`Browser`] - main browser pane and file-open dispatch
//! - [`FolderPicker`] - folder selection input (picker)
//! - [`FolderTree`] - collapsible hierarchy view (tree)
//! - [`SearchBar`] / [`SearchResults`] - content search (search)

#[allow(clippy::module_inception)]
mod browser;
mod picker;
mod search;
mod tree;

pub use browser::Browser;
