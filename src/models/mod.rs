//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FileHandle`], [`FileId`], [`FileCategory`] - session file batch
//! - [`TreeNode`] - reconstructed folder hierarchy
//! - [`Notice`], [`NoticeKind`] - status bar notifications

mod file;
mod notice;
mod tree;

pub use file::{FileCategory, FileHandle, FileId};
pub use notice::{Notice, NoticeKind};
pub use tree::TreeNode;
