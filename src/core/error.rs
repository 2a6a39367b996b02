//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FileError`] - asynchronous file read and object URL failures
//! - [`DomError`] - window, blob, and download plumbing failures
//! - [`EditorError`] - WYSIWYG widget bridge failures

use std::fmt;

/// Failures while reading a session file's content.
#[derive(Debug, Clone)]
pub enum FileError {
    /// The browser rejected the asynchronous read.
    ReadRejected(String),
    /// The read resolved to something other than a string.
    NotText(String),
    /// Creating an object URL for the file's bytes failed.
    ObjectUrlFailed(String),
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadRejected(name) => write!(f, "Could not read \"{}\"", name),
            Self::NotText(name) => write!(f, "\"{}\" is not readable as text", name),
            Self::ObjectUrlFailed(name) => {
                write!(f, "Could not create an object URL for \"{}\"", name)
            }
        }
    }
}

impl std::error::Error for FileError {}

/// Failures in browser window / document plumbing.
#[derive(Debug, Clone)]
pub enum DomError {
    /// Browser window not available
    NoWindow,
    /// A new browsing context failed to open (popup blocking)
    PopupBlocked,
    /// Blob construction failed
    BlobCreationFailed,
    /// Object URL creation failed
    ObjectUrlFailed,
    /// Building or clicking the download anchor failed
    DownloadFailed,
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::PopupBlocked => {
                write!(f, "The new window was blocked. Please allow popups for this page.")
            }
            Self::BlobCreationFailed => write!(f, "Failed to assemble document data"),
            Self::ObjectUrlFailed => write!(f, "Failed to create a document URL"),
            Self::DownloadFailed => write!(f, "Failed to trigger the download"),
        }
    }
}

impl std::error::Error for DomError {}

/// Failures talking to the external WYSIWYG widget.
#[derive(Debug, Clone)]
pub enum EditorError {
    /// Browser window not available
    NoWindow,
    /// The widget global is missing (script not loaded)
    NotAvailable,
    /// A widget operation was missing or threw
    CallFailed(String),
    /// getContent returned something other than a string
    InvalidContent,
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::NotAvailable => {
                write!(f, "The editor widget is not loaded on this page")
            }
            Self::CallFailed(op) => write!(f, "Editor call failed: {}", op),
            Self::InvalidContent => write!(f, "Editor returned non-text content"),
        }
    }
}

impl std::error::Error for EditorError {}
