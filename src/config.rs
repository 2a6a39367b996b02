//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header bar.
pub const APP_NAME: &str = "webfiler";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// File Format Tables
// =============================================================================

/// Extensions recognized per file category (compared case-insensitively).
pub mod formats {
    /// Documents handed to the WYSIWYG editor.
    pub const HTML: &[&str] = &["html"];
    /// Plain-text files opened in the text viewer and scanned by search.
    pub const TEXT: &[&str] = &["js", "css", "txt", "scss", "ts"];
    /// Images opened in an `<img>` viewer window.
    pub const IMAGE: &[&str] = &["jpg", "jpeg", "png", "gif", "svg", "tif", "bmp", "webp"];
    /// Videos opened directly from an object URL.
    pub const VIDEO: &[&str] = &["mp4", "avi", "mob", "webm", "flv", "wmv", "mpg", "mkv"];
    /// Audio files opened directly from an object URL.
    pub const AUDIO: &[&str] = &["wav", "aiff", "mp3", "wma", "aac"];
    /// PDF documents opened directly from an object URL.
    pub const PDF: &[&str] = &["pdf"];
}

// =============================================================================
// Document Export Configuration
// =============================================================================

/// File name used for the exported document download.
pub const EXPORT_FILE_NAME: &str = "document.html";

/// MIME type of exported and viewer-generated documents.
pub const HTML_MIME: &str = "text/html";

/// Indent prefixed to every body line on export.
pub const BODY_INDENT: &str = "    ";

/// `lang` attribute of synthesized documents.
pub const DOCUMENT_LANG: &str = "en";

/// Title used when exporting with no title set.
pub const DEFAULT_TITLE: &str = "Untitled";

// =============================================================================
// Editor Surface Configuration
// =============================================================================

/// Name of the window global exposing the WYSIWYG widget.
pub const EDITOR_GLOBAL: &str = "wysiwyg";

/// DOM id of the element the widget attaches to.
pub const EDITOR_HOST_ID: &str = "editor";

/// Action names registered on the widget's extensibility points.
pub mod editor_actions {
    /// Toolbar save action (export + download).
    pub const SAVE: &str = "save";
    /// Toolbar preview action (export + new window).
    pub const PREVIEW: &str = "preview";
    /// Menu entry clearing the stored header/footer context.
    pub const CLEAR_HEADER: &str = "clearheader";
}

// =============================================================================
// Notice Configuration
// =============================================================================

/// How long a notice stays visible before auto-dismissal (milliseconds).
pub const NOTICE_TIMEOUT_MS: u32 = 6000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
