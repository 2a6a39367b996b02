//! File handles and extension-based categorization.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::JsFuture;
use web_sys::Url;

use crate::config::formats;
use crate::core::error::FileError;

#[wasm_bindgen]
extern "C" {
    /// `File.webkitRelativePath`, which `web_sys` does not bind.
    #[wasm_bindgen(extends = web_sys::File, js_name = File)]
    type FileWithRelativePath;

    #[wasm_bindgen(method, getter, js_name = webkitRelativePath)]
    fn webkit_relative_path(this: &FileWithRelativePath) -> String;
}

// =============================================================================
// FileId
// =============================================================================

/// Stable synthetic identifier for a file within the current session batch.
///
/// Assigned once when a batch is loaded. Tree rows, search results, and open
/// actions all resolve files by id rather than by display name, so duplicate
/// file names in different folders stay unambiguous.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FileId(usize);

impl FileId {
    /// Create an id from the file's index in the session batch.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The batch index backing this id.
    pub fn index(self) -> usize {
        self.0
    }
}

// =============================================================================
// FileCategory
// =============================================================================

/// Viewer category derived from a file's extension.
///
/// Pure function of the case-folded extension; drives which viewer or editor
/// path a selection takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileCategory {
    Html,
    Text,
    Image,
    Video,
    Audio,
    Pdf,
    Unknown,
}

impl FileCategory {
    /// Detect the category from a file name's extension (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        let ext = name
            .rsplit('.')
            .next()
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();
        let ext = ext.as_str();

        if formats::HTML.contains(&ext) {
            Self::Html
        } else if formats::TEXT.contains(&ext) {
            Self::Text
        } else if formats::IMAGE.contains(&ext) {
            Self::Image
        } else if formats::VIDEO.contains(&ext) {
            Self::Video
        } else if formats::AUDIO.contains(&ext) {
            Self::Audio
        } else if formats::PDF.contains(&ext) {
            Self::Pdf
        } else {
            Self::Unknown
        }
    }

    /// Whether content search scans this category (textual files only).
    pub fn is_searchable(self) -> bool {
        matches!(self, Self::Html | Self::Text)
    }
}

// =============================================================================
// FileHandle
// =============================================================================

/// A user-selected local file plus its root-relative path.
///
/// Wraps the browser [`web_sys::File`] supplied by the folder picker or a
/// drag-drop operation. Byte content is reachable only through the async
/// [`read_text`](Self::read_text) or an [object URL](Self::object_url).
#[derive(Clone, Debug)]
pub struct FileHandle {
    id: FileId,
    name: String,
    relative_path: String,
    file: web_sys::File,
}

impl FileHandle {
    /// Wrap a browser file, deriving the root-relative path.
    ///
    /// Files dropped without directory context have an empty
    /// `webkitRelativePath`; those fall back to the bare file name.
    pub fn new(id: FileId, file: web_sys::File) -> Self {
        let name = file.name();
        let rel = file
            .unchecked_ref::<FileWithRelativePath>()
            .webkit_relative_path();
        let relative_path = if rel.is_empty() { name.clone() } else { rel };

        Self {
            id,
            name,
            relative_path,
            file,
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    /// Last path segment (display name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slash-delimited path relative to the selected folder root.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Viewer category for this file.
    pub fn category(&self) -> FileCategory {
        FileCategory::from_name(&self.name)
    }

    /// Read the whole file as decoded text.
    pub async fn read_text(&self) -> Result<String, FileError> {
        let text = JsFuture::from(self.file.text())
            .await
            .map_err(|_| FileError::ReadRejected(self.name.clone()))?;

        text.as_string()
            .ok_or_else(|| FileError::NotText(self.name.clone()))
    }

    /// Create an object URL backed by the file's bytes.
    ///
    /// The caller owns the URL's lifetime; viewer windows keep theirs alive
    /// for the lifetime of the page.
    pub fn object_url(&self) -> Result<String, FileError> {
        Url::create_object_url_with_blob(&self.file)
            .map_err(|_| FileError::ObjectUrlFailed(self.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // FileCategory Tests
    // =========================================================================

    #[test]
    fn test_category_detection() {
        assert_eq!(FileCategory::from_name("index.html"), FileCategory::Html);
        assert_eq!(FileCategory::from_name("app.js"), FileCategory::Text);
        assert_eq!(FileCategory::from_name("style.scss"), FileCategory::Text);
        assert_eq!(FileCategory::from_name("photo.png"), FileCategory::Image);
        assert_eq!(FileCategory::from_name("clip.webm"), FileCategory::Video);
        assert_eq!(FileCategory::from_name("song.mp3"), FileCategory::Audio);
        assert_eq!(FileCategory::from_name("paper.pdf"), FileCategory::Pdf);
    }

    #[test]
    fn test_category_is_case_insensitive() {
        assert_eq!(FileCategory::from_name("PHOTO.PNG"), FileCategory::Image);
        assert_eq!(FileCategory::from_name("Index.Html"), FileCategory::Html);
        assert_eq!(FileCategory::from_name("paper.PdF"), FileCategory::Pdf);
    }

    #[test]
    fn test_unlisted_extension_is_unknown() {
        assert_eq!(FileCategory::from_name("notes.md"), FileCategory::Unknown);
        assert_eq!(FileCategory::from_name("archive.zip"), FileCategory::Unknown);
    }

    #[test]
    fn test_extensionless_name_is_unknown() {
        assert_eq!(FileCategory::from_name("README"), FileCategory::Unknown);
        assert_eq!(FileCategory::from_name(""), FileCategory::Unknown);
    }

    #[test]
    fn test_searchable_categories() {
        assert!(FileCategory::Html.is_searchable());
        assert!(FileCategory::Text.is_searchable());
        assert!(!FileCategory::Image.is_searchable());
        assert!(!FileCategory::Video.is_searchable());
        assert!(!FileCategory::Audio.is_searchable());
        assert!(!FileCategory::Pdf.is_searchable());
        assert!(!FileCategory::Unknown.is_searchable());
    }

    // =========================================================================
    // FileId Tests
    // =========================================================================

    #[test]
    fn test_file_id_round_trip() {
        let id = FileId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id, FileId::new(7));
        assert_ne!(id, FileId::new(8));
    }
}
