//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight, LuCircleAlert as Error,
        LuFile as File, LuFileAudio as FileAudio, LuFileText as FileText,
        LuFileVideo as FileVideo, LuFolder as Folder, LuFolderOpen as FolderOpen,
        LuImage as FileImage, LuInfo as Info, LuPencil as Edit, LuSearch as Search,
        LuTriangleAlert as Warning, LuUpload as Upload, LuX as Close,
    };
    pub use icondata::LuBookOpen as FilePdf;
}

mod bootstrap {
    pub use icondata::{
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight,
        BsExclamationOctagon as Error, BsExclamationTriangle as Warning, BsFileEarmark as File,
        BsFileEarmarkImage as FileImage, BsFileEarmarkMusic as FileAudio,
        BsFileEarmarkPdf as FilePdf, BsFileEarmarkPlay as FileVideo,
        BsFileEarmarkText as FileText, BsFolder2Open as FolderOpen, BsFolderFill as Folder,
        BsInfoCircle as Info, BsPencil as Edit, BsSearch as Search, BsUpload as Upload,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(SEARCH, Search);
themed_icon!(UPLOAD, Upload);
themed_icon!(EDIT, Edit);
themed_icon!(CLOSE, Close);
themed_icon!(INFO, Info);
themed_icon!(WARNING, Warning);
themed_icon!(ERROR, Error);
