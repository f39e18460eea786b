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
        LuChevronLeft as ChevronLeft, LuFile as File, LuFolder as Folder,
        LuFolderPlus as FolderPlus, LuLoader as Spinner, LuTrash2 as Trash, LuUpload as Upload,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Spinner, BsChevronLeft as ChevronLeft, BsFileEarmark as File,
        BsFolderFill as Folder, BsFolderPlus as FolderPlus, BsTrash as Trash,
        BsUpload as Upload, BsXLg as Close,
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

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_PLUS, FolderPlus);
themed_icon!(FILE, File);
themed_icon!(UPLOAD, Upload);
themed_icon!(TRASH, Trash);
themed_icon!(SPINNER, Spinner);
themed_icon!(CLOSE, Close);
