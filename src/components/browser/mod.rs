//! Directory browser UI components.
//!
//! Components:
//! - [`DirectoryBrowser`] - Main view
//! - [`Toolbar`] - Back button, location and actions
//! - [`NewFolderForm`] - Folder name input
//! - [`ErrorBanner`] - Last error message
//! - [`EntryList`] - Folder and file rows

mod banner;
#[allow(clippy::module_inception)]
mod browser;
mod entry_list;
mod folder_form;
mod toolbar;

pub use banner::ErrorBanner;
pub use browser::DirectoryBrowser;
pub use entry_list::EntryList;
pub use folder_form::NewFolderForm;
pub use toolbar::Toolbar;
