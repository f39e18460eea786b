//! Directory browser state machine.
//!
//! All view state lives in one [`BrowserState`] value and every change goes
//! through [`reduce`]. The reducer never performs I/O: when a transition needs
//! the network it returns an [`Effect`] describing the request, and the caller
//! feeds the outcome back as another [`Action`].
//!
//! ## List requests
//!
//! Each list request carries a [`RequestToken`]. Only the completion whose
//! token matches the most recently issued one is applied, so a slow response
//! for a directory the user already left is dropped.

use crate::api::{Operation, UploadKind};
use crate::error::ApiError;
use crate::models::DirectoryListing;
use crate::path::Prefix;

/// Generation number of a list request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// New-folder input state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FolderForm {
    pub open: bool,
    pub name: String,
}

/// Everything the directory browser renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserState {
    /// Directory being shown
    pub current_path: Prefix,
    /// Last successfully fetched listing
    pub listing: DirectoryListing,
    /// A list request is in flight
    pub loading: bool,
    /// Banner text; `None` hides the banner
    pub error: Option<String>,
    pub folder_form: FolderForm,
    latest_list: RequestToken,
}

impl BrowserState {
    /// Token of the most recent list request.
    pub fn latest_list(&self) -> RequestToken {
        self.latest_list
    }

    /// Whether the Back button should be enabled.
    pub fn can_navigate_up(&self) -> bool {
        !self.current_path.is_root()
    }
}

/// Inputs to [`reduce`]: user intents and request completions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Re-list the current directory
    Refresh,
    /// Descend into a folder prefix as listed by the backend
    NavigateInto(String),
    NavigateUp,
    ListCompleted {
        token: RequestToken,
        result: Result<DirectoryListing, ApiError>,
    },
    /// Files were picked for upload into the current directory
    Upload { kind: UploadKind, file_count: usize },
    Delete { key: String },
    OpenFolderForm,
    CancelFolderForm,
    EditFolderName(String),
    /// Submit the new-folder form
    CreateFolder,
    MutationCompleted {
        op: Operation,
        result: Result<(), ApiError>,
    },
    DismissError,
}

/// A request the reducer wants performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    List { prefix: Prefix, token: RequestToken },
    /// Upload the picked files; the caller still holds them
    Upload { kind: UploadKind, prefix: Prefix },
    Delete { key: String },
    CreateFolder { name: String, prefix: Prefix },
}

/// Apply `action` to `state`.
///
/// Returns the next state and at most one request to perform.
pub fn reduce(mut state: BrowserState, action: Action) -> (BrowserState, Option<Effect>) {
    let effect = match action {
        Action::Refresh => Some(begin_list(&mut state)),

        Action::NavigateInto(folder) => match Prefix::parse(&folder) {
            Ok(prefix) => {
                state.current_path = prefix;
                Some(begin_list(&mut state))
            }
            Err(e) => {
                state.error = Some(format!("Invalid folder path: {e}"));
                None
            }
        },

        Action::NavigateUp => match state.current_path.parent() {
            Some(parent) => {
                state.current_path = parent;
                Some(begin_list(&mut state))
            }
            None => None,
        },

        Action::ListCompleted { token, result } => {
            if token == state.latest_list {
                state.loading = false;
                match result {
                    Ok(listing) => state.listing = listing,
                    Err(e) => state.error = Some(e.user_message(Operation::List)),
                }
            }
            None
        }

        Action::Upload { kind, file_count } => {
            if file_count == 0 {
                None
            } else {
                state.error = None;
                Some(Effect::Upload {
                    kind,
                    prefix: state.current_path.clone(),
                })
            }
        }

        Action::Delete { key } => {
            state.error = None;
            Some(Effect::Delete { key })
        }

        Action::OpenFolderForm => {
            state.folder_form.open = true;
            None
        }

        Action::CancelFolderForm => {
            state.folder_form = FolderForm::default();
            None
        }

        Action::EditFolderName(name) => {
            state.folder_form.name = name;
            None
        }

        Action::CreateFolder => {
            if state.folder_form.name.is_empty() {
                None
            } else {
                state.error = None;
                Some(Effect::CreateFolder {
                    name: state.folder_form.name.clone(),
                    prefix: state.current_path.clone(),
                })
            }
        }

        Action::MutationCompleted { op, result } => match result {
            Ok(()) => {
                if op == Operation::CreateFolder {
                    state.folder_form = FolderForm::default();
                }
                Some(begin_list(&mut state))
            }
            Err(e) => {
                state.error = Some(e.user_message(op));
                None
            }
        },

        Action::DismissError => {
            state.error = None;
            None
        }
    };

    (state, effect)
}

/// Enter Loading and issue a list request for the current path.
fn begin_list(state: &mut BrowserState) -> Effect {
    state.latest_list = state.latest_list.next();
    state.loading = true;
    state.error = None;
    Effect::List {
        prefix: state.current_path.clone(),
        token: state.latest_list,
    }
}
