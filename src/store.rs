//! Reactive store for the directory browser.
//!
//! Wraps the core reducer in a Leptos signal. Components call
//! [`BrowserStore::dispatch`]; any [`Effect`] the reducer returns is run as a
//! local task and its outcome is dispatched back as a completion action.
//!
//! # Note
//!
//! This struct is `Copy` because all fields are Leptos reactive handles.

use bucketfm_core::{Action, BrowserState, Effect, Operation, UploadKind, reduce};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::client::ApiClient;
use crate::utils::log;

#[derive(Clone, Copy)]
pub struct BrowserStore {
    /// Current view state (read it through signals in components).
    pub state: RwSignal<BrowserState>,
    client: StoredValue<ApiClient>,
}

impl BrowserStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            state: RwSignal::new(BrowserState::default()),
            client: StoredValue::new(client),
        }
    }

    /// Apply an action and run the request it produces, if any.
    pub fn dispatch(&self, action: Action) {
        self.dispatch_with_files(action, Vec::new());
    }

    /// Upload the picked files into the current directory.
    ///
    /// An empty selection is a no-op.
    pub fn upload(&self, kind: UploadKind, files: Vec<File>) {
        let action = Action::Upload {
            kind,
            file_count: files.len(),
        };
        self.dispatch_with_files(action, files);
    }

    fn dispatch_with_files(&self, action: Action, files: Vec<File>) {
        // The store can outlive its signal when a response lands after teardown.
        let effect = self
            .state
            .try_update(|state| {
                let (next, effect) = reduce(std::mem::take(state), action);
                *state = next;
                effect
            })
            .flatten();

        if let Some(effect) = effect {
            self.run(effect, files);
        }
    }

    fn run(&self, effect: Effect, files: Vec<File>) {
        let store = *self;
        let client = self.client.get_value();

        spawn_local(async move {
            let completion = match effect {
                Effect::List { prefix, token } => {
                    let result = client.list(&prefix).await;
                    report(Operation::List, prefix.as_str(), result.as_ref().map(|_| ()));
                    Action::ListCompleted { token, result }
                }
                Effect::Upload { kind, prefix } => {
                    let result = client.upload(kind, &files, &prefix).await;
                    let target = format!("{} file(s) -> {}", files.len(), prefix.display());
                    report(kind.operation(), &target, result.as_ref().map(|_| ()));
                    Action::MutationCompleted {
                        op: kind.operation(),
                        result,
                    }
                }
                Effect::Delete { key } => {
                    let result = client.delete(&key).await;
                    report(Operation::Delete, &key, result.as_ref().map(|_| ()));
                    Action::MutationCompleted {
                        op: Operation::Delete,
                        result,
                    }
                }
                Effect::CreateFolder { name, prefix } => {
                    let result = client.create_folder(&name, &prefix).await;
                    let target = format!("{}{}/", prefix, name);
                    report(Operation::CreateFolder, &target, result.as_ref().map(|_| ()));
                    Action::MutationCompleted {
                        op: Operation::CreateFolder,
                        result,
                    }
                }
            };
            store.dispatch(completion);
        });
    }
}

/// Log the outcome of one request.
fn report<E: std::fmt::Display>(op: Operation, target: &str, result: Result<(), &E>) {
    match result {
        Ok(()) => log::info(&format!("[api] {} '{}' ok", op.label(), target)),
        Err(e) => log::warn(&format!("[api] {} '{}' failed: {}", op.label(), target, e)),
    }
}
