//! Browser toolbar component.
//!
//! Contains the back button, current location, and action buttons.

use bucketfm_core::{Action, UploadKind};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::store::BrowserStore;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Toolbar with navigation and actions.
#[component]
pub fn Toolbar() -> impl IntoView {
    let store = use_context::<BrowserStore>().expect("BrowserStore must be provided");

    let can_go_up = Memo::new(move |_| store.state.with(|s| s.can_navigate_up()));
    let location = Memo::new(move |_| {
        store
            .state
            .with(|s| s.current_path.display().to_string())
    });

    let on_back = move |_: leptos::ev::MouseEvent| store.dispatch(Action::NavigateUp);
    let on_new_folder = move |_: leptos::ev::MouseEvent| store.dispatch(Action::OpenFolderForm);

    view! {
        <header class=css::toolbar>
            <div class=css::location>
                <button
                    class=move || button_class(!can_go_up.get())
                    on:click=on_back
                    disabled=move || !can_go_up.get()
                    title="Go to parent directory"
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                    "Back"
                </button>
                <span class=css::path>{move || location.get()}</span>
            </div>

            <div class=css::actions>
                <button class=css::button on:click=on_new_folder title="Create a folder here">
                    <Icon icon=ic::FOLDER_PLUS />
                    "New Folder"
                </button>
                <UploadButton kind=UploadKind::File label="Upload File" />
                <UploadButton kind=UploadKind::Folder label="Upload Folder" />
            </div>
        </header>
    }
}

fn button_class(disabled: bool) -> String {
    if disabled {
        format!("{} {}", css::button, css::buttonDisabled)
    } else {
        css::button.to_string()
    }
}

/// Button backed by a hidden file input.
///
/// Folder uploads turn the input into a directory picker.
#[component]
fn UploadButton(kind: UploadKind, label: &'static str) -> impl IntoView {
    let store = use_context::<BrowserStore>().expect("BrowserStore must be provided");
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let is_folder = kind == UploadKind::Folder;

    // webkitdirectory has no typed setter; set it once the input is mounted
    Effect::new(move |_| {
        if is_folder && let Some(input) = input_ref.get() {
            let _ = input.set_attribute("webkitdirectory", "");
        }
    });

    let on_pick = move |_: leptos::ev::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_: web_sys::Event| {
        if let Some(input) = input_ref.get() {
            store.upload(kind, dom::take_selected_files(&input));
        }
    };

    view! {
        <span class=css::upload>
            <input
                type="file"
                class=css::hiddenInput
                node_ref=input_ref
                multiple=is_folder
                on:change=on_change
            />
            <button class=css::button on:click=on_pick title=label>
                <Icon icon=ic::UPLOAD />
                {label}
            </button>
        </span>
    }
}
