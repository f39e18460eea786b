//! New folder form.
//!
//! Enter submits, Escape cancels. Submitting an empty name does nothing.

use bucketfm_core::Action;
use leptos::prelude::*;

use crate::store::BrowserStore;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

#[component]
pub fn NewFolderForm() -> impl IntoView {
    let store = use_context::<BrowserStore>().expect("BrowserStore must be provided");
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let name = Memo::new(move |_| store.state.with(|s| s.folder_form.name.clone()));

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => store.dispatch(Action::CreateFolder),
        "Escape" => store.dispatch(Action::CancelFolderForm),
        _ => {}
    };

    view! {
        <div class=css::folderForm>
            <input
                type="text"
                class=css::folderInput
                placeholder="New folder name"
                node_ref=input_ref
                prop:value=move || name.get()
                on:input=move |ev| store.dispatch(Action::EditFolderName(event_target_value(&ev)))
                on:keydown=on_keydown
            />
            <button class=css::button on:click=move |_| store.dispatch(Action::CreateFolder)>
                "Create"
            </button>
            <button class=css::button on:click=move |_| store.dispatch(Action::CancelFolderForm)>
                "Cancel"
            </button>
        </div>
    }
}
