//! Main directory browser component.
//!
//! ## Layout
//!
//! - Toolbar (back, location, actions)
//! - New folder form, when open
//! - Error banner, when an error is set
//! - Spinner while a listing is loading, otherwise the entry list

use bucketfm_core::Action;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{EntryList, ErrorBanner, NewFolderForm, Toolbar};
use crate::components::icons as ic;
use crate::store::BrowserStore;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Directory browser view component.
#[component]
pub fn DirectoryBrowser() -> impl IntoView {
    let store = use_context::<BrowserStore>().expect("BrowserStore must be provided");

    let loading = Memo::new(move |_| store.state.with(|s| s.loading));
    let form_open = Memo::new(move |_| store.state.with(|s| s.folder_form.open));

    // Initial listing; later listings are requested by the reducer itself.
    Effect::new(move |_| store.dispatch(Action::Refresh));

    view! {
        <div class=css::browser>
            <Toolbar />

            <Show when=move || form_open.get()>
                <NewFolderForm />
            </Show>

            <ErrorBanner />

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class=css::loading aria-busy="true">
                        <span class=css::spinner><Icon icon=ic::SPINNER /></span>
                    </div>
                }
            >
                <EntryList />
            </Show>
        </div>
    }
}
