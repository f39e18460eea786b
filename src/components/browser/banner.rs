//! Error banner.
//!
//! Shows the most recent failure until the next request starts or the user
//! dismisses it.

use bucketfm_core::Action;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::store::BrowserStore;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_context::<BrowserStore>().expect("BrowserStore must be provided");

    let error = Memo::new(move |_| store.state.with(|s| s.error.clone()));

    view! {
        {move || {
            error.get().map(|message| {
                view! {
                    <div class=css::banner role="alert">
                        <span class=css::bannerText>{message}</span>
                        <button
                            class=css::bannerClose
                            title="Dismiss"
                            on:click=move |_| store.dispatch(Action::DismissError)
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                }
            })
        }}
    }
}
