//! Root application module.
//!
//! Builds the API client from configuration, provides the [`BrowserStore`]
//! context, and wraps the page in an error boundary.

use leptos::prelude::*;

use crate::client::ApiClient;
use crate::components::DirectoryBrowser;
use crate::config::{APP_NAME, api_base_url};
use crate::store::BrowserStore;
use crate::utils::log;

/// Root application component with error boundary.
///
/// This component:
/// - Resolves the API base URL and creates the [`BrowserStore`]
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the directory browser
#[component]
pub fn App() -> impl IntoView {
    let client = ApiClient::new(api_base_url());
    log::info(&format!("{} using API at {}", APP_NAME, client.base_url()));

    provide_context(BrowserStore::new(client));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #b91c1c; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #b91c1c; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            padding: 0.5rem 1.5rem;
                            border: 1px solid #d1d5db;
                            border-radius: 4px;
                            background: white;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <main>
                <h1 class="app-title">{APP_NAME}</h1>
                <DirectoryBrowser />
            </main>
        </ErrorBoundary>
    }
}
