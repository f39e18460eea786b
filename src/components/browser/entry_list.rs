//! Entry list component.
//!
//! Folder rows first, then file rows, or a single empty-state message when
//! the directory has neither.

use bucketfm_core::{Action, DirectoryListing, FileEntry};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::EMPTY_FOLDER_TEXT;
use crate::store::BrowserStore;
use crate::utils::format::{format_date_iso, format_size};

stylance::import_crate_style!(css, "src/components/browser/entry_list.module.css");

#[component]
pub fn EntryList() -> impl IntoView {
    let store = use_context::<BrowserStore>().expect("BrowserStore must be provided");

    let folders = Memo::new(move |_| store.state.with(|s| s.listing.folders.clone()));
    let files = Memo::new(move |_| store.state.with(|s| s.listing.files.clone()));
    let is_empty = Memo::new(move |_| store.state.with(|s| s.listing.is_empty()));

    view! {
        <div class=css::list role="list" aria-label="Directory contents">
            <For
                each=move || folders.get()
                key=|folder| folder.clone()
                children=move |folder| view! { <FolderRow folder=folder /> }
            />
            <For
                each=move || files.get()
                key=|file| (file.key.clone(), file.size, file.last_modified.clone())
                children=move |file| view! { <FileRow file=file /> }
            />
            <Show when=move || is_empty.get()>
                <div class=css::empty>{EMPTY_FOLDER_TEXT}</div>
            </Show>
        </div>
    }
}

#[component]
fn FolderRow(folder: String) -> impl IntoView {
    let store = use_context::<BrowserStore>().expect("BrowserStore must be provided");

    let name = DirectoryListing::folder_name(&folder);
    let aria_label = format!("Folder: {}", name);
    let target = folder.clone();

    let on_open = move |_: leptos::ev::MouseEvent| {
        store.dispatch(Action::NavigateInto(target.clone()));
    };

    view! {
        <div class=css::row role="listitem">
            <button class=css::entryLink on:click=on_open aria-label=aria_label>
                <span class=css::folderIcon aria-hidden="true"><Icon icon=ic::FOLDER /></span>
                <span class=css::name>{name}</span>
            </button>
            <DeleteButton target=folder />
        </div>
    }
}

#[component]
fn FileRow(file: FileEntry) -> impl IntoView {
    let name = file.name().to_string();
    let size = format_size(file.size);
    let modified = file.last_modified.as_deref().and_then(format_date_iso);
    let metadata = file.metadata_pairs();

    view! {
        <div class=css::row role="listitem">
            <div class=css::entry>
                <div class=css::entryMain>
                    <span class=css::fileIcon aria-hidden="true"><Icon icon=ic::FILE /></span>
                    <span class=css::name>{name}</span>
                    <span class=css::meta>{size}</span>
                    {modified.map(|date| view! { <span class=css::meta>{date}</span> })}
                </div>
                {(!metadata.is_empty()).then(|| view! {
                    <dl class=css::metadata>
                        {metadata
                            .into_iter()
                            .map(|(key, value)| view! {
                                <div class=css::metadataItem>
                                    <dt>{key}":"</dt>
                                    <dd>{value}</dd>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                })}
            </div>
            <DeleteButton target=file.key />
        </div>
    }
}

/// Delete button for a file key or folder prefix. No confirmation step.
#[component]
fn DeleteButton(target: String) -> impl IntoView {
    let store = use_context::<BrowserStore>().expect("BrowserStore must be provided");
    let title = format!("Delete {}", target);

    view! {
        <button
            class=css::deleteButton
            title=title
            on:click=move |_| store.dispatch(Action::Delete { key: target.clone() })
        >
            <Icon icon=ic::TRASH />
        </button>
    }
}
