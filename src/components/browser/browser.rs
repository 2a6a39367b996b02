//! Main browser pane.
//!
//! Composes the folder picker, search bar, and the tree-or-results listing,
//! and owns the category dispatch that routes a selected file to its viewer
//! or to the editor.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::picker::{FolderPicker, load_file_list};
use super::search::{SearchBar, SearchResults};
use super::tree::FolderTree;
use crate::app::AppContext;
use crate::core::{editor, viewer};
use crate::models::{FileCategory, FileHandle, FileId};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Callback context tree rows and search results use to open a file by id.
#[derive(Clone, Copy)]
pub struct OpenFile(pub Callback<FileId>);

/// File browser pane: picker, search, and the current listing.
#[component]
pub fn Browser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let open = Callback::new(move |id: FileId| {
        let Some(handle) = ctx.session.get(id) else {
            return;
        };
        spawn_local(open_file(ctx, handle));
    });
    provide_context(OpenFile(open));

    let searching = Signal::derive(move || ctx.search.results.with(|r| r.is_some()));

    // Dropped files replace the batch just like a picker selection.
    let handle_dragover = move |ev: leptos::ev::DragEvent| ev.prevent_default();
    let handle_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer()
            && let Some(list) = transfer.files()
        {
            load_file_list(ctx, &list);
        }
    };

    view! {
        <section class=css::browser on:dragover=handle_dragover on:drop=handle_drop>
            <FolderPicker />
            <SearchBar />
            <div class=css::listing>
                <Show when=move || searching.get() fallback=|| view! { <FolderTree /> }>
                    <SearchResults />
                </Show>
            </div>
        </section>
    }
}

/// Dispatch a selected file to the path its category demands.
///
/// HTML goes to the round-tripper and the editing surface; text and images
/// get generated viewer documents; media and PDFs open straight from an
/// object URL. Every failure surfaces as a notice.
async fn open_file(ctx: AppContext, handle: FileHandle) {
    match handle.category() {
        FileCategory::Html => match handle.read_text().await {
            Ok(content) => {
                ctx.document.load(&content);
                if let Err(e) = editor::set_content(&content) {
                    ctx.notices.error(e.to_string());
                }
            }
            Err(e) => ctx.notices.warn(e.to_string()),
        },
        FileCategory::Text => match handle.read_text().await {
            Ok(content) => {
                if let Err(e) = dom::open_html_document(&viewer::text_document(&content)) {
                    ctx.notices.error(e.to_string());
                }
            }
            Err(e) => ctx.notices.warn(e.to_string()),
        },
        FileCategory::Image => match handle.object_url() {
            Ok(url) => {
                let doc = viewer::image_document(&url, handle.name());
                if let Err(e) = dom::open_html_document(&doc) {
                    ctx.notices.error(e.to_string());
                }
            }
            Err(e) => ctx.notices.warn(e.to_string()),
        },
        FileCategory::Video | FileCategory::Audio | FileCategory::Pdf => {
            match handle.object_url() {
                Ok(url) => {
                    if let Err(e) = dom::open_url(&url) {
                        ctx.notices.error(e.to_string());
                    }
                }
                Err(e) => ctx.notices.warn(e.to_string()),
            }
        }
        FileCategory::Unknown => {
            ctx.notices
                .info(format!("No viewer for \"{}\"", handle.name()));
        }
    }
}
