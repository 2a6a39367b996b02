//! Content search bar and flat result list.
//!
//! Each search reads every textual candidate concurrently; results arrive
//! in completion order (a known property, not a defect), guarded by the
//! session's search generation so stale reads never land.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::browser::OpenFile;
use super::tree::category_icon;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::search;

stylance::import_crate_style!(css, "src/components/browser/search.module.css");

/// Keyword input scanning text and HTML file contents.
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let term = RwSignal::new(String::new());

    let run = move || {
        match search::prepare_term(&term.get_untracked()) {
            // Empty term falls back to the full hierarchical tree.
            None => ctx.search.show_all(),
            Some(needle) => {
                let generation = ctx.search.begin();
                let files = ctx.session.files.get_untracked();
                for handle in search::candidates(&files) {
                    let needle = needle.clone();
                    spawn_local(async move {
                        match handle.read_text().await {
                            Ok(content) => {
                                if search::matches(&content, &needle) {
                                    ctx.search.publish(generation, handle.id());
                                }
                            }
                            Err(e) => ctx.notices.warn(e.to_string()),
                        }
                    });
                }
            }
        }
    };

    view! {
        <div class=css::bar>
            <input
                class=css::input
                type="search"
                placeholder="Search file contents"
                prop:value=move || term.get()
                on:input=move |ev| term.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        run();
                    }
                }
            />
            <button class=css::button title="Search" on:click=move |_| run()>
                <Icon icon=ic::SEARCH />
            </button>
        </div>
    }
}

/// Flat (non-hierarchical) list of matching files.
#[component]
pub fn SearchResults() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let open = use_context::<OpenFile>().expect("OpenFile must be provided");

    let results = Signal::derive(move || ctx.search.results.get().unwrap_or_default());

    view! {
        <div class=css::results role="list" aria-label="Search results">
            <Show
                when=move || !results.get().is_empty()
                fallback=|| view! { <p class=css::empty>"No matches."</p> }
            >
                <For
                    each=move || results.get()
                    key=|id| id.index()
                    children=move |id| {
                        let path = ctx
                            .session
                            .get(id)
                            .map(|h| h.relative_path().to_string())
                            .unwrap_or_default();
                        let icon = category_icon(&path);
                        view! {
                            <div class=css::row role="listitem" on:click=move |_| open.0.run(id)>
                                <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                                <span class=css::path>{path}</span>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
