//! Folder selection input.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use web_sys::{FileList, HtmlInputElement};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{FileHandle, FileId};

stylance::import_crate_style!(css, "src/components/browser/picker.module.css");

/// Build a fresh session batch from a browser file list.
///
/// Ids are assigned from batch position; the previous batch, its tree, and
/// any active search are all replaced wholesale.
pub fn load_file_list(ctx: AppContext, list: &FileList) {
    let mut files = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(file) = list.item(i) {
            files.push(FileHandle::new(FileId::new(files.len()), file));
        }
    }

    ctx.search.show_all();
    ctx.session.replace(files);
}

/// Folder picker bound to a `webkitdirectory` file input.
#[component]
pub fn FolderPicker() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let handle_change = move |ev: leptos::ev::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
        if let Some(input) = input
            && let Some(list) = input.files()
        {
            load_file_list(ctx, &list);
        }
    };

    view! {
        <label class=css::picker>
            <span class=css::icon aria-hidden="true"><Icon icon=ic::UPLOAD /></span>
            <span class=css::text>"Select a folder (or drop files here)"</span>
            <input
                class=css::input
                type="file"
                {..leptos::tachys::html::attribute::custom::custom_attribute("webkitdirectory", "")}
                multiple=""
                on:change=handle_change
            />
        </label>
    }
}
