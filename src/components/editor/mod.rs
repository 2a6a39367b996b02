//! Editor pane hosting the external WYSIWYG widget.
//!
//! Registers the save, preview, and clear-header actions on the widget's
//! extensibility points and renders the host element the widget attaches
//! to, plus the title input used for synthesized exports.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{DEFAULT_TITLE, EDITOR_HOST_ID, EXPORT_FILE_NAME, editor_actions};
use crate::core::editor;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/editor/editor.module.css");

/// Read the current body from the widget and assemble the full document.
///
/// Export warnings (missing header/footer in the loaded source) surface as
/// notices before the document is delivered.
fn current_export(ctx: AppContext) -> Option<String> {
    let body = match editor::get_content() {
        Ok(body) => body,
        Err(e) => {
            ctx.notices.error(e.to_string());
            return None;
        }
    };

    let export = ctx.document.export(&body);
    for warning in &export.warnings {
        ctx.notices.warn(warning.message());
    }
    Some(export.html)
}

/// Export and download as `document.html`.
fn save_document(ctx: AppContext) {
    if let Some(html) = current_export(ctx)
        && let Err(e) = dom::download_html(EXPORT_FILE_NAME, &html)
    {
        ctx.notices.error(e.to_string());
    }
}

/// Export into a new browsing context without downloading.
fn preview_document(ctx: AppContext) {
    if let Some(html) = current_export(ctx)
        && let Err(e) = dom::open_html_document(&html)
    {
        ctx.notices.error(e.to_string());
    }
}

/// Editor pane component.
#[component]
pub fn EditorPane() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Wire the widget's toolbar/menu extensibility points once at setup.
    let registered = editor::register_action(editor_actions::SAVE, move || save_document(ctx))
        .and_then(|_| {
            editor::register_action(editor_actions::PREVIEW, move || preview_document(ctx))
        })
        .and_then(|_| {
            editor::register_action(editor_actions::CLEAR_HEADER, move || {
                ctx.document.clear();
                ctx.notices
                    .info("Header context cleared; the next export starts from a fresh document.");
            })
        });
    if let Err(e) = registered {
        ctx.notices.warn(e.to_string());
    }

    let title = ctx.document.title;

    view! {
        <section class=css::pane>
            <div class=css::toolbar>
                <span class=css::icon aria-hidden="true"><Icon icon=ic::EDIT /></span>
                <input
                    class=css::title
                    type="text"
                    placeholder=DEFAULT_TITLE
                    aria-label="Document title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </div>
            // The widget attaches itself to this host element.
            <div class=css::host id=EDITOR_HOST_ID></div>
        </section>
    }
}
