//! Notice bar component.
//!
//! Renders the session's non-blocking status notifications: read failures,
//! blocked popups, export warnings. Each notice can be dismissed manually
//! and expires on its own after a timeout.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::NoticeKind;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Stacked list of active notices.
#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let notices = ctx.notices;

    view! {
        <div class=css::bar aria-live="polite">
            <For
                each=move || notices.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let kind_class = match notice.kind {
                        NoticeKind::Info => css::info,
                        NoticeKind::Warning => css::warning,
                        NoticeKind::Error => css::error,
                    };
                    let icon = match notice.kind {
                        NoticeKind::Info => ic::INFO,
                        NoticeKind::Warning => ic::WARNING,
                        NoticeKind::Error => ic::ERROR,
                    };
                    let id = notice.id;
                    view! {
                        <div class=format!("{} {}", css::notice, kind_class) role="status">
                            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                            <span class=css::message>{notice.message.clone()}</span>
                            <button
                                class=css::dismiss
                                title="Dismiss"
                                on:click=move |_| notices.dismiss(id)
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
