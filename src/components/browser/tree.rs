//! Collapsible folder tree view.
//!
//! One row per node, indented by depth. Directory rows toggle their nested
//! child container (default collapsed, state not persisted across batch
//! reloads); leaf rows resolve clicks to a concrete file by id.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::browser::OpenFile;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{FileCategory, TreeNode};

stylance::import_crate_style!(css, "src/components/browser/tree.module.css");

/// Icon for a file row based on its category.
pub(super) fn category_icon(name: &str) -> IconData {
    match FileCategory::from_name(name) {
        FileCategory::Html => ic::EDIT,
        FileCategory::Text => ic::FILE_TEXT,
        FileCategory::Image => ic::FILE_IMAGE,
        FileCategory::Video => ic::FILE_VIDEO,
        FileCategory::Audio => ic::FILE_AUDIO,
        FileCategory::Pdf => ic::FILE_PDF,
        FileCategory::Unknown => ic::FILE,
    }
}

fn row_indent(depth: usize) -> String {
    format!("{}px", 8 + depth * 18)
}

/// Hierarchical view of the current session batch.
#[component]
pub fn FolderTree() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::tree role="tree" aria-label="Folder tree">
            {move || {
                let nodes = ctx.session.tree.get();
                if nodes.is_empty() {
                    view! {
                        <p class=css::empty>"Select a folder to browse its contents."</p>
                    }
                        .into_any()
                } else {
                    nodes
                        .into_iter()
                        .map(|node| view! { <TreeBranch node=node depth=0 /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

/// One node and, for directories, its nested children.
#[component]
fn TreeBranch(node: TreeNode, depth: usize) -> impl IntoView {
    let indent = row_indent(depth);

    if node.is_dir {
        let expanded = RwSignal::new(false);
        let name = node.name;
        let children = node.children;

        view! {
            <div class=css::branch role="treeitem" aria-expanded=move || expanded.get().to_string()>
                <div
                    class=format!("{} {}", css::row, css::dirRow)
                    style:padding-left=indent
                    on:click=move |_| expanded.update(|e| *e = !*e)
                >
                    <span class=css::toggle aria-hidden="true">
                        {move || {
                            if expanded.get() {
                                view! { <Icon icon=ic::CHEVRON_DOWN /> }.into_any()
                            } else {
                                view! { <Icon icon=ic::CHEVRON_RIGHT /> }.into_any()
                            }
                        }}
                    </span>
                    <span class=css::icon aria-hidden="true">
                        {move || {
                            if expanded.get() {
                                view! { <Icon icon=ic::FOLDER_OPEN /> }.into_any()
                            } else {
                                view! { <Icon icon=ic::FOLDER /> }.into_any()
                            }
                        }}
                    </span>
                    <span class=css::dirName>{name}</span>
                </div>
                <Show when=move || expanded.get()>
                    <div class=css::children role="group">
                        {children
                            .clone()
                            .into_iter()
                            .map(|child| view! { <TreeBranch node=child depth=depth + 1 /> })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        }
        .into_any()
    } else {
        let open = use_context::<OpenFile>().expect("OpenFile must be provided");
        let Some(id) = node.file else {
            return ().into_any();
        };
        let icon = category_icon(&node.name);
        let name = node.name;
        let aria = format!("File: {}", name);

        view! {
            <div
                class=format!("{} {}", css::row, css::fileRow)
                style:padding-left=indent
                role="treeitem"
                tabindex="0"
                aria-label=aria
                on:click=move |_| open.0.run(id)
            >
                <span class=css::toggle></span>
                <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                <span class=css::fileName>{name}</span>
            </div>
        }
        .into_any()
    }
}
