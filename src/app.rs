//! Root application module.
//!
//! Contains the main App component, AppContext definition, the per-domain
//! state structs, and application-level setup logic following Leptos
//! conventions.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::browser::Browser;
use crate::components::editor::EditorPane;
use crate::components::status::NoticeBar;
use crate::config::{APP_NAME, APP_VERSION, DEFAULT_TITLE, NOTICE_TIMEOUT_MS};
use crate::core::document::Export;
use crate::core::{DocumentSnapshot, build_tree};
use crate::models::{FileHandle, FileId, Notice, NoticeKind, TreeNode};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// SessionState
// ============================================================================

/// The session's file batch and the tree derived from it.
///
/// Replaced wholesale on every folder selection; there is no incremental
/// update, which also discards all tree expansion state by design.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct SessionState {
    /// Current batch of path-bearing file handles.
    pub files: RwSignal<Vec<FileHandle>>,
    /// Folder forest reconstructed from the batch.
    pub tree: RwSignal<Vec<TreeNode>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            files: RwSignal::new(Vec::new()),
            tree: RwSignal::new(Vec::new()),
        }
    }

    /// Replace the whole batch and rebuild the tree from scratch.
    pub fn replace(&self, files: Vec<FileHandle>) {
        let tree = build_tree(files.iter().map(|f| (f.id(), f.relative_path())));
        self.files.set(files);
        self.tree.set(tree);
    }

    /// Resolve a file handle by its stable id.
    pub fn get(&self, id: FileId) -> Option<FileHandle> {
        self.files
            .with_untracked(|files| files.get(id.index()).cloned())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SearchState
// ============================================================================

/// Content-search results and the generation guard against stale reads.
///
/// `results` of `None` means "no search active, show the full tree";
/// `Some` holds the flat match list in arrival order. Every search bumps
/// the generation; reads finishing under an older generation are discarded
/// so a slow read from a previous search never pollutes a newer one.
#[derive(Clone, Copy)]
pub struct SearchState {
    /// Flat match list, or `None` when the hierarchical tree is shown.
    pub results: RwSignal<Option<Vec<FileId>>>,
    generation: RwSignal<u64>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            results: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Drop any active search and show the full tree again.
    pub fn show_all(&self) {
        self.generation.update(|g| *g += 1);
        self.results.set(None);
    }

    /// Start a new search; returns the generation token its reads must
    /// present when publishing.
    pub fn begin(&self) -> u64 {
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.results.set(Some(Vec::new()));
        generation
    }

    /// Publish one match. Ignored when `generation` is no longer current.
    pub fn publish(&self, generation: u64, id: FileId) {
        if self.generation.get_untracked() != generation {
            return;
        }
        self.results.update(|results| {
            if let Some(list) = results
                && !list.contains(&id)
            {
                list.push(id);
            }
        });
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// DocumentState
// ============================================================================

/// The round-trip snapshot plus the user-set title for synthesized exports.
#[derive(Clone, Copy)]
pub struct DocumentState {
    /// Literal text of the last HTML file opened for editing.
    pub snapshot: RwSignal<DocumentSnapshot>,
    /// Document title used when exporting without a loaded source document.
    pub title: RwSignal<String>,
}

impl DocumentState {
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(DocumentSnapshot::empty()),
            title: RwSignal::new(String::new()),
        }
    }

    /// Store a freshly opened HTML document as the new snapshot.
    pub fn load(&self, content: &str) {
        self.snapshot.update(|s| s.load(content));
    }

    /// Reset the snapshot; later exports synthesize a fresh document.
    pub fn clear(&self) {
        self.snapshot.update(|s| s.clear());
    }

    /// Assemble the export around the current editor body.
    pub fn export(&self, body: &str) -> Export {
        let title = self.title.get_untracked();
        let title = title.trim();
        let fallback = if title.is_empty() { DEFAULT_TITLE } else { title };
        self.snapshot.with_untracked(|s| s.export(body, fallback))
    }
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// NoticeState
// ============================================================================

/// Queue of non-blocking status notifications.
#[derive(Clone, Copy)]
pub struct NoticeState {
    /// Visible notices in arrival order.
    pub notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeKind::Info, message.into());
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.push(NoticeKind::Warning, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    /// Remove a notice by id (dismiss button or timeout).
    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.notices.update(|list| {
            list.push(Notice { id, kind, message });
        });

        // Auto-dismiss after the configured timeout.
        let notices = self.notices;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            notices.update(|list| list.retain(|n| n.id != id));
        });
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
/// It is the session object that owns all shared state; nothing in the
/// application is process-global.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// File batch and derived folder tree.
    pub session: SessionState,
    /// Active search results and generation guard.
    pub search: SearchState,
    /// Document snapshot and export title.
    pub document: DocumentState,
    /// Status notifications.
    pub notices: NoticeState,
}

impl AppContext {
    /// Creates a new application context with default state.
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            search: SearchState::new(),
            document: DocumentState::new(),
            notices: NoticeState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the browser and editor panes plus the notice bar
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let file_count = Signal::derive(move || ctx.session.files.with(|f| f.len()));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::crash>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <div class=css::app>
                <header class=css::header>
                    <span class=css::brand>{APP_NAME}</span>
                    <span class=css::version>{"v"}{APP_VERSION}</span>
                    <span class=css::count>
                        {move || match file_count.get() {
                            0 => "no folder selected".to_string(),
                            1 => "1 file".to_string(),
                            n => format!("{} files", n),
                        }}
                    </span>
                </header>
                <main class=css::main>
                    <Browser />
                    <EditorPane />
                </main>
                <NoticeBar />
            </div>
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // SearchState Tests
    // =========================================================================

    #[test]
    fn test_current_generation_publish_lands() {
        let search = SearchState::new();
        let generation = search.begin();

        search.publish(generation, FileId::new(3));

        assert_eq!(
            search.results.get_untracked(),
            Some(vec![FileId::new(3)])
        );
    }

    #[test]
    fn test_stale_generation_publish_is_discarded() {
        let search = SearchState::new();
        let stale = search.begin();
        let current = search.begin();

        // A read finishing from the superseded search must not land.
        search.publish(stale, FileId::new(0));
        assert_eq!(search.results.get_untracked(), Some(Vec::new()));

        search.publish(current, FileId::new(1));
        assert_eq!(
            search.results.get_untracked(),
            Some(vec![FileId::new(1)])
        );
    }

    #[test]
    fn test_show_all_invalidates_inflight_reads() {
        let search = SearchState::new();
        let generation = search.begin();
        search.show_all();

        search.publish(generation, FileId::new(0));

        assert_eq!(search.results.get_untracked(), None);
    }

    #[test]
    fn test_duplicate_match_is_published_once() {
        let search = SearchState::new();
        let generation = search.begin();

        search.publish(generation, FileId::new(2));
        search.publish(generation, FileId::new(2));

        assert_eq!(
            search.results.get_untracked(),
            Some(vec![FileId::new(2)])
        );
    }
}
