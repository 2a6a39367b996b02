//! Non-blocking status notifications.

/// Severity of a notice, mapped to styling in the status bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A single status notification shown in the notice bar.
///
/// Notices replace both the original silent failure paths and blocking
/// alerts: read errors, blocked popups, and export warnings all surface
/// here. Dismissed manually or after a timeout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Monotonic id used for dismissal and list keys.
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}
