//! HTML document round-tripping.
//!
//! Keeps the literal text of the last HTML file opened for editing and, on
//! export, splices the current editor body between the original document's
//! extracted header and footer. Boundary extraction is deliberately
//! regex-based (first match, non-greedy), not a DOM-correct parse.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{BODY_INDENT, DOCUMENT_LANG};
use crate::core::viewer::escape_html;

/// Doctype declaration through the closing head tag, inclusive.
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<!DOCTYPE.*?</head>").expect("header pattern is valid"));

/// Closing body tag through the closing html tag, inclusive.
static FOOTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)</body>.*?</html>").expect("footer pattern is valid"));

/// Structural gaps detected while exporting against a loaded snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportWarning {
    /// No doctype-through-`</head>` region found in the snapshot.
    MissingHeader,
    /// No `</body>`-through-`</html>` region found in the snapshot.
    MissingFooter,
}

impl ExportWarning {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingHeader => {
                "The loaded document has no recognizable header; the export may be incomplete."
            }
            Self::MissingFooter => {
                "The loaded document has no recognizable footer; the export may be incomplete."
            }
        }
    }
}

/// An assembled export plus any structural warnings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    /// Complete HTML document text.
    pub html: String,
    /// Warnings to surface before delivering the export.
    pub warnings: Vec<ExportWarning>,
}

/// The last-loaded HTML document's literal original text.
///
/// Empty means "no document loaded": exports then synthesize a minimal
/// complete document instead of splicing. Mutated only when an HTML file is
/// opened or the header context is explicitly cleared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentSnapshot {
    original: String,
}

impl DocumentSnapshot {
    /// Snapshot with no document loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the snapshot with a freshly opened document's text, verbatim.
    pub fn load(&mut self, content: &str) {
        self.original = content.to_string();
    }

    /// Reset to "no document loaded"; later exports take the synthesized path.
    pub fn clear(&mut self) {
        self.original.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Header extracted from the snapshot, or `""` when absent.
    pub fn header(&self) -> &str {
        HEADER_RE
            .find(&self.original)
            .map(|m| m.as_str())
            .unwrap_or("")
    }

    /// Footer extracted from the snapshot, or `""` when absent.
    pub fn footer(&self) -> &str {
        FOOTER_RE
            .find(&self.original)
            .map(|m| m.as_str())
            .unwrap_or("")
    }

    /// Assemble a complete HTML document around the current editor body.
    ///
    /// With a loaded snapshot the result is `header + "\n" + indented body +
    /// "\n" + footer`, even when one of the pieces extracted as empty; each
    /// missing piece is reported as a warning instead of failing. With no
    /// snapshot a minimal document is synthesized around `fallback_title`.
    ///
    /// Pure given its inputs; performs no I/O.
    pub fn export(&self, body: &str, fallback_title: &str) -> Export {
        let indented = indent_body(body);

        if self.is_empty() {
            return Export {
                html: synthesize_document(&indented, fallback_title),
                warnings: Vec::new(),
            };
        }

        let header = self.header();
        let footer = self.footer();

        let mut warnings = Vec::new();
        if header.is_empty() {
            warnings.push(ExportWarning::MissingHeader);
        }
        if footer.is_empty() {
            warnings.push(ExportWarning::MissingFooter);
        }

        Export {
            html: format!("{}\n{}\n{}", header, indented, footer),
            warnings,
        }
    }
}

/// Indent every line of the body (empty lines included) by one fixed unit,
/// visually nesting it under a body element.
fn indent_body(body: &str) -> String {
    body.split('\n')
        .map(|line| format!("{}{}", BODY_INDENT, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Minimal complete document used when no source document was ever loaded.
fn synthesize_document(indented_body: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{lang}\">\n\
         <head>\n\
         {indent}<meta charset=\"utf-8\">\n\
         {indent}<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         {indent}<title>{title}</title>\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>",
        lang = DOCUMENT_LANG,
        indent = BODY_INDENT,
        title = escape_html(title),
        body = indented_body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_splices_header_and_footer() {
        let mut snapshot = DocumentSnapshot::empty();
        snapshot.load("<!DOCTYPE html><head></head><body>old</body></html>");

        let export = snapshot.export("<p>new</p>", "ignored");

        assert_eq!(
            export.html,
            "<!DOCTYPE html><head></head>\n    <p>new</p>\n</body></html>"
        );
        assert!(export.warnings.is_empty());
    }

    #[test]
    fn test_extraction_is_case_insensitive() {
        let mut snapshot = DocumentSnapshot::empty();
        snapshot.load("<!doctype HTML><HEAD><title>t</title></HEAD><body>x</BODY></HTML>");

        assert_eq!(snapshot.header(), "<!doctype HTML><HEAD><title>t</title></HEAD>");
        assert_eq!(snapshot.footer(), "</BODY></HTML>");
    }

    #[test]
    fn test_extraction_spans_newlines() {
        let original = "<!DOCTYPE html>\n<html>\n<head>\n<script src=\"a.js\"></script>\n</head>\n<body>\nold\n</body>\n<!-- end -->\n</html>";
        let mut snapshot = DocumentSnapshot::empty();
        snapshot.load(original);

        assert_eq!(
            snapshot.header(),
            "<!DOCTYPE html>\n<html>\n<head>\n<script src=\"a.js\"></script>\n</head>"
        );
        assert_eq!(snapshot.footer(), "</body>\n<!-- end -->\n</html>");
    }

    #[test]
    fn test_empty_snapshot_synthesizes_document() {
        let snapshot = DocumentSnapshot::empty();
        let export = snapshot.export("<p>hi</p>", "Untitled");

        assert!(export.warnings.is_empty());
        assert!(export.html.starts_with("<!DOCTYPE html>"));
        assert!(export.html.contains("<html lang=\"en\">"));
        assert!(export.html.contains("<meta charset=\"utf-8\">"));
        assert!(export.html.contains("name=\"viewport\""));
        assert!(export.html.contains("<title>Untitled</title>"));
        assert!(export.html.contains("<body>\n    <p>hi</p>\n</body>"));
    }

    #[test]
    fn test_synthesized_title_is_escaped() {
        let snapshot = DocumentSnapshot::empty();
        let export = snapshot.export("x", "<Drafts & Notes>");

        assert!(export.html.contains("<title>&lt;Drafts &amp; Notes&gt;</title>"));
    }

    #[test]
    fn test_clear_forces_synthesized_path() {
        let mut snapshot = DocumentSnapshot::empty();
        snapshot.load("<!DOCTYPE html><head></head><body>old</body></html>");
        snapshot.clear();

        let export = snapshot.export("<p>new</p>", "Fresh");
        assert!(export.html.contains("<title>Fresh</title>"));
        assert!(!export.html.contains("old"));
    }

    #[test]
    fn test_missing_header_and_footer_warn_but_still_export() {
        let mut snapshot = DocumentSnapshot::empty();
        snapshot.load("<div>just a fragment</div>");

        let export = snapshot.export("<p>body</p>", "ignored");

        assert_eq!(export.html, "\n    <p>body</p>\n");
        assert_eq!(
            export.warnings,
            vec![ExportWarning::MissingHeader, ExportWarning::MissingFooter]
        );
    }

    #[test]
    fn test_missing_footer_alone_warns() {
        let mut snapshot = DocumentSnapshot::empty();
        snapshot.load("<!DOCTYPE html><head></head><body>no closing tags");

        let export = snapshot.export("<p>b</p>", "ignored");

        assert_eq!(export.warnings, vec![ExportWarning::MissingFooter]);
        assert!(export.html.starts_with("<!DOCTYPE html><head></head>\n"));
    }

    #[test]
    fn test_indent_covers_every_line_including_empty() {
        let mut snapshot = DocumentSnapshot::empty();
        snapshot.load("<!DOCTYPE html><head></head><body>x</body></html>");

        let export = snapshot.export("<p>a</p>\n\n<p>b</p>", "ignored");

        assert!(export.html.contains("    <p>a</p>\n    \n    <p>b</p>"));
    }

    #[test]
    fn test_load_replaces_previous_snapshot() {
        let mut snapshot = DocumentSnapshot::empty();
        snapshot.load("<!DOCTYPE html><head>first</head><body></body></html>");
        snapshot.load("<!DOCTYPE html><head>second</head><body></body></html>");

        assert_eq!(snapshot.header(), "<!DOCTYPE html><head>second</head>");
    }

    #[test]
    fn test_header_match_stops_at_first_closing_head() {
        let mut snapshot = DocumentSnapshot::empty();
        snapshot.load("<!DOCTYPE html><head>a</head><p></head></p><body></body></html>");

        assert_eq!(snapshot.header(), "<!DOCTYPE html><head>a</head>");
    }
}
