//! Viewer window document builders.
//!
//! Pure HTML builders for the text and image viewer windows; the actual
//! window plumbing lives in [`utils::dom`](crate::utils::dom) and the
//! category dispatch in the browser component.

/// Escape text for safe interpolation into viewer markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Raw decoded text wrapped in a preformatted block.
pub fn text_document(content: &str) -> String {
    format!("<pre>{}</pre>", escape_html(content))
}

/// An image element bound to the file's object URL.
pub fn image_document(url: &str, name: &str) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\">",
        escape_html(url),
        escape_html(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("\"quoted\" 'single'"), "&quot;quoted&quot; &#39;single&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_text_document_preserves_markup_as_text() {
        let doc = text_document("<b>bold?</b>\nline two");
        assert_eq!(doc, "<pre>&lt;b&gt;bold?&lt;/b&gt;\nline two</pre>");
    }

    #[test]
    fn test_image_document() {
        let doc = image_document("blob:null/abc-123", "logo.png");
        assert_eq!(doc, "<img src=\"blob:null/abc-123\" alt=\"logo.png\">");
    }
}
