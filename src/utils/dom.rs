//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling: new browsing contexts for viewers and previews, and the
//! client-side download trigger for exported documents.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url, Window};

use crate::config::HTML_MIME;
use crate::core::error::DomError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Wrap HTML text in a `text/html` blob.
fn html_blob(html: &str) -> Result<Blob, DomError> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(html));

    let options = BlobPropertyBag::new();
    options.set_type(HTML_MIME);

    Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| DomError::BlobCreationFailed)
}

/// Open a URL in a new browsing context.
///
/// A `None` from `window.open` means the browser blocked the popup.
pub fn open_url(url: &str) -> Result<(), DomError> {
    let window = window().ok_or(DomError::NoWindow)?;
    let opened = window
        .open_with_url_and_target(url, "_blank")
        .map_err(|_| DomError::PopupBlocked)?;

    match opened {
        Some(w) => {
            let _ = w.focus();
            Ok(())
        }
        None => Err(DomError::PopupBlocked),
    }
}

/// Render an HTML document into a new browsing context.
///
/// The backing object URL is not revoked; the new context loads it
/// asynchronously and keeps it alive for the lifetime of the page.
pub fn open_html_document(html: &str) -> Result<(), DomError> {
    let blob = html_blob(html)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|_| DomError::ObjectUrlFailed)?;
    open_url(&url)
}

/// Trigger a client-side download of an HTML document.
pub fn download_html(file_name: &str, html: &str) -> Result<(), DomError> {
    let window = window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoWindow)?;

    let blob = html_blob(html)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|_| DomError::ObjectUrlFailed)?;

    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        .ok_or(DomError::DownloadFailed)?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}
