//! WYSIWYG widget bridge using web-sys.
//!
//! The rich-text editing surface is an external capability exposed as a
//! window global. The core talks to it through two operations
//! (`setContent`, `getContent`) plus an `addAction` extensibility point
//! used to register the save, preview, and clear-header actions. Everything
//! else about the widget (toolbar, plugins, undo history) is opaque.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::config::EDITOR_GLOBAL;
use crate::core::error::EditorError;
use crate::utils::dom;

/// Get the widget object injected by the editor script.
fn editor_object() -> Result<Object, EditorError> {
    let window = dom::window().ok_or(EditorError::NoWindow)?;
    Reflect::get(&window, &EDITOR_GLOBAL.into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(EditorError::NotAvailable)
}

/// Look up a callable widget operation by name.
fn editor_method(name: &str) -> Result<(Object, Function), EditorError> {
    let editor = editor_object()?;
    let method = Reflect::get(&editor, &name.into())
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or_else(|| EditorError::CallFailed(name.to_string()))?;
    Ok((editor, method))
}

/// Load a document into the editing surface.
pub fn set_content(html: &str) -> Result<(), EditorError> {
    let (editor, method) = editor_method("setContent")?;
    method
        .call1(&editor, &html.into())
        .map_err(|_| EditorError::CallFailed("setContent".to_string()))?;
    Ok(())
}

/// Read the current document markup from the editing surface.
pub fn get_content() -> Result<String, EditorError> {
    let (editor, method) = editor_method("getContent")?;
    let value = method
        .call0(&editor)
        .map_err(|_| EditorError::CallFailed("getContent".to_string()))?;
    value.as_string().ok_or(EditorError::InvalidContent)
}

/// Register a callback on one of the widget's extensibility points
/// (toolbar button or menu entry, chosen by the widget per action name).
///
/// # Note
/// The closure is intentionally leaked using `forget()` since this is a
/// single-page application where the action should persist for the entire
/// lifetime of the page.
pub fn register_action(name: &str, callback: impl Fn() + 'static) -> Result<(), EditorError> {
    let (editor, method) = editor_method("addAction")?;

    let closure = Closure::wrap(Box::new(callback) as Box<dyn Fn()>);
    method
        .call2(&editor, &name.into(), closure.as_ref().unchecked_ref())
        .map_err(|_| EditorError::CallFailed("addAction".to_string()))?;
    closure.forget();

    Ok(())
}
