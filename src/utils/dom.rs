//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Element, MediaQueryList, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get the `<html>` element.
pub fn document_element() -> Option<Element> {
    window()?.document()?.document_element()
}

/// Evaluate a media query such as `(prefers-color-scheme: dark)`.
pub fn match_media(query: &str) -> Option<MediaQueryList> {
    window()?.match_media(query).ok()?
}

/// Add or remove a class on the `<html>` element.
pub fn toggle_root_class(class: &str, on: bool) {
    if let Some(root) = document_element() {
        let _ = root.class_list().toggle_with_force(class, on);
    }
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}
