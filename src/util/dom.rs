//! Thin `web-sys` helpers shared by the controllers and admin pages.
//!
//! Lookups return `Option` so callers can disable a feature when its markup is
//! absent. Writes are best-effort; a failed style or class write is not worth
//! surfacing to the user.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use super::class_set::ClassSet;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn html_by_id(id: &str) -> Option<HtmlElement> {
    by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Like [`query_all`] but over the whole document.
pub fn query_document(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.document_element())
        .map(|root| query_all(&root, selector))
        .unwrap_or_default()
}

/// Apply a class delta with a single `className` write.
pub fn apply_class_set(element: &Element, classes: &ClassSet) {
    let current = element.class_name();
    let tokens: Vec<&str> = current.split_whitespace().collect();
    let next = classes.apply_to(&tokens).join(" ");
    if next != current {
        element.set_class_name(&next);
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if element.style().set_property(property, value).is_err() {
        log::debug!("style write failed: {property}={value}");
    }
}

pub fn set_px(element: &HtmlElement, property: &str, value: f64) {
    set_style(element, property, &format!("{value}px"));
}

/// Full page navigation.
pub fn navigate(href: &str) {
    let Some(window) = window() else {
        return;
    };
    if window.location().set_href(href).is_err() {
        log::warn!("navigation to {href} failed");
    }
}

/// Native confirm dialog; `false` when it cannot be shown.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Whether `element` or one of its ancestors matches `selector`.
pub fn closest_matches(element: &Element, selector: &str) -> bool {
    matches!(element.closest(selector), Ok(Some(_)))
}

/// Event target as an element, if it is one.
pub fn event_element(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}
