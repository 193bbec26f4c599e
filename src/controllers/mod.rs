//! Imperative controllers for the server-rendered room page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The room page is not a Leptos view. Each controller finds its anchors in
//! the existing markup, keeps its state in a thread-local slot for the page
//! lifetime, and applies what the `state` models compute. A controller whose
//! anchors are missing logs at debug level and stays inert; the others are
//! unaffected.

pub mod hotspot;
pub mod menu;
pub mod room;

/// Install every room-page controller.
pub fn install() {
    menu::install();
    hotspot::install();
    room::install();
}
