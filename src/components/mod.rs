//! Reusable admin UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and read shared state from Leptos
//! context; flows and decisions stay in `state`.

pub mod project_table;
pub mod toaster;
