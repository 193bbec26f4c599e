//! Shared helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `class_set` is the pure view-attribute description every controller
//! renders to; `dom` and `storage` are the browser glue that applies it.

pub mod class_set;
#[cfg(feature = "csr")]
pub mod dom;
pub mod storage;
