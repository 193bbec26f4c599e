//! Networking modules for the portal REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the JSON envelopes, and
//! `error` classifies failures into expected rejections and transport faults.

pub mod api;
pub mod error;
pub mod types;
