//! Route-level screens of the admin app.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped signals and delegates decisions to the flows
//! in `state` and rendering details to `components`.

pub mod dashboard;
pub mod login;
