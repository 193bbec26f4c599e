//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each surface owns an explicit model (`menu`, `hotspot`, `room` for the
//! room page; `session`, `dashboard`, `notifications` for admin). Models are
//! pure and map to view attributes; controllers and components only apply
//! what the models compute.

pub mod dashboard;
pub mod hotspot;
pub mod menu;
pub mod notifications;
pub mod room;
pub mod session;
