//! Browser-facing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `theme` owns the persisted light/dark preference; `notify` is the single
//! way UI code surfaces call outcomes.

pub mod notify;
pub mod theme;
