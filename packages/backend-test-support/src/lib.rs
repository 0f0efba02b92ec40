//! Shared helpers for the backend integration tests: one-time log setup and
//! collision-free fixture values.

pub mod logging;
pub mod unique_helpers;
