// Collably - lib.rs
//
// Library entry point: the creator discovery engine and everything around
// it (catalogue loading, dashboard state, config), exposed for the CLI,
// integration tests, and embedding in other front ends.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
