// Collably - platform/mod.rs
//
// Platform abstraction layer: OS directory resolution and config loading.
// Dependencies: standard library, directories crate, core value types.
// Must NOT depend on: app.

pub mod config;
