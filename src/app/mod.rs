// Collably - app/mod.rs
//
// Application layer: catalogue selection, dashboard state, and export files.
// Dependencies: core layer.
// Must NOT depend on: platform specifics.

pub mod catalogue_mgr;
pub mod export_mgr;
pub mod state;
