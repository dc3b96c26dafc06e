// Collably - core/mod.rs
//
// Core business logic layer: data model, follower parsing, filtering,
// sorting, formatting, catalogue parsing, export.
// Must NOT depend on: platform, app, or the filesystem directly.

pub mod catalogue;
pub mod export;
pub mod filter;
pub mod followers;
pub mod format;
pub mod model;
pub mod sort;
