// TaxDesk - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, csv/serde for table formats.
// Must NOT depend on: ui, platform, app.

pub mod dedup;
pub mod export;
pub mod filter;
pub mod model;
pub mod table;
