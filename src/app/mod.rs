// TaxDesk - app/mod.rs
//
// Application layer: orchestration, session state, persistence of the
// result table.
// Dependencies: core layer, platform config.
// Must NOT depend on: ui.

pub mod data;
pub mod session;
pub mod state;
pub mod store;
