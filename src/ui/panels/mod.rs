// TaxDesk - ui/panels/mod.rs

pub mod about;
pub mod report;
pub mod reset_confirm;
pub mod results;
pub mod search_form;
pub mod summary;
