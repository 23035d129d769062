//! Certification screens: the list view owns the records and opens the edit form
//! or the import wizard as modal sheets.

pub mod form;
pub mod import;
pub mod list;
