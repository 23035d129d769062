//! Types and pure logic shared by the HUREMA certification backend and frontend.
//!
//! Nothing in this crate performs I/O: the backend owns persistence and file
//! storage, the frontend owns rendering. What lives here is the data model that
//! crosses the HTTP boundary plus the transformations both sides agree on.

pub mod categories;
pub mod model;
pub mod requests;
pub mod sanitize;
pub mod spreadsheet;
pub mod ui;
