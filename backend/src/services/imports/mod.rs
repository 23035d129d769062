//! Bulk import workflow for certifications.
//!
//! The flow spans three requests so the user can review rows before anything is
//! written:
//! - `GET /api/certifications/import/template`: an `.xlsx` with one pre-filled row
//!   per employee and empty certification columns.
//! - `POST /api/certifications/import/parse`: multipart `file` field; returns the
//!   parsed `ImportRow`s with their validity flag. Nothing is stored.
//! - `POST /api/certifications/import/commit`: takes the previewed rows and
//!   creates one record per valid row, in row order, one at a time. There is no
//!   transaction; rows created before a failure stay.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod commit;
mod parse;
mod template;

const API_PATH: &str = "/api/certifications/import";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/template", get().to(template::process))
        .route("/parse", post().to(parse::process))
        .route("/commit", post().to(commit::process))
}
