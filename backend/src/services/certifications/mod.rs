//! Certification records: list, read, create, update, delete, and the distinct
//! category list that powers autocomplete.
//!
//! Routes, all under `/api/certifications`:
//! - `GET /`: every record joined with employee name and NIK, newest entry first.
//! - `GET /account/{account_id}`: one employee's records, newest certification first.
//! - `GET /types`: distinct, non-empty, sorted categories.
//! - `GET /{id}`: a single record.
//! - `POST /`: create from a `CertificationDraft`; blank fields are stored as null
//!   and a missing entry date defaults to today.
//! - `PATCH /{id}`: partial update from a JSON object of column values.
//! - `DELETE /{id}`: hard delete.

use actix_web::web::{delete, get, patch, post, scope};
use actix_web::Scope;

mod get;
mod list;
mod remove;
pub mod save;
mod types;

const API_PATH: &str = "/api/certifications";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(save::create))
        .route("/types", get().to(types::process))
        .route("/account/{account_id}", get().to(list::process_for_account))
        .route("/{id}", get().to(get::process))
        .route("/{id}", patch().to(save::update))
        .route("/{id}", delete().to(remove::process))
}
