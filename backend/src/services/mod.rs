//! HTTP surface of the record service.
//!
//! Each submodule exposes `configure_routes()` returning its Actix `Scope`;
//! `configure` mounts them all so `main` and the handler tests build the same app.

pub mod accounts;
pub mod certifications;
pub mod drive;
pub mod imports;
mod upload;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(accounts::configure_routes())
        .service(drive::configure_routes())
        // Registered before the certification scope, which would otherwise claim
        // every `/api/certifications/...` path.
        .service(imports::configure_routes())
        .service(certifications::configure_routes());
}
