//! Attachment storage endpoints.
//!
//! - `POST /api/drive/upload`: multipart `file` field; returns `{ "file_id": ... }`.
//! - `GET /api/drive/url/{file_id}`: returns `{ "url": ... }` for opening the file.
//! - `GET /api/drive/files/{file_id}`: serves a locally stored file.
//!
//! An upload is independent from any record save: if the follow-up save fails the
//! stored file simply has no owner.

use crate::config::AppConfig;
use crate::drive::DriveStorage;
use crate::error::ServiceError;
use crate::services::upload::read_file_part;
use actix_files::NamedFile;
use actix_multipart::Multipart;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::web::{get, post, scope};
use actix_web::{web, HttpResponse, Scope};
use common::requests::{FileUrl, UploadedFile};

const API_PATH: &str = "/api/drive";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/upload", post().to(upload))
        .route("/url/{file_id}", get().to(file_url))
        .route("/files/{file_id}", get().to(serve_file))
}

async fn upload(
    payload: Multipart,
    drive: web::Data<dyn DriveStorage>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ServiceError> {
    let part = read_file_part(payload, config.max_upload_bytes).await?;
    let drive = drive.into_inner();
    let file_id = web::block(move || drive.upload(&part.file_name, &part.bytes)).await??;
    Ok(HttpResponse::Ok().json(UploadedFile { file_id }))
}

async fn file_url(
    file_id: web::Path<String>,
    drive: web::Data<dyn DriveStorage>,
) -> Result<HttpResponse, ServiceError> {
    let file_id = file_id.into_inner();
    let drive = drive.into_inner();
    let url = web::block(move || drive.file_url(&file_id)).await??;
    Ok(HttpResponse::Ok().json(FileUrl { url }))
}

async fn serve_file(
    file_id: web::Path<String>,
    drive: web::Data<dyn DriveStorage>,
) -> Result<NamedFile, ServiceError> {
    let file_id = file_id.into_inner();
    let drive = drive.into_inner();
    let lookup_id = file_id.clone();
    let stored = web::block(move || drive.local_file(&lookup_id))
        .await??
        .ok_or_else(|| ServiceError::NotFound(format!("file {}", file_id)))?;
    let content_type = mime_guess::from_path(&stored.file_name).first_or_octet_stream();
    Ok(NamedFile::open(&stored.path)?
        .set_content_type(content_type)
        .set_content_disposition(ContentDisposition {
            disposition: DispositionType::Inline,
            parameters: vec![DispositionParam::Filename(stored.file_name)],
        }))
}
