use crate::error::ServiceError;
use crate::store::{certifications, Database};
use actix_web::{web, HttpResponse};
use common::categories::distinct_types;

pub async fn process(db: web::Data<Database>) -> Result<HttpResponse, ServiceError> {
    let db = db.into_inner();
    let types = web::block(move || list_distinct_types(&db)).await??;
    Ok(HttpResponse::Ok().json(types))
}

pub fn list_distinct_types(db: &Database) -> Result<Vec<String>, ServiceError> {
    let raw = db.with_conn(certifications::cert_types)?;
    Ok(distinct_types(raw))
}
