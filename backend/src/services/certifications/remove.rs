use crate::error::ServiceError;
use crate::store::{certifications, Database};
use actix_web::{web, HttpResponse};
use log::info;

pub async fn process(
    id: web::Path<String>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    let db = db.into_inner();
    web::block(move || delete_certification(&db, &id)).await??;
    Ok(HttpResponse::NoContent().finish())
}

/// Irreversible; there is no soft delete.
pub fn delete_certification(db: &Database, id: &str) -> Result<(), ServiceError> {
    let removed = db.with_conn(|conn| certifications::delete(conn, id))?;
    if removed == 0 {
        return Err(ServiceError::NotFound(format!("certification {}", id)));
    }
    info!("Deleted certification {}", id);
    Ok(())
}
