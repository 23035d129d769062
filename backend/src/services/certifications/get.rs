use crate::error::ServiceError;
use crate::store::{certifications, Database};
use actix_web::{web, HttpResponse};

pub async fn process(
    id: web::Path<String>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    let db = db.into_inner();
    let record = web::block(move || {
        db.with_conn(|conn| certifications::get(conn, &id))?
            .ok_or_else(|| ServiceError::NotFound(format!("certification {}", id)))
    })
    .await??;
    Ok(HttpResponse::Ok().json(record))
}
