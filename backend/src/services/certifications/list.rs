use crate::error::ServiceError;
use crate::store::{certifications, Database};
use actix_web::{web, HttpResponse};

pub async fn process(db: web::Data<Database>) -> Result<HttpResponse, ServiceError> {
    let db = db.into_inner();
    let records = web::block(move || db.with_conn(certifications::list)).await??;
    Ok(HttpResponse::Ok().json(records))
}

pub async fn process_for_account(
    account_id: web::Path<String>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ServiceError> {
    let account_id = account_id.into_inner();
    let db = db.into_inner();
    let records = web::block(move || {
        db.with_conn(|conn| certifications::list_for_account(conn, &account_id))
    })
    .await??;
    Ok(HttpResponse::Ok().json(records))
}
