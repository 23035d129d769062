//! Create and partial update. Both sanitize their input first, so blank text
//! reaches the store as null and never as an empty string.

use crate::error::ServiceError;
use crate::store::{certifications, Database};
use actix_web::{web, HttpResponse};
use chrono::{Local, NaiveDate};
use common::model::certification::{Certification, CertificationDraft};
use common::sanitize::{sanitize_payload, unknown_field};
use log::info;
use serde_json::{Map, Value};

/// Columns a stored record can never lose.
const REQUIRED_FIELDS: [&str; 4] = ["account_id", "cert_type", "cert_name", "cert_date"];

pub async fn create(
    payload: web::Json<CertificationDraft>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ServiceError> {
    let draft = payload.into_inner();
    let db = db.into_inner();
    let today = Local::now().date_naive();
    let record = web::block(move || create_certification(&db, draft, today)).await??;
    Ok(HttpResponse::Created().json(record))
}

pub async fn update(
    id: web::Path<String>,
    payload: web::Json<Map<String, Value>>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    let changes = payload.into_inner();
    let db = db.into_inner();
    let record = web::block(move || update_certification(&db, &id, changes)).await??;
    Ok(HttpResponse::Ok().json(record))
}

/// Stores a new record and returns it as read back from the store.
///
/// Only required-field presence is checked. `entry_date` falls back to `today`.
pub fn create_certification(
    db: &Database,
    draft: CertificationDraft,
    today: NaiveDate,
) -> Result<Certification, ServiceError> {
    let mut draft = draft.sanitize();
    let missing = draft.missing_required();
    if !missing.is_empty() {
        return Err(ServiceError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }
    draft.entry_date.get_or_insert(today);

    let id = uuid::Uuid::new_v4().to_string();
    let record = db.with_conn(|conn| {
        certifications::insert(conn, &id, &draft)?;
        certifications::get(conn, &id)
    })?;
    let record = record.ok_or_else(|| ServiceError::Internal(format!("certification {} vanished after insert", id)))?;
    info!(
        "Created certification {} for account {}",
        record.id, record.account_id
    );
    Ok(record)
}

/// Applies a partial update. Keys absent from `changes` keep their stored value.
pub fn update_certification(
    db: &Database,
    id: &str,
    changes: Map<String, Value>,
) -> Result<Certification, ServiceError> {
    if let Some(field) = unknown_field(&changes) {
        return Err(ServiceError::Validation(format!("unknown field: {}", field)));
    }
    let changes = sanitize_payload(changes);
    if let Some(field) = REQUIRED_FIELDS
        .iter()
        .find(|field| changes.get(**field).is_some_and(Value::is_null))
    {
        return Err(ServiceError::Validation(format!("{} cannot be cleared", field)));
    }

    let record = db.with_conn(|conn| {
        if !changes.is_empty() && certifications::update(conn, id, &changes)? == 0 {
            return Ok(None);
        }
        certifications::get(conn, id)
    })?;
    let record = record.ok_or_else(|| ServiceError::NotFound(format!("certification {}", id)))?;
    if !changes.is_empty() {
        info!(
            "Updated certification {} ({})",
            id,
            changes.keys().cloned().collect::<Vec<_>>().join(", ")
        );
    }
    Ok(record)
}
