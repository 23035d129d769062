use crate::error::ServiceError;
use crate::services::certifications::save::create_certification;
use crate::store::Database;
use actix_web::{web, HttpResponse};
use chrono::{Local, NaiveDate};
use common::model::import::{ImportFailure, ImportOutcome, ImportRow};
use common::requests::CommitImportRequest;
use log::{info, warn};

pub async fn process(
    payload: web::Json<CommitImportRequest>,
    db: web::Data<Database>,
) -> Result<HttpResponse, ServiceError> {
    let rows = payload.into_inner().rows;
    let db = db.into_inner();
    let today = Local::now().date_naive();
    let outcome = web::block(move || commit_rows(&db, &rows, today)).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// Creates one record per valid row, sequentially and in row order, with
/// `entry_date` set to `today`.
///
/// Validity is recomputed rather than trusted from the client. The first failing
/// row stops the batch; rows created before it are kept.
pub fn commit_rows(db: &Database, rows: &[ImportRow], today: NaiveDate) -> ImportOutcome {
    let valid: Vec<(usize, ImportRow)> = rows
        .iter()
        .cloned()
        .map(ImportRow::validated)
        .enumerate()
        .filter(|(_, row)| row.is_valid)
        .collect();

    let mut outcome = ImportOutcome {
        submitted: valid.len(),
        created: 0,
        failure: None,
    };
    for (row_index, row) in valid {
        match create_certification(db, row.to_draft(today), today) {
            Ok(_) => outcome.created += 1,
            Err(e) => {
                warn!("Import stopped at row {}: {}", row_index, e);
                outcome.failure = Some(ImportFailure {
                    row_index,
                    message: e.to_string(),
                });
                break;
            }
        }
    }

    info!(
        "Import committed {} of {} valid rows ({} submitted)",
        outcome.created,
        outcome.submitted,
        rows.len()
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestState;
    use crate::store::certifications;
    use actix_web::{test as actix_test, App};
    use common::ui::wizard::ImportWizard;
    use serde_json::json;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(account: &str, name: &str, cert_type: Option<&str>) -> ImportRow {
        ImportRow {
            account_id: Some(account.into()),
            cert_type: cert_type.map(String::from),
            cert_name: Some(name.into()),
            cert_date: Some(ymd(2024, 6, 1)),
            ..Default::default()
        }
        .validated()
    }

    /// Names of stored records in insertion order.
    fn stored(db: &Database) -> Vec<(String, Option<NaiveDate>)> {
        db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT cert_name, entry_date FROM account_certifications ORDER BY rowid",
            )?;
            let rows = stmt
                .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
        .unwrap()
    }

    #[test]
    fn only_valid_rows_are_created_in_order_with_todays_entry_date() {
        let db = Database::open_in_memory().unwrap();
        let today = ymd(2026, 10, 17);
        let rows = vec![
            row("a0", "skip-0", None),
            row("a1", "first", Some("Safety")),
            row("a2", "skip-2", None),
            row("a3", "second", Some("Language")),
        ];

        let outcome = commit_rows(&db, &rows, today);
        assert_eq!(
            outcome,
            ImportOutcome {
                submitted: 2,
                created: 2,
                failure: None
            }
        );
        assert_eq!(
            stored(&db),
            vec![
                ("first".to_string(), Some(today)),
                ("second".to_string(), Some(today))
            ]
        );
    }

    #[test]
    fn client_validity_flag_is_not_trusted() {
        let db = Database::open_in_memory().unwrap();
        let mut forged = row("a1", "forged", None);
        forged.is_valid = true;
        let outcome = commit_rows(&db, &[forged], ymd(2026, 10, 17));
        assert_eq!(outcome.submitted, 0);
        assert!(stored(&db).is_empty());
    }

    #[test]
    fn drive_links_become_file_ids() {
        let db = Database::open_in_memory().unwrap();
        let mut with_link = row("a1", "linked", Some("Safety"));
        with_link.drive_link =
            Some("https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz1234567/view".into());
        let mut bad_link = row("a2", "unlinked", Some("Safety"));
        bad_link.drive_link = Some("https://example.com/x".into());

        commit_rows(&db, &[with_link, bad_link], ymd(2026, 10, 17));
        let records = db.with_conn(certifications::list).unwrap();
        let file_of = |name: &str| {
            records
                .iter()
                .find(|r| r.cert_name == name)
                .and_then(|r| r.file_id.clone())
        };
        assert_eq!(
            file_of("linked").as_deref(),
            Some("1AbCdEfGhIjKlMnOpQrStUvWxYz1234567")
        );
        assert_eq!(file_of("unlinked"), None);
    }

    #[test]
    fn failure_stops_the_batch_and_keeps_earlier_rows() {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(|conn| {
            conn.execute_batch(
                "CREATE TRIGGER reject_poison BEFORE INSERT ON account_certifications
                 WHEN NEW.cert_name = 'poison'
                 BEGIN SELECT RAISE(ABORT, 'rejected by store'); END;",
            )?;
            Ok(())
        })
        .unwrap();

        let rows = vec![
            row("a1", "kept", Some("Safety")),
            row("a2", "poison", Some("Safety")),
            row("a3", "never", Some("Safety")),
        ];
        let outcome = commit_rows(&db, &rows, ymd(2026, 10, 17));

        assert_eq!(outcome.submitted, 3);
        assert_eq!(outcome.created, 1);
        let failure = outcome.failure.unwrap();
        assert_eq!(failure.row_index, 1);
        assert!(failure.message.contains("rejected by store"));
        let names: Vec<_> = stored(&db).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["kept"]);
    }

    #[test]
    fn retry_after_a_stopped_commit_does_not_duplicate_rows() {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(|conn| {
            conn.execute_batch(
                "CREATE TRIGGER reject_poison BEFORE INSERT ON account_certifications
                 WHEN NEW.cert_name = 'poison'
                 BEGIN SELECT RAISE(ABORT, 'rejected by store'); END;",
            )?;
            Ok(())
        })
        .unwrap();

        let mut wizard = ImportWizard::new();
        wizard.parse_succeeded(vec![
            row("a1", "kept", Some("Safety")),
            row("a2", "poison", Some("Safety")),
        ]);
        let outcome = commit_rows(&db, wizard.rows(), ymd(2026, 10, 17));
        let failure = outcome.failure.unwrap();
        wizard.commit_stopped_at(failure.row_index);

        db.with_conn(|conn| {
            conn.execute_batch("DROP TRIGGER reject_poison;")?;
            Ok(())
        })
        .unwrap();
        let retried = commit_rows(&db, wizard.rows(), ymd(2026, 10, 17));

        assert_eq!(retried.created, 1);
        let names: Vec<_> = stored(&db).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["kept", "poison"]);
    }

    #[actix_web::test]
    async fn commit_endpoint_reports_outcome() {
        let state = TestState::new();
        let app = actix_test::init_service(App::new().configure(|cfg| state.register(cfg))).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/certifications/import/commit")
            .set_json(json!({
                "rows": [
                    row("a1", "CPR", Some("Medical")),
                    row("a2", "No type", None),
                ]
            }))
            .to_request();
        let outcome: ImportOutcome = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(outcome.created, 1);
        assert_eq!(outcome.failure, None);
    }
}
