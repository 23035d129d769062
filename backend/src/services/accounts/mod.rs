//! Read-only employee directory, `GET /api/accounts`.

use crate::error::ServiceError;
use crate::store::{accounts, Database};
use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Scope};

const API_PATH: &str = "/api/accounts";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

async fn process(db: web::Data<Database>) -> Result<HttpResponse, ServiceError> {
    let db = db.into_inner();
    let accounts = web::block(move || db.with_conn(accounts::list)).await??;
    Ok(HttpResponse::Ok().json(accounts))
}

#[cfg(test)]
mod tests {
    use crate::services::test_support::TestState;
    use crate::store::accounts;
    use actix_web::{test, App};
    use common::model::account::Account;

    #[actix_web::test]
    async fn lists_directory() {
        let state = TestState::new();
        state
            .db
            .with_conn(|conn| {
                accounts::insert(conn, "a1", "Budi Santoso", Some("HR-001"));
                Ok(())
            })
            .unwrap();
        let app = test::init_service(App::new().configure(|cfg| state.register(cfg))).await;

        let req = test::TestRequest::get().uri("/api/accounts").to_request();
        let listed: Vec<Account> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].internal_nik.as_deref(), Some("HR-001"));
    }
}
