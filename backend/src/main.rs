mod config;
mod drive;
mod error;
mod services;
mod store;

use crate::config::{AppConfig, CONFIG_FILE};
use crate::drive::{DriveStorage, LocalDrive};
use crate::store::Database;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the bundled frontend. Unknown paths fall back to `index.html` so the
/// single-page app can load from any URL.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let requested = match req.path().trim_start_matches('/') {
        "" => "index.html",
        path => path,
    };
    let found = STATIC_DIR
        .get_file(requested)
        .map(|file| (requested, file))
        .or_else(|| STATIC_DIR.get_file("index.html").map(|file| ("index.html", file)));

    match found {
        Some((name, file)) => HttpResponse::Ok()
            .content_type(from_path(name).first_or_octet_stream().as_ref())
            .body(file.contents()),
        None => HttpResponse::NotFound().body("frontend bundle not built"),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::load(Path::new(CONFIG_FILE)).map_err(io::Error::other)?;
    let url = config.url();

    let db = Database::open(&config.database_path).map_err(io::Error::other)?;
    info!("Using database {}", config.database_path.display());

    let drive: Arc<dyn DriveStorage> = Arc::new(
        LocalDrive::new(&config.drive_dir, config.drive_link_template.clone())
            .map_err(io::Error::other)?,
    );
    info!("Drive files stored in {}", config.drive_dir.display());

    if config.open_browser {
        let browser_url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&browser_url) {
                warn!("Could not open browser: {}", e);
            }
        });
    }

    info!("Server running at {}", url);

    let bind = (config.host.clone(), config.port);
    let json_limit = config.max_upload_bytes;
    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(json_limit))
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::from(drive.clone()))
            .app_data(web::Data::new(config.clone()))
            .configure(services::configure)
            .default_service(web::route().to(serve_embedded))
    })
    .bind(bind)?
    .run()
    .await
}
