mod config;
mod services;

use std::thread;
use std::time::Duration;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;

use crate::config::HostConfig;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the bundled frontend. Unknown paths get `index.html` so that
/// routes like `/reports` survive a reload.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => {
                info!("no asset at /{}, serving index.html", file_path);
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec())
            }
            None => {
                warn!("frontend bundle is empty; run `trunk build` before building the host");
                HttpResponse::NotFound().body("Not Found")
            }
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = HostConfig::from_env()?;
    let url = config.url();
    info!("report service at {}", config.api_base_url);

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("could not open a browser at {}: {}", url, err);
            }
        });
    }

    info!("Server running at {}", url);

    let app_config = web::Data::new(config.app_config());
    HttpServer::new(move || {
        App::new()
            .app_data(app_config.clone())
            .service(services::app_config::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
