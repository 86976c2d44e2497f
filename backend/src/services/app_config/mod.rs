//! # App Config Service
//!
//! Hands the browser app the runtime settings it cannot know at build time.
//! Today that is only the base URL of the report service.
//!
//! ## Registered Routes:
//!
//! *   **`GET /app-config`**:
//!     - **Handler**: `process`
//!     - **Description**: Returns `{"api_base_url": "..."}` as JSON. The
//!       frontend calls it once on startup and falls back to its built-in
//!       default when the call fails.

use actix_web::web::{self, get, resource};
use actix_web::{HttpResponse, Resource};
use common::config::{AppConfig, APP_CONFIG_PATH};
use log::debug;

pub fn configure_routes() -> Resource {
    resource(APP_CONFIG_PATH).route(get().to(process))
}

async fn process(config: web::Data<AppConfig>) -> HttpResponse {
    debug!("serving app config: {}", config.api_base_url);
    HttpResponse::Ok().json(config.get_ref())
}
