//! NoteSync HTTP Server
//!
//! Actix-web REST API for meeting-note summarization plus the static web page

mod error;
mod routes;
mod state;
mod types;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use notesync_common::{AppConfig, Result};
use tracing::{info, warn};
use std::path::Path;
use tracing_actix_web::TracingLogger;

pub use error::ApiError;
pub use routes::{configure_api, json_config};
pub use state::AppState;
pub use types::{ErrorResponse, HealthResponse, SummarizeRequest, SummarizeResponse};

/// Start the HTTP server and run until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let json_limit = config.json_limit_bytes;
    let static_dir = config.static_dir.clone();
    let serve_static = static_dir.is_dir();

    if serve_static {
        info!("Serving static files from {}", static_dir.display());
    } else {
        warn!(
            "Static directory {} not found, only /api routes are served",
            static_dir.display()
        );
    }

    let state = web::Data::new(AppState::new(config)?);

    info!("Starting HTTP server on http://{}", bind_addr);

    HttpServer::new(move || {
        let app = App::new()
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .app_data(json_config(json_limit))
            .configure(configure_api);

        if serve_static {
            app.service(static_files(&static_dir))
        } else {
            app
        }
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}

/// Static web page mounted at `/`, registered after the `/api` scope
pub fn static_files(dir: &Path) -> Files {
    Files::new("/", dir).index_file("index.html")
}
