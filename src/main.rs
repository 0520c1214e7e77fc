mod models;
mod handlers;
mod routes;
mod docs;
mod config;
mod db;
mod respond;

use axum::http::HeaderValue;
use axum::Router;
use config::Config;
use db::notestore::{NoteStore, PgNoteStore, UnconfiguredStore};
use docs::ApiDoc;
use routes::create_api_routes;
use std::panic;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Default to info level, but allow debug for our app
            "notes_api=debug,tower_http=debug,axum::rejection=trace,info".into()
        }))
        .init();

    info!("Starting server...");

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
        Config::default()
    });

    // Initialize the note store if a database URL is provided
    let store: Arc<dyn NoteStore> = match &config.db_url {
        Some(db_url) => match PgNoteStore::new(db_url, &config.notes_table).await {
            Ok(store) => {
                info!(
                    "Note store initialized successfully (table '{}')",
                    config.notes_table
                );
                Arc::new(store)
            }
            Err(e) => {
                error!("Failed to initialize note store: {}", e);
                warn!("Note deletion will not be available");
                Arc::new(UnconfiguredStore)
            }
        },
        None => {
            warn!("No database URL configured - note deletion will not be available");
            Arc::new(UnconfiguredStore)
        }
    };

    // Create API routes
    let api_routes = create_api_routes(store);

    // Combine all routes
    let mut app_routes = Router::new()
        // Mount API routes
        .nest("/api", api_routes)
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add tracing layer
        .layer(TraceLayer::new_for_http());

    // Restrict CORS to the configured origins when set
    if let Some(cors_origins) = &config.cors_origins {
        let origins: Vec<HeaderValue> = cors_origins
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();
        app_routes = app_routes.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    // Start the HTTP/API server
    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {}", config.server_address()));

    info!("🚀 Server running on http://{}", config.server_address());
    info!(
        "📚 Swagger UI available at http://{}/swagger",
        config.server_address()
    );

    axum::serve(listener, app_routes)
        .await
        .expect("Server failed to start");
}
