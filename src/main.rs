use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod auth;
mod config;
mod database;
mod error;
mod handlers;
mod menu;
mod middleware;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, SECURITY_JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = crate::config::config();
    tracing::info!("Starting sphere portal API in {:?} mode", config.environment);

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("PORTAL_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 sphere portal API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Menu rendering
        .merge(menu_routes())
        // Global middleware
        .layer(axum::middleware::from_fn(middleware::auth::optional_jwt_auth))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn menu_routes() -> Router {
    use handlers::menus;

    Router::new()
        .route("/api/menus/topbar/left", get(menus::topbar_left))
        .route("/api/menus/topbar/right", get(menus::topbar_right))
        .route("/api/menus/user", get(menus::user_menu_get))
        .route("/api/menus/placeholder/:name", get(menus::placeholder_get))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "sphere portal API",
            "version": version,
            "description": "Navigation and menu rendering API for the sphere GIS portal",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "topbar_left": "/api/menus/topbar/left (public, context-aware)",
                "topbar_right": "/api/menus/topbar/right (public)",
                "user_menu": "/api/menus/user (public, context-aware)",
                "placeholder": "/api/menus/placeholder/:name (public, CMS-backed)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
