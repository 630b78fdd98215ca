use axum::{
    extract::Path,
    http::{header, HeaderMap},
    response::Json,
    Extension,
};
use serde_json::{json, Value};

use crate::config;
use crate::database::manager::DatabaseManager;
use crate::database::store::PgMenuStore;
use crate::error::ApiError;
use crate::menu::context::MenuContext;
use crate::menu::materialize::materialize;
use crate::menu::{topbar, user_menu, PortalUser};
use crate::middleware::auth::AuthUser;

/// Assemble the menu context for one request: optional authenticated user
/// (injected by the auth middleware), device class from the User-Agent
/// header, feature flags from configuration.
fn request_context(headers: &HeaderMap, user: Option<&AuthUser>) -> MenuContext {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());

    MenuContext::build(
        user.map(PortalUser::from),
        user.map(|u| u.superuser).unwrap_or(false),
        user_agent,
        &config::config().portal,
    )
}

/// GET /api/menus/topbar/left - left side of the top bar
pub async fn topbar_left(headers: HeaderMap, user: Option<Extension<AuthUser>>) -> Json<Value> {
    let ctx = request_context(&headers, user.as_deref());
    Json(json!({ "success": true, "data": topbar::left_topbar(&ctx) }))
}

/// GET /api/menus/topbar/right - right side of the top bar
pub async fn topbar_right() -> Json<Value> {
    Json(json!({ "success": true, "data": topbar::right_topbar() }))
}

/// GET /api/menus/user - user menu for the caller's context
pub async fn user_menu_get(headers: HeaderMap, user: Option<Extension<AuthUser>>) -> Json<Value> {
    let ctx = request_context(&headers, user.as_deref());
    let nodes = user_menu::user_menu(&ctx, &config::config().portal);
    Json(json!({ "success": true, "data": nodes }))
}

/// GET /api/menus/placeholder/:name - materialized CMS menu for a placeholder
pub async fn placeholder_get(Path(name): Path<String>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let store = PgMenuStore::new(pool);

    let nodes = materialize(&store, &name).await?;
    tracing::debug!("materialized {} nodes for placeholder {}", nodes.len(), name);

    Ok(Json(json!({ "success": true, "data": nodes })))
}
