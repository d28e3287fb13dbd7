pub mod auth;
pub mod contacts;
pub mod health;
pub mod inquiry;
pub mod portfolio;
pub mod profile;
pub mod services;
pub mod settings;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /profile                          get (public)
/// /portfolio                        list (public)
/// /portfolio/{id}                   get (public)
/// /services                         list (public)
/// /services/{id}                    get (public)
/// /contacts                         get (public)
/// /settings/{key}                   get (public)
/// /videos                           list (public)
/// /videos/active                    active video (public)
/// /videos/{id}/content              bytes or redirect (public)
/// /contact                          submit inquiry (POST, public)
///
/// /admin/auth                       login (POST, public)
/// /admin/profile                    upsert (PUT)
/// /admin/portfolio                  create (POST)
/// /admin/portfolio/{id}             update, delete
/// /admin/services                   create (POST)
/// /admin/services/{id}              update, delete
/// /admin/contacts                   upsert (PUT)
/// /admin/settings/{key}             upsert (PUT)
/// /admin/videos                     register URL (POST)
/// /admin/videos/upload              multipart upload (POST)
/// /admin/videos/{id}/activate       activate (PUT)
/// /admin/videos/{id}                delete
/// ```
///
/// Every `/admin` route except `/admin/auth` requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/profile", profile::router())
        .nest("/portfolio", portfolio::router())
        .nest("/services", services::router())
        .nest("/contacts", contacts::router())
        .nest("/settings", settings::router())
        .nest("/videos", videos::router())
        .nest("/contact", inquiry::router())
        .nest("/admin", admin_routes())
}

/// Routes mounted at `/api/admin`.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profile", profile::admin_router())
        .nest("/portfolio", portfolio::admin_router())
        .nest("/services", services::admin_router())
        .nest("/contacts", contacts::admin_router())
        .nest("/settings", settings::admin_router())
        .nest("/videos", videos::admin_router())
}
