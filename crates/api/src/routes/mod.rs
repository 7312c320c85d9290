pub mod auth;
pub mod health;
pub mod reservation;
pub mod table;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                register (public)
/// /auth/login                   login (public)
/// /auth/refresh                 refresh (public)
/// /auth/logout                  logout (requires auth)
///
/// /tables                       list, create
/// /tables/{id}                  get, update, delete
///
/// /reservations                 list own, book
/// /reservations/{id}            get, change party size, delete
/// /reservations/{id}/cancel     cancel (POST)
/// ```
///
/// Everything outside `/auth` requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tables", table::router())
        .nest("/reservations", reservation::router())
}
