//! Route definitions for the `/tables` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::table;
use crate::state::AppState;

/// Routes mounted at `/tables`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(table::list).post(table::create))
        .route(
            "/{id}",
            get(table::get_by_id)
                .put(table::update)
                .delete(table::delete),
        )
}
