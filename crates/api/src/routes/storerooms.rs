//! Route definitions for the `/storerooms` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::storerooms;
use crate::state::AppState;

/// Routes mounted at `/storerooms`.
///
/// ```text
/// GET  /                  -> list_storerooms
/// POST /                  -> create_storeroom        (admin only)
/// PUT  /{id}              -> update_storeroom        (admin only)
/// GET  /{id}/luggage      -> list_storeroom_luggage  (?status=)
/// GET  /{id}/occupancy    -> get_occupancy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(storerooms::list_storerooms).post(storerooms::create_storeroom),
        )
        .route("/{id}", put(storerooms::update_storeroom))
        .route("/{id}/luggage", get(storerooms::list_storeroom_luggage))
        .route("/{id}/occupancy", get(storerooms::get_occupancy))
}
