//! Route definitions for the `/luggage` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::luggage;
use crate::state::AppState;

/// Routes mounted at `/luggage`.
///
/// ```text
/// POST   /                    -> create_luggage
/// GET    /by-code             -> get_by_code     (?code=)
/// GET    /guests              -> list_guests
/// GET    /by-guest            -> list_by_guest   (?guest_name=)
/// POST   /checkout/{code}     -> checkout
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update_luggage
/// DELETE /{id}                -> delete_luggage  (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(luggage::create_luggage))
        .route("/by-code", get(luggage::get_by_code))
        .route("/guests", get(luggage::list_guests))
        .route("/by-guest", get(luggage::list_by_guest))
        .route("/checkout/{code}", post(luggage::checkout))
        .route(
            "/{id}",
            get(luggage::get_by_id)
                .put(luggage::update_luggage)
                .delete(luggage::delete_luggage),
        )
}
