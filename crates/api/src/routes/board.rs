use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/locations",
            get(handlers::board::list_locations)
                .post(handlers::board::create_location)
                .delete(handlers::board::reset_locations),
        )
        .route("/api/slots/toggle", post(handlers::board::toggle_slot))
        .route("/api/reservations", get(handlers::board::list_reservations))
        .route("/api/summary", get(handlers::board::board_summary))
}
