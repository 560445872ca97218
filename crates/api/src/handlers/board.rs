use axum::{
    extract::{Query, State},
    Json,
};
use bookboard_core::{
    errors::{BoardError, BoardResult},
    models::{
        board::{
            BoardSummary, CreateLocationRequest, ReservationRow, ReservationsQuery,
            ToggleSlotRequest,
        },
        location::Location,
    },
    store::Snapshot,
};
use eyre::WrapErr;
use std::sync::Arc;
use tracing::info;

use crate::{middleware::error_handling::AppError, ApiState, BoardStore};

fn snapshot_body(snapshot: Snapshot) -> Json<Vec<Location>> {
    Json(snapshot.to_vec())
}

/// Runs a mutation on the blocking pool, since it ends in a storage write.
///
/// The lock is held until the write returns, so mutations stay serialized.
async fn mutate<F>(state: Arc<ApiState>, op: F) -> Result<Snapshot, AppError>
where
    F: FnOnce(&mut BoardStore) -> BoardResult<Snapshot> + Send + 'static,
{
    let snapshot = tokio::task::spawn_blocking(move || {
        let mut store = state.store.blocking_lock();
        op(&mut store)
    })
    .await
    .wrap_err("Store operation did not complete")
    .map_err(BoardError::Storage)??;

    Ok(snapshot)
}

#[axum::debug_handler]
pub async fn list_locations(State(state): State<Arc<ApiState>>) -> Json<Vec<Location>> {
    let snapshot = state.store.lock().await.locations();
    snapshot_body(snapshot)
}

#[axum::debug_handler]
pub async fn create_location(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateLocationRequest>,
) -> Result<Json<Vec<Location>>, AppError> {
    let snapshot = mutate(state, move |store| {
        store.create_location(&payload.location_name)
    })
    .await?;

    Ok(snapshot_body(snapshot))
}

#[axum::debug_handler]
pub async fn reset_locations(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Location>>, AppError> {
    let snapshot = mutate(state, |store| store.reset()).await?;
    info!("Board reset through the API");

    Ok(snapshot_body(snapshot))
}

#[axum::debug_handler]
pub async fn toggle_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ToggleSlotRequest>,
) -> Result<Json<Vec<Location>>, AppError> {
    let snapshot = mutate(state, move |store| {
        store.toggle_slot(&payload.location_name, &payload.time)
    })
    .await?;

    Ok(snapshot_body(snapshot))
}

#[axum::debug_handler]
pub async fn list_reservations(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ReservationsQuery>,
) -> Json<Vec<ReservationRow>> {
    let store = state.store.lock().await;
    let rows = store
        .reservations(query.booked)
        .map(|(location_name, time)| ReservationRow {
            location_name: location_name.to_string(),
            time: time.to_string(),
        })
        .collect();

    Json(rows)
}

#[axum::debug_handler]
pub async fn board_summary(State(state): State<Arc<ApiState>>) -> Json<BoardSummary> {
    Json(state.store.lock().await.summary())
}
