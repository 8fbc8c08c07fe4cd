use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use inspector_core::{Comparison, ComparisonId, NewComparison};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Model Change Inspector",
    })
}

pub async fn create_comparison(
    State(state): State<AppState>,
    payload: Result<Json<NewComparison>, JsonRejection>,
) -> Result<Json<Comparison>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let outcome = state.runner.run(&request).await?;

    let store = state.store.clone();
    let comparison =
        tokio::task::spawn_blocking(move || store.insert(&request, &outcome)).await??;

    tracing::info!(
        "Created comparison {} ({} vs {})",
        comparison.id,
        comparison.model_a,
        comparison.model_b
    );
    Ok(Json(comparison))
}

pub async fn list_comparisons(
    State(state): State<AppState>,
) -> Result<Json<Vec<Comparison>>, AppError> {
    let store = state.store.clone();
    let comparisons = tokio::task::spawn_blocking(move || store.list()).await??;
    Ok(Json(comparisons))
}

pub async fn get_comparison(
    State(state): State<AppState>,
    Path(id): Path<ComparisonId>,
) -> Result<Json<Comparison>, AppError> {
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || store.get(id))
        .await??
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Comparison not found".to_string()))
}
