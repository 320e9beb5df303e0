use crate::domain::social::like::LikeRecord;
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
};

pub async fn get_likes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<LikeRecord> {
    Json(state.likes.state(&id).await)
}

pub async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LikeRecord>, AppError> {
    let Some(_guard) = state.pending_toggles.try_acquire(&id) else {
        return Err(AppError::Conflict(
            "A like update for this post is already in progress".to_string(),
        ));
    };

    Ok(Json(state.likes.toggle(&id).await?))
}
