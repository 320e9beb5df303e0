use crate::application::comments::dto::SubmitCommentRequest;
use crate::domain::social::comment::CommentRecord;
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

pub async fn get_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CommentRecord>>, AppError> {
    Ok(Json(state.comments.fetch(&id).await?))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SubmitCommentRequest>,
) -> Result<(StatusCode, Json<CommentRecord>), AppError> {
    let comment = state
        .comments
        .submit(&id, &body.author, &body.body)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}
