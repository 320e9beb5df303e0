use crate::domain::post::{
    entity::Post,
    share::{ShareLinks, share_links},
};
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

/// Upper bound for `?limit=` on related posts.
const MAX_RELATED_LIMIT: usize = 12;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub post: Post,
    pub content_html: String,
    pub share: ShareLinks,
}

#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    pub limit: Option<usize>,
}

pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, AppError> {
    Ok(Json(state.catalog.list().await?))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostDetailResponse>, AppError> {
    let post = state.catalog.find(&id).await?;
    let share = share_links(&post, &state.config.site_base_url)?;
    Ok(Json(PostDetailResponse {
        content_html: post.render_content(),
        share,
        post,
    }))
}

pub async fn related_posts(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<RelatedQuery>,
) -> Result<Json<Vec<Post>>, AppError> {
    let limit = query.limit.unwrap_or(state.config.related_posts_limit);
    if limit > MAX_RELATED_LIMIT {
        return Err(AppError::BadRequest(format!(
            "limit must be at most {}",
            MAX_RELATED_LIMIT
        )));
    }
    Ok(Json(state.catalog.related(&id, limit).await?))
}
