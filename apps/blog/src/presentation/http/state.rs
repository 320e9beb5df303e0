use crate::{
    application::{comments::use_case::CommentService, likes::use_case::LikeService, posts::use_case::PostCatalog},
    config::Config,
};
use super::toggle_guard::PendingToggles;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: PostCatalog,
    pub likes: LikeService,
    pub comments: CommentService,
    pub pending_toggles: PendingToggles,
}
