pub mod comments;
pub mod likes;
pub mod posts;
pub mod related_posts;
