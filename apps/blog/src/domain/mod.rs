pub mod post;
pub mod shared;
pub mod social;
