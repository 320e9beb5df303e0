pub mod comment;
pub mod like;
pub mod transport;
