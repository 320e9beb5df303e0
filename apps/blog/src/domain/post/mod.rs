pub mod entity;
pub mod share;
pub mod source;
