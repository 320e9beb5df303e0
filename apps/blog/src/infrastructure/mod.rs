pub mod remote;
pub mod store;
