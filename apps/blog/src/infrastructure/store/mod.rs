pub mod file_backend;
pub mod memory_backend;
pub mod record_store;
pub mod redis_backend;
pub mod traits;
