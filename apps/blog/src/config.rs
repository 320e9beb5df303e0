//! Application configuration loading from environment variables.
//!
//! Everything is read once at startup. `.env` files are honoured through
//! `dotenvy` in `main`.
//!
//! # Environment Variables
//!
//! ## Data source
//! - `BLOG_DATA_SOURCE`: `dir` or `http` (default: "dir")
//! - `BLOG_DATA_DIR`: Directory holding the post and comment documents (default: "./data")
//! - `BLOG_DATA_URL`: Base URL of the documents, required when the source is `http`
//! - `POSTS_RESOURCE`: Post collection document (default: "posts.json")
//! - `COMMENTS_RESOURCE`: Comment mapping document (default: "comments.json")
//! - `DATA_FETCH_TIMEOUT_SECONDS`: HTTP timeout for the documents (default: 10)
//!
//! ## Local store
//! - `STORE_BACKEND`: `memory`, `file` or `redis` (default: "file")
//! - `STORE_DIR`: Directory for the file backend (default: "./.blog-store")
//! - `STORE_QUOTA_BYTES`: Optional size limit for the memory backend
//! - `REDIS_URL`: Required when the backend is `redis`
//! - `LIKES_NAMESPACE`: Store key for likes (default: "blog_likes")
//! - `COMMENTS_NAMESPACE`: Store key for comments (default: "blog_comments")
//!
//! ## Simulated backend
//! - `LIKE_CONFIRM_DELAY_MS`: Like confirmation latency (default: 500)
//! - `COMMENT_SUBMIT_DELAY_MS`: Comment submit latency (default: 800)
//! - `REMOTE_FAILURE_RATE`: Probability a remote call fails, 0.0 to 1.0 (default: 0.1)
//!
//! ## Server
//! - `RUST_LOG`: Logging level (default: "info,blog=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `SITE_BASE_URL`: Public site root used in share links (default: "http://localhost:3000/")
//! - `RELATED_POSTS_LIMIT`: Default number of related posts (default: 3)

use crate::application::related_posts::use_case::DEFAULT_RELATED_LIMIT;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum DataSourceKind {
    Dir,
    Http,
}

impl FromStr for DataSourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dir" => Ok(Self::Dir),
            "http" => Ok(Self::Http),
            other => Err(format!("unknown data source '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackendKind {
    Memory,
    File,
    Redis,
}

impl FromStr for StoreBackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            "redis" => Ok(Self::Redis),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where posts and server comments come from
    pub data_source: DataSourceKind,

    pub data_dir: String,

    /// Base URL for the `http` data source
    pub data_url: Option<String>,

    pub posts_resource: String,

    pub comments_resource: String,

    pub data_fetch_timeout_seconds: u64,

    pub store_backend: StoreBackendKind,

    pub store_dir: String,

    /// Byte limit for the memory backend; unlimited when unset
    pub store_quota_bytes: Option<usize>,

    pub redis_url: Option<String>,

    pub likes_namespace: String,

    pub comments_namespace: String,

    pub like_confirm_delay_ms: u64,

    pub comment_submit_delay_ms: u64,

    /// Probability that a simulated remote call fails
    pub remote_failure_rate: f64,

    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Public site root, with trailing slash
    pub site_base_url: String,

    pub related_posts_limit: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, if a
    /// variable required by the chosen data source or store backend is
    /// missing, or if `REMOTE_FAILURE_RATE` lies outside 0.0..=1.0.
    pub fn from_env() -> anyhow::Result<Self> {
        let data_source: DataSourceKind = env_or("BLOG_DATA_SOURCE", DataSourceKind::Dir)?;
        let data_url = match data_source {
            DataSourceKind::Http => Some(env_required("BLOG_DATA_URL")?),
            DataSourceKind::Dir => std::env::var("BLOG_DATA_URL").ok(),
        };

        let store_backend: StoreBackendKind = env_or("STORE_BACKEND", StoreBackendKind::File)?;
        let redis_url = match store_backend {
            StoreBackendKind::Redis => Some(env_required("REDIS_URL")?),
            _ => std::env::var("REDIS_URL").ok(),
        };

        let store_quota_bytes = match std::env::var("STORE_QUOTA_BYTES") {
            Ok(val) => Some(
                val.parse::<usize>()
                    .map_err(|e| anyhow::anyhow!("Failed to parse STORE_QUOTA_BYTES: {}", e))?,
            ),
            Err(_) => None,
        };

        let remote_failure_rate: f64 = env_or("REMOTE_FAILURE_RATE", 0.1)?;
        if !(0.0..=1.0).contains(&remote_failure_rate) {
            anyhow::bail!(
                "REMOTE_FAILURE_RATE must be between 0.0 and 1.0, got {}",
                remote_failure_rate
            );
        }

        Ok(Self {
            data_source,
            data_dir: env_or("BLOG_DATA_DIR", "./data".to_string())?,
            data_url,
            posts_resource: env_or("POSTS_RESOURCE", "posts.json".to_string())?,
            comments_resource: env_or("COMMENTS_RESOURCE", "comments.json".to_string())?,
            data_fetch_timeout_seconds: env_or("DATA_FETCH_TIMEOUT_SECONDS", 10)?,
            store_backend,
            store_dir: env_or("STORE_DIR", "./.blog-store".to_string())?,
            store_quota_bytes,
            redis_url,
            likes_namespace: env_or("LIKES_NAMESPACE", "blog_likes".to_string())?,
            comments_namespace: env_or("COMMENTS_NAMESPACE", "blog_comments".to_string())?,
            like_confirm_delay_ms: env_or("LIKE_CONFIRM_DELAY_MS", 500)?,
            comment_submit_delay_ms: env_or("COMMENT_SUBMIT_DELAY_MS", 800)?,
            remote_failure_rate,
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            site_base_url: env_or("SITE_BASE_URL", "http://localhost:3000/".to_string())?,
            related_posts_limit: env_or("RELATED_POSTS_LIMIT", DEFAULT_RELATED_LIMIT)?,
        })
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
