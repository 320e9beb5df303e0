#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::Request,
};
use blog::{
    application::{
        comments::use_case::CommentService, likes::use_case::LikeService,
        posts::use_case::PostCatalog,
    },
    config::{Config, DataSourceKind, StoreBackendKind},
    domain::{
        post::{
            entity::{BlockKind, ContentBlock, Post},
            source::{BlogDataSource, FetchError},
        },
        social::{
            comment::CommentRecord,
            transport::{RemoteRequest, RemoteTransport, TransportError},
        },
    },
    infrastructure::{
        remote::simulated_transport::{FaultInjection, SimulatedTransport},
        store::{memory_backend::MemoryBackend, record_store::LocalRecordStore},
    },
    presentation::http::{routes::create_router, state::AppState, toggle_guard::PendingToggles},
};
use chrono::{TimeZone, Utc};
use mockall::mock;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

mock! {
    pub Transport {}

    #[async_trait]
    impl RemoteTransport for Transport {
        async fn send(&self, request: RemoteRequest) -> Result<(), TransportError>;
    }
}

/// Fixed posts and server comments served from memory.
#[derive(Clone, Default)]
pub struct StaticDataSource {
    pub posts: Vec<Post>,
    pub comments: HashMap<String, Vec<CommentRecord>>,
    pub failure: Option<FetchError>,
}

#[async_trait]
impl BlogDataSource for StaticDataSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(self.posts.clone()),
        }
    }

    async fn fetch_comments(&self) -> Result<HashMap<String, Vec<CommentRecord>>, FetchError> {
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(self.comments.clone()),
        }
    }
}

pub fn post(id: &str, category: &str, date_iso: &str) -> Post {
    Post {
        id: id.to_string(),
        title: format!("Title of {}", id),
        author: "Maya Ortiz".to_string(),
        date: date_iso.to_string(),
        date_iso: date_iso.to_string(),
        category: category.to_string(),
        excerpt: "Excerpt".to_string(),
        thumbnail: format!("images/{}-thumb.jpg", id),
        hero_image: format!("images/{}-hero.jpg", id),
        content: vec![
            ContentBlock {
                kind: BlockKind::Lead,
                text: "Opening line".to_string(),
                cite: None,
            },
            ContentBlock {
                kind: BlockKind::Paragraph,
                text: "Body & more".to_string(),
                cite: None,
            },
        ],
    }
}

pub fn remote_comment(id: &str, post_id: &str) -> CommentRecord {
    CommentRecord {
        id: id.to_string(),
        post_id: post_id.to_string(),
        author: "Remote Reader".to_string(),
        body: format!("Server side comment {}", id),
        timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
    }
}

pub fn fixture_source() -> StaticDataSource {
    let mut comments = HashMap::new();
    comments.insert(
        "trust".to_string(),
        vec![remote_comment("r1", "trust"), remote_comment("r2", "trust")],
    );
    StaticDataSource {
        posts: vec![
            post("colors", "Design", "2023-11-05"),
            post("trust", "Design", "2024-03-12"),
            post("voice", "Branding", "2024-01-28"),
            post("seo", "Marketing", "2023-09-19"),
        ],
        comments,
        failure: None,
    }
}

pub fn memory_store() -> LocalRecordStore {
    LocalRecordStore::new(Arc::new(MemoryBackend::new()))
}

pub fn build_config() -> Config {
    Config {
        data_source: DataSourceKind::Dir,
        data_dir: "./data".to_string(),
        data_url: None,
        posts_resource: "posts.json".to_string(),
        comments_resource: "comments.json".to_string(),
        data_fetch_timeout_seconds: 5,
        store_backend: StoreBackendKind::Memory,
        store_dir: "./.blog-store".to_string(),
        store_quota_bytes: None,
        redis_url: None,
        likes_namespace: "blog_likes".to_string(),
        comments_namespace: "blog_comments".to_string(),
        like_confirm_delay_ms: 500,
        comment_submit_delay_ms: 800,
        remote_failure_rate: 0.0,
        host: "127.0.0.1".to_string(),
        port: 0,
        site_base_url: "https://studio.example/".to_string(),
        related_posts_limit: 3,
    }
}

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

pub fn spawn_app_with(
    source: StaticDataSource,
    like_transport: Arc<dyn RemoteTransport>,
    comment_transport: Arc<dyn RemoteTransport>,
) -> TestApp {
    let config = build_config();
    let store = memory_store();
    let source: Arc<dyn BlogDataSource> = Arc::new(source);

    let state = AppState {
        catalog: PostCatalog::new(source.clone()),
        likes: LikeService::new(store.clone(), like_transport, config.likes_namespace.clone()),
        comments: CommentService::new(
            store,
            comment_transport,
            source,
            config.comments_namespace.clone(),
        ),
        pending_toggles: PendingToggles::new(),
        config,
    };

    TestApp {
        app: create_router(state.clone()),
        state,
    }
}

pub fn spawn_app(faults: FaultInjection) -> TestApp {
    spawn_app_with(
        fixture_source(),
        Arc::new(SimulatedTransport::instant(faults)),
        Arc::new(SimulatedTransport::instant(faults)),
    )
}

pub fn delayed_transport(millis: u64, faults: FaultInjection) -> Arc<dyn RemoteTransport> {
    Arc::new(SimulatedTransport::new(Duration::from_millis(millis), faults))
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: http::StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}
