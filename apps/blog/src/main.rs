use blog::{
    application::{
        comments::use_case::CommentService, likes::use_case::LikeService,
        posts::use_case::PostCatalog,
    },
    config::{Config, DataSourceKind, StoreBackendKind},
    domain::post::source::BlogDataSource,
    infrastructure::{
        remote::{
            dir_data_source::DirDataSource,
            http_data_source::HttpDataSource,
            simulated_transport::{FaultInjection, SimulatedTransport},
        },
        store::{
            file_backend::FileBackend, memory_backend::MemoryBackend,
            record_store::LocalRecordStore, redis_backend::RedisBackend,
            traits::KeyValueBackend,
        },
    },
    presentation::http::{routes::create_router, state::AppState, toggle_guard::PendingToggles},
};
use http::{Method, header};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,blog=debug,tower_http=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let state = build_state(config.clone())?;

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Blog API listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn build_state(config: Config) -> anyhow::Result<AppState> {
    let backend: Arc<dyn KeyValueBackend> = match config.store_backend {
        StoreBackendKind::Memory => match config.store_quota_bytes {
            Some(quota) => Arc::new(MemoryBackend::with_quota(quota)),
            None => Arc::new(MemoryBackend::new()),
        },
        StoreBackendKind::File => Arc::new(FileBackend::new(&config.store_dir)),
        StoreBackendKind::Redis => {
            let url = config
                .redis_url
                .clone()
                .ok_or_else(|| anyhow::anyhow!("REDIS_URL is required for the redis store"))?;
            Arc::new(RedisBackend::new(redis::Client::open(url)?, "blog:"))
        }
    };
    let store = LocalRecordStore::new(backend);

    let source: Arc<dyn BlogDataSource> = match config.data_source {
        DataSourceKind::Dir => Arc::new(DirDataSource::new(
            &config.data_dir,
            config.posts_resource.clone(),
            config.comments_resource.clone(),
        )),
        DataSourceKind::Http => {
            let url = config
                .data_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("BLOG_DATA_URL is required for the http source"))?;
            Arc::new(HttpDataSource::new(
                url,
                config.posts_resource.clone(),
                config.comments_resource.clone(),
                Duration::from_secs(config.data_fetch_timeout_seconds),
            )?)
        }
    };

    let faults = FaultInjection::Random {
        failure_rate: config.remote_failure_rate,
    };
    let like_transport = Arc::new(SimulatedTransport::new(
        Duration::from_millis(config.like_confirm_delay_ms),
        faults,
    ));
    let comment_transport = Arc::new(SimulatedTransport::new(
        Duration::from_millis(config.comment_submit_delay_ms),
        faults,
    ));

    tracing::info!(
        store = ?config.store_backend,
        source = ?config.data_source,
        failure_rate = config.remote_failure_rate,
        "Services configured"
    );

    Ok(AppState {
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
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
