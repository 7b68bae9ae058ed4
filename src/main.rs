use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use kira::bootstrap::app_context::{AppContext, AppServices};
use kira::bootstrap::config::{Config, StorageBackend};
use kira::infrastructure::db::repositories::{
    kv_store_sqlx::SqlxKvStore, link_repository_sqlx::SqlxLinkRepository,
    note_repository_sqlx::SqlxNoteRepository,
    notification_repository_sqlx::SqlxNotificationRepository,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            kira::presentation::http::health::health,
            kira::presentation::http::notes::list_notes,
            kira::presentation::http::notes::create_note,
            kira::presentation::http::notes::update_note_content,
            kira::presentation::http::notes::suggest_notes,
            kira::presentation::http::notes::get_local_graph,
            kira::presentation::http::links::create_link,
            kira::presentation::http::ui::get_sidebar,
            kira::presentation::http::ui::put_sidebar,
            kira::presentation::http::ui::toggle_sidebar,
            kira::presentation::http::notifications::list_notifications,
            kira::presentation::http::notifications::mark_notification_read,
            kira::presentation::http::notifications::mark_all_notifications_read,
        ),
        components(schemas(
            kira::presentation::http::health::HealthResp,
            kira::presentation::http::notes::Note,
            kira::presentation::http::notes::NoteListResponse,
            kira::presentation::http::notes::CreateNoteRequest,
            kira::presentation::http::notes::UpdateNoteContentRequest,
            kira::presentation::http::notes::WikiLinkItem,
            kira::presentation::http::notes::GraphNode,
            kira::presentation::http::notes::GraphEdge,
            kira::presentation::http::notes::LocalGraphResponse,
            kira::presentation::http::links::CreateLinkRequest,
            kira::presentation::http::links::CreateLinkResponse,
            kira::presentation::http::ui::SidebarStateBody,
            kira::presentation::http::notifications::NotificationItem,
            kira::presentation::http::notifications::NotificationListResponse,
            kira::presentation::http::notifications::MarkAllReadResponse,
            kira::domain::ui::toast::Toast,
            kira::domain::ui::toast::ToastVariant,
        )),
        tags(
            (name = "Notes", description = "Notes, wiki-link suggestions and local graph"),
            (name = "Links", description = "Note-to-note links"),
            (name = "UI State", description = "Persisted UI preferences"),
            (name = "Notifications", description = "User notifications"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "kira=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting KIRA backend");

    let (pool, services) = match cfg.storage_backend {
        StorageBackend::Postgres => {
            let pool = kira::infrastructure::db::connect_and_migrate(
                &cfg.database_url,
                cfg.db_max_connections,
            )
            .await?;
            let services = AppServices::new(
                Arc::new(SqlxNoteRepository::new(pool.clone())),
                Arc::new(SqlxLinkRepository::new(pool.clone())),
                Arc::new(SqlxKvStore::new(pool.clone())),
                Arc::new(SqlxNotificationRepository::new(pool.clone())),
            );
            (Some(pool), services)
        }
        StorageBackend::Memory => {
            tracing::warn!("storage_backend_memory_data_is_not_persisted");
            (None, AppServices::in_memory())
        }
    };

    let services =
        services.with_catalog_idle_ttl(Duration::from_secs(cfg.catalog_idle_secs));
    let ctx = AppContext::new(cfg.clone(), services);

    // Build CORS
    let methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::OPTIONS,
    ];
    let headers = [http::header::CONTENT_TYPE, http::header::AUTHORIZATION];
    let cors = match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(v)) => CorsLayer::new()
            .allow_origin(v)
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(true),
        Some(Err(_)) | None if !cfg.is_production => CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(true),
        // Production requires FRONTEND_URL (checked in Config); deny cross-origin otherwise
        _ => CorsLayer::new(),
    };

    let api_router = Router::new()
        .nest("/api", kira::presentation::http::health::routes(pool.clone()))
        .nest("/api", kira::presentation::http::notes::routes(ctx.clone()))
        .nest("/api", kira::presentation::http::links::routes(ctx.clone()))
        .nest("/api", kira::presentation::http::ui::routes(ctx.clone()))
        .nest(
            "/api",
            kira::presentation::http::notifications::routes(ctx.clone()),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;

    let api_handle: JoinHandle<anyhow::Result<()>> = tokio::spawn(async move {
        axum::serve(listener, api_router).await?;
        Ok(())
    });

    // Background refresh of loaded note catalogs
    let catalog = ctx.note_catalog();
    let interval = Duration::from_secs(cfg.catalog_refresh_secs);
    let refresh_handle: JoinHandle<()> = tokio::spawn(async move {
        loop {
            sleep(interval).await;
            catalog.refresh_loaded().await;
        }
    });

    match api_handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(?e, "API server task failed"),
        Err(e) => error!(?e, "API server task panicked"),
    }
    refresh_handle.abort();
    Ok(())
}
