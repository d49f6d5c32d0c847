//! Lumina Studio API Server
//!
//! Backend for the studio's marketing site: blog content pipeline, contact
//! form flow, pricing calculator, and the SEO surface. Uses hexagonal
//! (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::Database;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod session;

#[cfg(test)]
mod test_utils;


use adapters::{
    AnalyticsDispatch, ContactDelivery, IpApiGeoClient, PostgresCategoryRepository,
    PostgresPostRepository,
};
use app::{BlogService, ContactService, HeroSelector, PricingService};
use axum::Json;
use config::Config;
use domain::entities::Catalog;
use serde::Serialize;
use session::SessionStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub blog_service:
        Arc<BlogService<PostgresPostRepository, PostgresCategoryRepository, AnalyticsDispatch>>,
    pub contact_service: Arc<ContactService<ContactDelivery, AnalyticsDispatch>>,
    pub pricing_service: Arc<PricingService<IpApiGeoClient, AnalyticsDispatch>>,
    pub post_repo: Arc<PostgresPostRepository>,
    pub category_repo: Arc<PostgresCategoryRepository>,
    pub hero: Arc<HeroSelector>,
    pub catalog: Arc<Catalog>,
    pub sessions: Arc<SessionStore>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lumina_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Lumina Studio API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let post_repo = Arc::new(PostgresPostRepository::new(db.clone()));
    let category_repo = Arc::new(PostgresCategoryRepository::new(db.clone()));

    let analytics = Arc::new(AnalyticsDispatch::from_config(
        config.analytics_endpoint.clone(),
        config.analytics_measurement_id.clone(),
    ));
    if !config.analytics_enabled() {
        tracing::warn!("Analytics endpoint not configured; events will be dropped");
    } else if config.analytics_measurement_id.is_none() {
        tracing::warn!("ANALYTICS_MEASUREMENT_ID not set; events go out without one");
    }

    let geo = Arc::new(IpApiGeoClient::new(config.geo_api_url.clone()));
    let notifier = Arc::new(ContactDelivery::from_config(
        config.contact_webhook_url.clone(),
    ));

    // Create application services
    let blog_service = Arc::new(BlogService::new(
        post_repo.clone(),
        category_repo.clone(),
        analytics.clone(),
    ));
    let contact_service = Arc::new(ContactService::new(notifier, analytics.clone()));
    let pricing_service = Arc::new(PricingService::new(geo, analytics.clone()));

    let sessions = Arc::new(SessionStore::new());
    {
        // Background sweep keeps the session map bounded when clients
        // rotate session ids.
        let sessions = sessions.clone();
        tokio::spawn(async move {
            let mut tick = tokio::time::interval(session::SWEEP_INTERVAL);
            loop {
                tick.tick().await;
                let dropped = sessions.sweep();
                if dropped > 0 {
                    tracing::debug!("Dropped {} idle sessions", dropped);
                }
            }
        });
    }

    // Create app state
    let state = AppState {
        blog_service,
        contact_service,
        pricing_service,
        post_repo,
        category_repo,
        hero: Arc::new(HeroSelector::from_env()),
        catalog: Arc::new(Catalog::builtin()),
        sessions,
        config: config.clone(),
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Contact submission is the only write surface; rate-limit it
    let rate_limited_routes = Router::new()
        .route("/api/contact", post(handlers::submit_contact))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        // Blog
        .route("/api/blog/posts", get(handlers::list_posts))
        .route("/api/blog/posts/:slug", get(handlers::get_post))
        .route("/api/blog/posts/:slug/like", post(handlers::like_post))
        .route("/api/blog/categories", get(handlers::list_categories))
        // Contact interaction events (submission itself is rate-limited)
        .route("/api/contact/events", post(handlers::track_form_event))
        // Pricing
        .route("/api/pricing/estimate", get(handlers::get_estimate))
        .route("/api/pricing/packages", get(handlers::list_packages))
        // Pages and session
        .route("/api/pages/:page", get(handlers::get_page))
        .route("/api/session/exit-intent", post(handlers::exit_intent))
        // Static catalog
        .route("/api/portfolio", get(handlers::list_portfolio))
        .route("/api/process", get(handlers::list_process))
        .route("/api/team", get(handlers::list_team))
        // SEO surface
        .route("/sitemap.xml", get(handlers::sitemap))
        .route("/robots.txt", get(handlers::robots))
        .route("/rss.xml", get(handlers::rss))
        .merge(rate_limited_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
