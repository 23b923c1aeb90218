//! Web layer for CyberGuardian
//!
//! This module provides the HTTP server and API endpoints.
//!
//! # Module Structure
//! - `extract`: validating JSON body and query extractors
//! - `handlers`: HTTP request handlers, one submodule per resource
//! - `state`: Application state shared across handlers
//! - `types`: Request and response types

mod extract;
pub mod handlers;
mod state;
mod types;

// Re-export public types
pub use extract::{ValidatedJson, ValidatedQuery};
pub use state::{AppState, ConfigInfo, RuntimeInfo};
pub use types::{
    BlogQuery, ConfigItem, ConfigResponse, GlossaryQuery, HealthResponse, PasswordCheckRequest,
    ScanRequest, StatusResponse, ThreatQuery, ToolQuery, VersionResponse,
};

use anyhow::Result;
use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tokio::sync::watch;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;

use crate::checks::{
    Finding, FindingSeverity, PasswordChecks, PasswordReport, ScanReport, ScanSummary,
};
use crate::config::Config;
use crate::error::ErrorResponse;
use crate::health::ProbeServer;
use crate::storage::{
    AnalyticsSample, AnalyticsSummary, AnalyticsTotals, BlogPost, BlogPostPatch, CategoryCount,
    GlossaryTerm, GlossaryTermPatch, NewAnalyticsSample, NewBlogPost, NewGlossaryTerm, NewThreat,
    NewTool, RecordCounts, Severity, SeverityBreakdown, Store, Threat, ThreatPatch, Tool,
    ToolPatch,
};

use handlers::{analytics, blog, checks, glossary, threats, tools};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CyberGuardian API",
        description = "Cybersecurity education dashboard API",
        version = env!("CARGO_PKG_VERSION"),
        license(name = "MIT")
    ),
    paths(
        handlers::health,
        threats::list_threats,
        threats::get_threat,
        threats::create_threat,
        threats::update_threat,
        threats::delete_threat,
        tools::list_tools,
        tools::get_tool,
        tools::create_tool,
        tools::update_tool,
        tools::delete_tool,
        glossary::list_terms,
        glossary::get_term,
        glossary::create_term,
        glossary::update_term,
        glossary::delete_term,
        blog::list_posts,
        blog::get_post,
        blog::create_post,
        blog::update_post,
        blog::delete_post,
        analytics::list_analytics,
        analytics::create_analytics_sample,
        analytics::get_analytics_summary,
        checks::password_check,
        checks::vulnerability_scan,
        handlers::get_version,
        handlers::get_status,
        handlers::get_config,
    ),
    components(schemas(
        HealthResponse,
        ErrorResponse,
        VersionResponse,
        StatusResponse,
        RecordCounts,
        ConfigResponse,
        ConfigItem,
        Severity,
        Threat,
        NewThreat,
        ThreatPatch,
        Tool,
        NewTool,
        ToolPatch,
        GlossaryTerm,
        NewGlossaryTerm,
        GlossaryTermPatch,
        BlogPost,
        NewBlogPost,
        BlogPostPatch,
        AnalyticsSample,
        NewAnalyticsSample,
        AnalyticsSummary,
        AnalyticsTotals,
        SeverityBreakdown,
        CategoryCount,
        PasswordCheckRequest,
        PasswordReport,
        PasswordChecks,
        ScanRequest,
        ScanReport,
        ScanSummary,
        Finding,
        FindingSeverity,
    )),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Threats", description = "Threat catalog endpoints"),
        (name = "Tools", description = "Security tool catalog endpoints"),
        (name = "Glossary", description = "Glossary endpoints"),
        (name = "Blog", description = "Blog post endpoints"),
        (name = "Analytics", description = "Analytics sample and summary endpoints"),
        (name = "Checks", description = "Password strength and vulnerability scan endpoints"),
        (name = "Version", description = "Build version information endpoints"),
        (name = "Status", description = "Server runtime status endpoints"),
        (name = "Config", description = "Configuration endpoints"),
    )
)]
pub struct ApiDoc;

/// Build the API router with CORS and request tracing applied
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(handlers::health))
        // Threats
        .route(
            "/api/threats",
            get(threats::list_threats).post(threats::create_threat),
        )
        .route(
            "/api/threats/{id}",
            get(threats::get_threat)
                .patch(threats::update_threat)
                .delete(threats::delete_threat),
        )
        // Tools; the static check routes win over `{id}`
        .route("/api/tools", get(tools::list_tools).post(tools::create_tool))
        .route("/api/tools/password-check", post(checks::password_check))
        .route(
            "/api/tools/vulnerability-scan",
            post(checks::vulnerability_scan),
        )
        .route(
            "/api/tools/{id}",
            get(tools::get_tool)
                .patch(tools::update_tool)
                .delete(tools::delete_tool),
        )
        // Glossary
        .route(
            "/api/glossary",
            get(glossary::list_terms).post(glossary::create_term),
        )
        .route(
            "/api/glossary/{id}",
            get(glossary::get_term)
                .patch(glossary::update_term)
                .delete(glossary::delete_term),
        )
        // Blog
        .route("/api/blog", get(blog::list_posts).post(blog::create_post))
        .route(
            "/api/blog/{id}",
            get(blog::get_post)
                .patch(blog::update_post)
                .delete(blog::delete_post),
        )
        // Analytics
        .route(
            "/api/analytics",
            get(analytics::list_analytics).post(analytics::create_analytics_sample),
        )
        .route(
            "/api/analytics/summary",
            get(analytics::get_analytics_summary),
        )
        // Service info
        .route("/api/version", get(handlers::get_version))
        .route("/api/status", get(handlers::get_status))
        .route("/api/config", get(handlers::get_config))
        // OpenAPI documentation
        .route("/api-docs/openapi.json", get(handlers::openapi_json))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Serve the API until `shutdown` flips to `true`
pub async fn run(
    config: Config,
    probes: ProbeServer,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let addr = config.api_addr().map_err(anyhow::Error::msg)?;

    info!(
        id_strategy = %config.id_strategy,
        "Initializing in-memory store"
    );
    let store = Store::new(config.id_strategy.into());
    let state = AppState::new(store, ConfigInfo::from(&config));

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(addr = %addr, "Server listening");

    // Mark as ready
    probes.set_ready(true);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.changed().await;
            info!("Server shutting down");
        })
        .await?;

    probes.set_ready(false);
    Ok(())
}
