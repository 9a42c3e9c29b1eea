//! LearnHub billing service entry point.

use std::sync::Arc;

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use learnhub::adapters::billing::{RazorpayConfig, RazorpayGateway};
use learnhub::adapters::http::billing::{billing_router, BillingAppState};
use learnhub::adapters::persistence::{PgPaymentRecords, PgUserRepository};
use learnhub::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    // Lazy pool: connections are established on first use so the service
    // can boot before the database is reachable.
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_lazy(&config.database.url)?;

    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let payments = Arc::new(PgPaymentRecords::new(pool));

    let gateway = {
        use secrecy::ExposeSecret;
        Arc::new(RazorpayGateway::new(RazorpayConfig::new(
            config.billing.key_id.clone(),
            config.billing.key_secret.expose_secret().clone(),
        )))
    };

    let state = BillingAppState::new(users, payments, gateway, &config.billing);

    let cors = build_cors(config.server.cors_origins_list());

    let app = Router::new()
        .nest("/api", billing_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, test_mode = config.billing.is_test_mode(), "starting billing service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors(origins: Vec<String>) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any)
}
