//! Pipewright Server
//!
//! A web service that turns a free-text project description into a
//! validated Jenkins pipeline definition.
//!
//! Architecture:
//! - Configuration: Load settings from environment or defaults
//! - API: axum HTTP endpoints (generate, list, export)
//! - Services: Business logic (tech detection, rendering, validation)
//! - Repository: In-memory pipeline store, alive for the process lifetime
//!
//! The Jenkinsfile template is registered eagerly at startup so a missing
//! or broken template resource fails the process before it accepts traffic.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;
pub mod config;
pub mod repository;
pub mod service;

use crate::api::AppState;
use crate::config::Config;
use crate::repository::PipelineStore;
use crate::service::render::JenkinsfileRenderer;
use crate::service::validate::SyntaxValidator;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pipewright_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pipewright Server...");

    let config = Config::from_env();
    config.validate()?;

    tracing::info!(
        "Loaded configuration: bind_addr={}, template={}",
        config.bind_addr,
        config.template_path.display()
    );

    // Register the Jenkinsfile template before accepting traffic
    let renderer = JenkinsfileRenderer::from_file(&config.template_path)
        .with_context(|| format!("Failed to load template {}", config.template_path.display()))?;

    tracing::info!("Jenkinsfile template registered");

    let validator = SyntaxValidator::default_chain(config.validator_timeout);
    let store = PipelineStore::new();

    let state = AppState {
        store: Arc::new(store),
        renderer: Arc::new(renderer),
        validator: Arc::new(validator),
    };

    // Build router with all API endpoints
    let app = api::create_router(state);

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
