//! API Module
//!
//! HTTP API layer for the pipeline generator.
//! Each submodule handles endpoints for a specific concern.

pub mod error;
pub mod health;
pub mod pipeline;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::repository::PipelineStore;
use crate::service::render::JenkinsfileRenderer;
use crate::service::validate::SyntaxValidator;

/// Shared handler state
///
/// Owns the injected collaborators: the store, the renderer with its
/// registered template, and the validator chain.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PipelineStore>,
    pub renderer: Arc<JenkinsfileRenderer>,
    pub validator: Arc<SyntaxValidator>,
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Pipeline endpoints
        .route("/generate", post(pipeline::generate_pipeline))
        .route("/list", get(pipeline::list_pipelines))
        .route("/export/{pipeline_id}", get(pipeline::export_pipeline))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
