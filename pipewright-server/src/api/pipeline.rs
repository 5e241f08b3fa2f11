//! Pipeline API Handlers
//!
//! HTTP endpoints for pipeline generation, listing and export.

use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use pipewright_core::dto::pipeline::{GeneratePipeline, GeneratedPipeline, PipelineSummary};
use uuid::Uuid;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::pipeline_service;

/// POST /generate
/// Generate, validate and store a new pipeline
pub async fn generate_pipeline(
    State(state): State<AppState>,
    Json(req): Json<GeneratePipeline>,
) -> ApiResult<Json<GeneratedPipeline>> {
    tracing::info!("Generating pipeline: {}", req.name);

    let generated =
        pipeline_service::generate(&state.store, &state.renderer, &state.validator, req)
            .await
            .map_err(|e| match e {
                pipeline_service::PipelineError::ValidationError(msg) => ApiError::BadRequest(msg),
                pipeline_service::PipelineError::InvalidJenkinsfile(msg) => {
                    ApiError::BadRequest(msg)
                }
                pipeline_service::PipelineError::ValidatorUnavailable => {
                    ApiError::ValidatorUnavailable
                }
                pipeline_service::PipelineError::ValidatorIo(err) => {
                    ApiError::InternalError(format!("Validator I/O failure: {}", err))
                }
                pipeline_service::PipelineError::RenderError(err) => {
                    ApiError::InternalError(format!("Failed to render Jenkinsfile: {}", err))
                }
                pipeline_service::PipelineError::NotFound(id) => {
                    ApiError::NotFound(format!("Pipeline {} not found", id))
                }
            })?;

    Ok(Json(generated))
}

/// GET /list
/// List all generated pipelines
pub async fn list_pipelines(State(state): State<AppState>) -> Json<Vec<PipelineSummary>> {
    tracing::debug!("Listing all pipelines");

    Json(pipeline_service::list_pipelines(&state.store))
}

/// GET /export/{pipeline_id}
/// Download a stored Jenkinsfile as a plain-text attachment
pub async fn export_pipeline(
    State(state): State<AppState>,
    Path(pipeline_id): Path<Uuid>,
) -> ApiResult<Response> {
    tracing::debug!("Exporting pipeline: {}", pipeline_id);

    let export = pipeline_service::export(&state.store, pipeline_id).map_err(|e| match e {
        pipeline_service::PipelineError::NotFound(id) => {
            ApiError::NotFound(format!("Pipeline {} not found", id))
        }
        pipeline_service::PipelineError::ValidationError(msg) => ApiError::BadRequest(msg),
        pipeline_service::PipelineError::InvalidJenkinsfile(msg) => ApiError::BadRequest(msg),
        pipeline_service::PipelineError::ValidatorUnavailable => ApiError::ValidatorUnavailable,
        pipeline_service::PipelineError::ValidatorIo(err) => {
            ApiError::InternalError(format!("Validator I/O failure: {}", err))
        }
        pipeline_service::PipelineError::RenderError(err) => {
            ApiError::InternalError(format!("Failed to render Jenkinsfile: {}", err))
        }
    })?;

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/plain; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", export.filename),
        ),
    ];

    Ok((headers, export.jenkinsfile).into_response())
}
