//! Pipeline Service
//!
//! Business logic for pipeline generation, listing and export.
//!
//! Generation is all-or-nothing: the Jenkinsfile is rendered and must
//! pass syntax validation before a record is assembled and inserted, so
//! the store never holds invalid or partially-constructed pipelines.

use std::collections::BTreeSet;

use pipewright_core::domain::pipeline::Pipeline;
use pipewright_core::dto::pipeline::{
    GeneratePipeline, GeneratedPipeline, PipelineExport, PipelineSummary,
};
use uuid::Uuid;

use crate::repository::PipelineStore;
use crate::service::detect::detect_tech_stack;
use crate::service::render::JenkinsfileRenderer;
use crate::service::validate::{SyntaxValidator, ValidateError};

/// Service error type
#[derive(Debug)]
pub enum PipelineError {
    NotFound(Uuid),
    /// Request shape problems caught before rendering (empty name, ...)
    ValidationError(String),
    /// The validator ran and rejected the rendered Jenkinsfile
    InvalidJenkinsfile(String),
    /// No validator tool is installed; a deployment fault, not an input fault
    ValidatorUnavailable,
    ValidatorIo(std::io::Error),
    RenderError(handlebars::RenderError),
}

impl From<ValidateError> for PipelineError {
    fn from(err: ValidateError) -> Self {
        match err {
            ValidateError::NoValidatorAvailable => PipelineError::ValidatorUnavailable,
            ValidateError::Io(err) => PipelineError::ValidatorIo(err),
        }
    }
}

impl From<handlebars::RenderError> for PipelineError {
    fn from(err: handlebars::RenderError) -> Self {
        PipelineError::RenderError(err)
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Generate, validate and store a new pipeline
pub async fn generate(
    store: &PipelineStore,
    renderer: &JenkinsfileRenderer,
    validator: &SyntaxValidator,
    req: GeneratePipeline,
) -> Result<GeneratedPipeline> {
    validate_generate_request(&req)?;

    let tech_stack = resolve_tech_stack(&req.tech_stack, &req.requirements);
    let jenkinsfile = renderer.render(&req.name, &tech_stack)?;

    let verdict = validator.validate(&jenkinsfile).await?;
    if !verdict.valid {
        return Err(PipelineError::InvalidJenkinsfile(verdict.message));
    }

    let pipeline = Pipeline {
        id: Uuid::new_v4(),
        name: req.name,
        tech_stack,
        requirements: req.requirements,
        created_at: chrono::Utc::now(),
        jenkinsfile: jenkinsfile.clone(),
    };

    tracing::info!("Pipeline generated: {} ({})", pipeline.name, pipeline.id);

    let generated = GeneratedPipeline {
        pipeline_id: pipeline.id,
        jenkinsfile,
    };
    store.insert(pipeline);

    Ok(generated)
}

/// List all stored pipelines, in insertion order
pub fn list_pipelines(store: &PipelineStore) -> Vec<PipelineSummary> {
    store.list().into_iter().map(PipelineSummary::from).collect()
}

/// Export a stored Jenkinsfile with its download filename
pub fn export(store: &PipelineStore, id: Uuid) -> Result<PipelineExport> {
    let pipeline = store.get(&id).ok_or(PipelineError::NotFound(id))?;

    Ok(PipelineExport {
        filename: format!("{}.jenkinsfile", pipeline.name),
        jenkinsfile: pipeline.jenkinsfile,
    })
}

/// Deduplicated union of user-supplied tags and detected tags
///
/// Sorted lexicographically so identical inputs always render identically.
fn resolve_tech_stack(user_tags: &[String], requirements: &str) -> Vec<String> {
    let mut stack: BTreeSet<String> = user_tags.iter().cloned().collect();
    stack.extend(detect_tech_stack(requirements).into_iter().map(String::from));

    stack.into_iter().collect()
}

// =============================================================================
// Validation
// =============================================================================

fn validate_generate_request(req: &GeneratePipeline) -> Result<()> {
    if req.name.trim().is_empty() {
        return Err(PipelineError::ValidationError(
            "Pipeline name cannot be empty".to_string(),
        ));
    }

    if req.name.len() > 255 {
        return Err(PipelineError::ValidationError(
            "Pipeline name is too long (max 255 characters)".to_string(),
        ));
    }

    Ok(())
}
