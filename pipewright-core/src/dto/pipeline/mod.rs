//! Pipeline DTOs for the generator API

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::pipeline::Pipeline;

/// Request to generate a new pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePipeline {
    pub name: String,
    /// Explicit technology tags; merged with whatever is detected from
    /// the requirements text.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub requirements: String,
}

/// Response to a successful generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPipeline {
    pub pipeline_id: Uuid,
    pub jenkinsfile: String,
}

/// Listing entry for a stored pipeline
///
/// Deliberately excludes the Jenkinsfile body and the requirements text;
/// those are only reachable through export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub id: Uuid,
    pub name: String,
    pub tech_stack: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Pipeline> for PipelineSummary {
    fn from(pipeline: Pipeline) -> Self {
        Self {
            id: pipeline.id,
            name: pipeline.name,
            tech_stack: pipeline.tech_stack,
            created_at: pipeline.created_at,
        }
    }
}

/// Exported pipeline body plus the download filename derived from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineExport {
    pub filename: String,
    pub jenkinsfile: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_tech_stack_defaults_to_empty() {
        let req: GeneratePipeline =
            serde_json::from_str(r#"{"name": "Example", "requirements": "Uses Docker"}"#)
                .unwrap();

        assert_eq!(req.name, "Example");
        assert!(req.tech_stack.is_empty());
    }

    #[test]
    fn test_generated_pipeline_wire_shape() {
        let generated = GeneratedPipeline {
            pipeline_id: Uuid::new_v4(),
            jenkinsfile: "pipeline {}".to_string(),
        };

        let value = serde_json::to_value(&generated).unwrap();
        assert!(value.get("pipeline_id").is_some());
        assert_eq!(value["jenkinsfile"], "pipeline {}");
    }

    #[test]
    fn test_summary_from_pipeline_drops_body_and_requirements() {
        let pipeline = Pipeline {
            id: Uuid::new_v4(),
            name: "Example".to_string(),
            tech_stack: vec!["docker".to_string()],
            requirements: "Uses Docker".to_string(),
            created_at: chrono::Utc::now(),
            jenkinsfile: "pipeline {}".to_string(),
        };

        let summary = PipelineSummary::from(pipeline.clone());
        assert_eq!(summary.id, pipeline.id);
        assert_eq!(summary.name, "Example");

        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("jenkinsfile").is_none());
        assert!(value.get("requirements").is_none());
    }
}
