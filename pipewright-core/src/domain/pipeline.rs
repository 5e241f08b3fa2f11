//! Pipeline domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated pipeline record
///
/// The stored result of one successful generation. Records are immutable:
/// once inserted they are never updated or deleted, and a record only
/// exists if its Jenkinsfile passed syntax validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: Uuid,
    pub name: String,
    /// Deduplicated union of user-supplied and auto-detected technology
    /// tags, sorted so rendering is reproducible for identical inputs.
    pub tech_stack: Vec<String>,
    /// Original free-text requirements, retained for audit/display.
    pub requirements: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// The rendered, validated pipeline definition.
    pub jenkinsfile: String,
}
