//! Pipeline Store
//!
//! Process-lifetime mapping from pipeline id to its record, created empty
//! at startup. Key-value semantics only: insert, get, list in insertion
//! order. No update or delete. A single coarse lock guards the map;
//! critical sections are short and readers see consistent snapshots.

use std::collections::HashMap;
use std::sync::RwLock;

use pipewright_core::domain::pipeline::Pipeline;
use uuid::Uuid;

#[derive(Default)]
struct StoreInner {
    by_id: HashMap<Uuid, Pipeline>,
    /// Insertion order of ids, the listing order
    order: Vec<Uuid>,
}

/// In-memory pipeline store
#[derive(Default)]
pub struct PipelineStore {
    inner: RwLock<StoreInner>,
}

impl PipelineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a validated pipeline record
    pub fn insert(&self, pipeline: Pipeline) {
        let mut inner = self.inner.write().unwrap();
        inner.order.push(pipeline.id);
        inner.by_id.insert(pipeline.id, pipeline);
    }

    /// Looks up a pipeline by id
    pub fn get(&self, id: &Uuid) -> Option<Pipeline> {
        self.inner.read().unwrap().by_id.get(id).cloned()
    }

    /// Returns all pipelines in insertion order
    pub fn list(&self) -> Vec<Pipeline> {
        let inner = self.inner.read().unwrap();
        inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline(name: &str) -> Pipeline {
        Pipeline {
            id: Uuid::new_v4(),
            name: name.to_string(),
            tech_stack: vec!["docker".to_string()],
            requirements: "Uses Docker".to_string(),
            created_at: chrono::Utc::now(),
            jenkinsfile: "pipeline {}".to_string(),
        }
    }

    #[test]
    fn test_get_returns_inserted_record() {
        let store = PipelineStore::new();
        let record = pipeline("Example");
        let id = record.id;

        store.insert(record);

        let found = store.get(&id).unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.name, "Example");
    }

    #[test]
    fn test_get_missing_id() {
        let store = PipelineStore::new();
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = PipelineStore::new();
        store.insert(pipeline("first"));
        store.insert(pipeline("second"));
        store.insert(pipeline("third"));

        let names: Vec<String> = store.list().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
