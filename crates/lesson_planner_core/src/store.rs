//! crates/lesson_planner_core/src/store.rs
//!
//! CRUD over the persisted, newest-first collection of lesson plans.

use crate::domain::{LessonPlan, PlanFields};
use crate::ports::{KeyValueStore, PortError, PortResult};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// The storage key holding the serialized plan collection.
pub const PLANS_KEY: &str = "lesson-plans";

/// The plan store: every mutating operation reads the whole collection,
/// mutates it in memory, and writes the whole collection back. There is no
/// locking; when several processes share the same storage, the last writer
/// wins. That trade-off is deliberate for a single-user authoring tool.
#[derive(Clone)]
pub struct PlanStore {
    storage: Arc<dyn KeyValueStore>,
}

impl PlanStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Returns the full collection, newest first. Absent storage is an empty
    /// collection, not an error; a present but unparseable value is.
    pub fn list(&self) -> PortResult<Vec<LessonPlan>> {
        match self.storage.get(PLANS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| PortError::Unexpected(format!("corrupt plan collection: {e}"))),
            None => Ok(Vec::new()),
        }
    }

    /// Creates a record from the draft fields, assigns a fresh id and
    /// creation timestamp, prepends it to the collection, persists, and
    /// returns the new record.
    pub fn create(
        &self,
        fields: PlanFields,
        generated_content: Option<String>,
    ) -> PortResult<LessonPlan> {
        let mut plans = self.list()?;
        let plan = LessonPlan {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            topic: fields.topic,
            grade_level: fields.grade_level,
            main_concept: fields.main_concept,
            materials: fields.materials,
            objectives: fields.objectives,
            outline: fields.outline,
            generated_content,
        };
        plans.insert(0, plan.clone());
        self.persist(&plans)?;
        Ok(plan)
    }

    /// Replaces the record whose id matches `plan.id`, leaving every other
    /// record untouched. An unknown id leaves the collection unchanged; the
    /// silent no-op matches the original behavior and is kept on purpose.
    pub fn update(&self, plan: &LessonPlan) -> PortResult<()> {
        let mut plans = self.list()?;
        for existing in plans.iter_mut() {
            if existing.id == plan.id {
                *existing = plan.clone();
            }
        }
        self.persist(&plans)
    }

    /// Removes the record with the given id; a no-op when absent.
    pub fn delete(&self, id: Uuid) -> PortResult<()> {
        let mut plans = self.list()?;
        plans.retain(|p| p.id != id);
        self.persist(&plans)
    }

    fn persist(&self, plans: &[LessonPlan]) -> PortResult<()> {
        let raw =
            serde_json::to_string(plans).map_err(|e| PortError::Unexpected(e.to_string()))?;
        self.storage.set(PLANS_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;

    fn store() -> PlanStore {
        PlanStore::new(Arc::new(MemoryStore::default()))
    }

    fn fields(topic: &str) -> PlanFields {
        PlanFields {
            topic: topic.to_string(),
            grade_level: "5".to_string(),
            main_concept: "Energy conversion".to_string(),
            materials: "Plants, light".to_string(),
            objectives: "Understand photosynthesis".to_string(),
            outline: "Intro, experiment, discussion".to_string(),
        }
    }

    #[test]
    fn list_is_empty_when_nothing_was_stored() {
        assert!(store().list().unwrap().is_empty());
    }

    #[test]
    fn create_prepends_and_assigns_a_unique_id() {
        let store = store();
        let first = store.create(fields("Photosynthesis"), None).unwrap();
        let second = store.create(fields("Gravity"), None).unwrap();

        assert_ne!(first.id, second.id);
        let plans = store.list().unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].id, second.id);
        assert_eq!(plans[1].id, first.id);
    }

    #[test]
    fn update_replaces_only_the_matching_record() {
        let store = store();
        let first = store.create(fields("Photosynthesis"), None).unwrap();
        let second = store.create(fields("Gravity"), None).unwrap();

        let mut edited = first.clone();
        edited.topic = "Cellular respiration".to_string();
        edited.generated_content = Some("generated prose".to_string());
        store.update(&edited).unwrap();

        let plans = store.list().unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0], second);
        assert_eq!(plans[1], edited);
        assert_eq!(plans[1].created_at, first.created_at);
    }

    #[test]
    fn update_with_unknown_id_is_a_silent_no_op() {
        let store = store();
        let plan = store.create(fields("Photosynthesis"), None).unwrap();

        let mut phantom = plan.clone();
        phantom.id = Uuid::new_v4();
        phantom.topic = "Phantom".to_string();
        store.update(&phantom).unwrap();

        assert_eq!(store.list().unwrap(), vec![plan]);
    }

    #[test]
    fn delete_removes_the_record_and_keeps_order() {
        let store = store();
        let first = store.create(fields("Photosynthesis"), None).unwrap();
        let second = store.create(fields("Gravity"), None).unwrap();
        let third = store.create(fields("Magnetism"), None).unwrap();

        store.delete(second.id).unwrap();

        let plans = store.list().unwrap();
        assert_eq!(plans, vec![third, first]);

        // Deleting an unknown id is a no-op.
        store.delete(Uuid::new_v4()).unwrap();
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn a_record_without_generated_content_round_trips() {
        let store = store();
        let draft = store.create(fields("Photosynthesis"), None).unwrap();
        assert_eq!(draft.generated_content, None);
        assert_eq!(store.list().unwrap()[0], draft);
    }

    #[test]
    fn a_corrupt_collection_surfaces_an_error() {
        let storage = Arc::new(MemoryStore::default());
        storage.set(PLANS_KEY, "not json").unwrap();
        let store = PlanStore::new(storage);
        assert!(matches!(store.list(), Err(PortError::Unexpected(_))));
    }

    #[test]
    fn records_persist_with_camel_case_keys() {
        let storage = Arc::new(MemoryStore::default());
        let store = PlanStore::new(storage.clone());
        store
            .create(fields("Photosynthesis"), Some("prose".to_string()))
            .unwrap();

        let raw = storage.get(PLANS_KEY).unwrap().unwrap();
        assert!(raw.contains("\"gradeLevel\""));
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"generatedContent\""));
    }
}
