//! crates/lesson_planner_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage backend; the serde derives
//! exist because the plan collection persists as a single JSON list with
//! camelCase keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted lesson plan record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlan {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub topic: String,
    pub grade_level: String,
    pub main_concept: String,
    pub materials: String,
    pub objectives: String,
    pub outline: String,
    /// Present only after a successful generation. A record without it is a
    /// draft that was saved but never generated, and is still valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_content: Option<String>,
}

/// The six user-supplied text fields describing a lesson: the editable draft
/// and the input to plan generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanFields {
    pub topic: String,
    pub grade_level: String,
    pub main_concept: String,
    pub materials: String,
    pub objectives: String,
    pub outline: String,
}

impl LessonPlan {
    /// The field values of this record, as an editable draft.
    pub fn fields(&self) -> PlanFields {
        PlanFields {
            topic: self.topic.clone(),
            grade_level: self.grade_level.clone(),
            main_concept: self.main_concept.clone(),
            materials: self.materials.clone(),
            objectives: self.objectives.clone(),
            outline: self.outline.clone(),
        }
    }
}
