//! crates/lesson_planner_core/src/form.rs
//!
//! The form controller: owns the editable draft, validates it, and
//! orchestrates the generate / save / load flow against the generation port
//! and the plan store.

use crate::domain::{LessonPlan, PlanFields};
use crate::ports::{PlanGenerationService, PortError};
use crate::store::PlanStore;
use std::sync::Arc;

//=========================================================================================
// Validation and Error Types
//=========================================================================================

/// One required field of the draft. Validation errors are reported per field
/// rather than as a single global failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanField {
    Topic,
    GradeLevel,
    MainConcept,
    Materials,
    Objectives,
    Outline,
}

impl PlanField {
    /// The user-facing message for this field being empty.
    pub fn required_message(self) -> &'static str {
        match self {
            PlanField::Topic => "Topic is required",
            PlanField::GradeLevel => "Grade level is required",
            PlanField::MainConcept => "Main concept is required",
            PlanField::Materials => "Materials are required",
            PlanField::Objectives => "Learning objectives are required",
            PlanField::Outline => "Lesson outline is required",
        }
    }
}

/// Errors surfaced by the form controller to its presentation layer.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// One or more required fields are empty; carries exactly the empty ones.
    #[error("{} required field(s) are empty", .0.len())]
    Validation(Vec<PlanField>),
    /// The generation request failed or returned nothing usable.
    #[error("Failed to generate lesson plan: {0}")]
    Generation(String),
    /// Persistence failed underneath a save.
    #[error(transparent)]
    Store(#[from] PortError),
}

//=========================================================================================
// The Form Controller
//=========================================================================================

/// Owns the draft being edited, the currently loaded plan (if any), and the
/// generated-content buffer. All operations take `&mut self`, so within one
/// session they are sequential; overlapping generations only exist across
/// separate controllers, where the last one to resolve wins its own buffer.
pub struct PlanFormController {
    store: PlanStore,
    generator: Arc<dyn PlanGenerationService>,
    draft: PlanFields,
    loaded: Option<LessonPlan>,
    generated_content: String,
    generating: bool,
}

impl PlanFormController {
    pub fn new(store: PlanStore, generator: Arc<dyn PlanGenerationService>) -> Self {
        Self {
            store,
            generator,
            draft: PlanFields::default(),
            loaded: None,
            generated_content: String::new(),
            generating: false,
        }
    }

    pub fn draft(&self) -> &PlanFields {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut PlanFields {
        &mut self.draft
    }

    /// The loaded plan this form is editing, or `None` for a new draft.
    pub fn loaded_plan(&self) -> Option<&LessonPlan> {
        self.loaded.as_ref()
    }

    pub fn generated_content(&self) -> &str {
        &self.generated_content
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Returns the empty required fields of a draft, in form order.
    pub fn validate(fields: &PlanFields) -> Vec<PlanField> {
        let checks = [
            (PlanField::Topic, &fields.topic),
            (PlanField::GradeLevel, &fields.grade_level),
            (PlanField::MainConcept, &fields.main_concept),
            (PlanField::Materials, &fields.materials),
            (PlanField::Objectives, &fields.objectives),
            (PlanField::Outline, &fields.outline),
        ];
        checks
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Validates the draft and, if it is complete, runs one generation
    /// request. On success the generated-content buffer is replaced; on
    /// failure the draft and any previously generated content stay intact so
    /// the user can resubmit. Never persists anything.
    pub async fn submit(&mut self) -> Result<(), FormError> {
        let missing = Self::validate(&self.draft);
        if !missing.is_empty() {
            return Err(FormError::Validation(missing));
        }

        self.generating = true;
        let result = self.generator.generate_plan(&self.draft).await;
        self.generating = false;

        match result {
            Ok(content) => {
                self.generated_content = content;
                Ok(())
            }
            Err(e) => Err(FormError::Generation(e.to_string())),
        }
    }

    /// Persists the current draft plus generated content: a create for a new
    /// draft, an update when a plan is loaded. The persisted record becomes
    /// the loaded plan either way, so the next save is an update.
    pub fn save(&mut self) -> Result<LessonPlan, FormError> {
        let generated_content = if self.generated_content.is_empty() {
            None
        } else {
            Some(self.generated_content.clone())
        };

        let plan = match &self.loaded {
            Some(current) => {
                let merged = LessonPlan {
                    id: current.id,
                    created_at: current.created_at,
                    topic: self.draft.topic.clone(),
                    grade_level: self.draft.grade_level.clone(),
                    main_concept: self.draft.main_concept.clone(),
                    materials: self.draft.materials.clone(),
                    objectives: self.draft.objectives.clone(),
                    outline: self.draft.outline.clone(),
                    generated_content,
                };
                self.store.update(&merged)?;
                merged
            }
            None => self.store.create(self.draft.clone(), generated_content)?,
        };

        self.loaded = Some(plan.clone());
        Ok(plan)
    }

    /// Rehydrates the form from a stored plan; subsequent saves update it.
    pub fn load(&mut self, plan: LessonPlan) {
        self.draft = plan.fields();
        self.generated_content = plan.generated_content.clone().unwrap_or_default();
        self.loaded = Some(plan);
    }

    /// Clears the form back to an empty, unsaved draft.
    pub fn reset(&mut self) {
        self.draft = PlanFields::default();
        self.generated_content.clear();
        self.loaded = None;
    }
}
