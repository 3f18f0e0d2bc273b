//! services/planner/src/adapters/plan_llm.rs
//!
//! This module contains the adapter for the plan-generating LLM.
//! It implements the `PlanGenerationService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use lesson_planner_core::{
    domain::PlanFields,
    ports::{PlanGenerationService, PortError, PortResult},
};

//=========================================================================================
// Prompt Construction
//=========================================================================================

/// Builds the fixed prompt for one generation request.
///
/// The nine section names are a contract with the presentation layer, which
/// renders the returned prose as-is; keep them verbatim.
pub fn build_prompt(fields: &PlanFields) -> String {
    format!(
        "Create a detailed lesson plan with the following information:\n\
         Topic: {}\n\
         Grade Level: {}\n\
         Main Concept: {}\n\
         Materials Needed: {}\n\
         Learning Objectives: {}\n\
         Lesson Outline: {}\n\
         \n\
         Please format the lesson plan with the following sections:\n\
         1. Overview\n\
         2. Learning Objectives\n\
         3. Materials and Resources\n\
         4. Introduction (10-15 minutes)\n\
         5. Main Activity (25-30 minutes)\n\
         6. Practice and Application (15-20 minutes)\n\
         7. Assessment and Closure (10 minutes)\n\
         8. Extensions and Modifications\n\
         9. Additional Notes",
        fields.topic,
        fields.grade_level,
        fields.main_concept,
        fields.materials,
        fields.objectives,
        fields.outline,
    )
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `PlanGenerationService` using an
/// OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiPlanAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiPlanAdapter {
    /// Creates a new `OpenAiPlanAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }
}

//=========================================================================================
// `PlanGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl PlanGenerationService for OpenAiPlanAdapter {
    /// Issues one chat-completion request and returns the generated prose.
    async fn generate_plan(&self, fields: &PlanFields) -> PortResult<String> {
        let messages = vec![ChatCompletionRequestUserMessageArgs::default()
            .content(build_prompt(fields))
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?
            .into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error if it occurs, which respects
        // the orphan rule.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        // Extract the text content from the first choice in the response.
        if let Some(choice) = response.choices.into_iter().next() {
            match choice.message.content {
                Some(content) if !content.trim().is_empty() => Ok(content),
                _ => Err(PortError::Unexpected(
                    "Plan generation LLM response contained no text content.".to_string(),
                )),
            }
        } else {
            Err(PortError::Unexpected(
                "Plan generation LLM returned no choices in its response.".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> PlanFields {
        PlanFields {
            topic: "Photosynthesis".to_string(),
            grade_level: "5".to_string(),
            main_concept: "Energy conversion".to_string(),
            materials: "Plants, light".to_string(),
            objectives: "Understand photosynthesis".to_string(),
            outline: "Intro, experiment, discussion".to_string(),
        }
    }

    #[test]
    fn prompt_embeds_every_field_verbatim() {
        let prompt = build_prompt(&fields());
        assert!(prompt.contains("Topic: Photosynthesis"));
        assert!(prompt.contains("Grade Level: 5"));
        assert!(prompt.contains("Main Concept: Energy conversion"));
        assert!(prompt.contains("Materials Needed: Plants, light"));
        assert!(prompt.contains("Learning Objectives: Understand photosynthesis"));
        assert!(prompt.contains("Lesson Outline: Intro, experiment, discussion"));
    }

    #[test]
    fn prompt_requests_the_nine_sections_in_order() {
        let prompt = build_prompt(&fields());
        let sections = [
            "1. Overview",
            "2. Learning Objectives",
            "3. Materials and Resources",
            "4. Introduction (10-15 minutes)",
            "5. Main Activity (25-30 minutes)",
            "6. Practice and Application (15-20 minutes)",
            "7. Assessment and Closure (10 minutes)",
            "8. Extensions and Modifications",
            "9. Additional Notes",
        ];
        let mut last = 0;
        for section in sections {
            let pos = prompt[last..]
                .find(section)
                .unwrap_or_else(|| panic!("missing section: {section}"));
            last += pos;
        }
    }
}
