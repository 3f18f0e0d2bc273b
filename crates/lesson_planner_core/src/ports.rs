//! crates/lesson_planner_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of specific external implementations like storage
//! media or text-generation APIs.

use crate::domain::PlanFields;
use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., storage, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// String-keyed storage with plain get/set/remove semantics.
///
/// The core persists the whole plan collection under one key and the session
/// flag under another; it does not depend on what medium sits behind the
/// trait.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> PortResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PortResult<()>;
    fn remove(&self, key: &str) -> PortResult<()>;
}

#[async_trait]
pub trait PlanGenerationService: Send + Sync {
    /// Produces formatted lesson-plan prose from the six draft fields.
    ///
    /// One request, one text blob back: no retry, no timeout, no streaming.
    async fn generate_plan(&self, fields: &PlanFields) -> PortResult<String>;
}
