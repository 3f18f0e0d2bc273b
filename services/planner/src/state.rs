//! services/planner/src/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use lesson_planner_core::ports::{KeyValueStore, PlanGenerationService};
use std::sync::Arc;

/// The shared application state, created once at startup and handed to the
/// front-end. The core components (store, form controller, session gate) are
/// built from the ports carried here.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub storage: Arc<dyn KeyValueStore>,
    pub generator: Arc<dyn PlanGenerationService>,
}
