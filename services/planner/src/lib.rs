//! services/planner/src/lib.rs
//!
//! Adapters and wiring for the lesson planner: configuration, the
//! OpenAI-compatible generation adapter, the file-backed storage adapter,
//! and the shared application state.

pub mod adapters;
pub mod config;
pub mod error;
pub mod state;
