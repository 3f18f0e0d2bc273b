//! crates/lesson_planner_core/src/test_support.rs
//!
//! In-memory doubles for the core ports, shared by the unit tests.

use crate::domain::PlanFields;
use crate::ports::{KeyValueStore, PlanGenerationService, PortError, PortResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A `KeyValueStore` backed by a plain map.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PortResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PortResult<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// A generator that returns a canned response (or failure) and counts how
/// often it was invoked.
pub struct ScriptedGenerator {
    response: Result<String, String>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn ok(content: &str) -> Self {
        Self {
            response: Ok(content.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlanGenerationService for ScriptedGenerator {
    async fn generate_plan(&self, _fields: &PlanFields) -> PortResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .clone()
            .map_err(PortError::Unexpected)
    }
}
