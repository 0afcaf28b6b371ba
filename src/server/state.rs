//! Server state shared across handlers

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::render::Page;

/// Last update payload received per component id
pub type SharedComponentStates = Arc<Mutex<HashMap<String, Value>>>;

/// Shared state for the page server
#[derive(Clone, Default)]
pub struct ServerState {
    /// Page served at `/`; `None` serves the placeholder page
    pub(super) page: Option<Arc<Page>>,
    /// Component states posted to `/update`
    pub(super) component_states: SharedComponentStates,
}

impl ServerState {
    pub fn new(page: Option<Page>) -> Self {
        Self {
            page: page.map(Arc::new),
            component_states: SharedComponentStates::default(),
        }
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_deref()
    }

    /// Store the latest payload for a component, replacing any earlier one
    pub fn record_update(&self, component_id: &str, data: Value) -> Result<(), String> {
        let mut states = self
            .component_states
            .lock()
            .map_err(|e| format!("Failed to lock component states: {}", e))?;
        states.insert(component_id.to_string(), data);
        Ok(())
    }

    /// Last payload posted for a component
    pub fn component_state(&self, component_id: &str) -> Option<Value> {
        self.component_states
            .lock()
            .ok()
            .and_then(|states| states.get(component_id).cloned())
    }
}
