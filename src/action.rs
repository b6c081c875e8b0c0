//! Client→agent action events.
//!
//! A component's action definition carries a name plus context entries
//! whose values are bound values. Firing the action resolves each entry
//! against the surface's current data model and stamps the event envelope.
//! Delivering the envelope to the agent is the transport's job, not this
//! layer's.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::surface::Surface;

/// One context entry of an action definition: a key plus a bound value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionContextEntry {
    pub key: String,
    pub value: Value,
}

/// The event envelope sent back to the remote agent when a user triggers a
/// component action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAction {
    pub name: String,
    pub source_component_id: String,
    pub surface_id: String,
    pub timestamp: String,
    pub context: Map<String, Value>,
}

/// Build a [`UserAction`], resolving every context entry against the
/// surface's data model. Entries that resolve to nothing are omitted.
pub fn build_action(
    surface: &Surface,
    surface_id: &str,
    source_component_id: &str,
    name: &str,
    context: &[ActionContextEntry],
) -> UserAction {
    let mut resolved = Map::new();
    for entry in context {
        if let Some(value) = surface.resolve(&entry.value) {
            resolved.insert(entry.key.clone(), value);
        }
    }

    UserAction {
        name: name.to_string(),
        source_component_id: source_component_id.to_string(),
        surface_id: surface_id.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        context: resolved,
    }
}
