//! Output contracts from the counter engine.
//!
//! Outputs carry the text changes for this frame, keyed by the host's element
//! key, and a separate list of semantic events. Adapters apply changes to the
//! page and may forward events.

use serde::{Deserialize, Serialize};

/// New text for one element this frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextChange {
    pub key: String,
    pub text: String,
}

/// Discrete signals emitted while triggering and stepping counters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CounterEvent {
    Started {
        key: String,
        end_value: f64,
        duration_ms: f64,
    },
    Finished {
        key: String,
        text: Option<String>,
    },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    pub changes: Vec<TextChange>,
    pub events: Vec<CounterEvent>,
}

impl Outputs {
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }

    /// Last text written for `key` in this batch.
    pub fn text_for(&self, key: &str) -> Option<&str> {
        self.changes
            .iter()
            .rev()
            .find(|c| c.key == key)
            .map(|c| c.text.as_str())
    }
}
