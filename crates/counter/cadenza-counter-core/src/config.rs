//! Counter engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CounterError, Result};
use crate::visibility::{RootMargin, ViewportRule};

/// Default animation length when the element carries no duration override.
pub const DEFAULT_DURATION_MS: f64 = 1500.0;

/// Where a counter starts counting from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartFrom {
    #[default]
    Zero,
    /// Start from the number currently shown in the text (0 when absent).
    Parsed,
}

/// Digit grouping applied to the rendered integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Grouping {
    /// Insert `separator` every three digits ("1,250").
    Thousands { separator: char },
    /// Grouping unavailable: plain integer text.
    Plain,
}

impl Default for Grouping {
    fn default() -> Self {
        Grouping::Thousands { separator: ',' }
    }
}

/// Configuration for the counter engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Visibility rule an element must satisfy before it animates.
    pub trigger: ViewportRule,
    /// Duration used when `data-duration` is absent or unparsable.
    pub default_duration_ms: f64,
    pub start_from: StartFrom,
    pub grouping: Grouping,
    /// Attributes the host reads the overrides from, exposed to it by the adapter.
    pub target_attribute: String,
    pub duration_attribute: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            trigger: ViewportRule {
                threshold: 0.3,
                root_margin_bottom: RootMargin::Percent(-10.0),
            },
            default_duration_ms: DEFAULT_DURATION_MS,
            start_from: StartFrom::Zero,
            grouping: Grouping::default(),
            target_attribute: "data-target".to_string(),
            duration_attribute: "data-duration".to_string(),
        }
    }
}

impl CounterConfig {
    pub fn validate(&self) -> Result<()> {
        self.trigger.validate()?;
        if !self.default_duration_ms.is_finite() || self.default_duration_ms < 0.0 {
            return Err(CounterError::InvalidDuration(self.default_duration_ms));
        }
        Ok(())
    }

    /// Parse a JSON config object; missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: CounterConfig =
            serde_json::from_str(s).map_err(|e| CounterError::Malformed {
                what: "counter config",
                reason: e.to_string(),
            })?;
        cfg.validate()?;
        Ok(cfg)
    }
}
