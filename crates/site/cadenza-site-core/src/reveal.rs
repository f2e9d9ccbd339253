//! Program card fade-in on scroll, with a per-card stagger.

use cadenza_counter_core::{IntersectionEntry, ViewportRule};
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStyle {
    pub opacity: String,
    pub transform: String,
    /// Only set on the initial style; later styles keep the existing transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
}

/// Seconds as CSS text, rounded to whole milliseconds ("0.3s", not "0.30000000000000004s").
fn css_seconds(ms: f64) -> String {
    format!("{}s", ms.round() / 1000.0)
}

#[derive(Clone, Debug)]
pub struct CardReveal {
    rule: ViewportRule,
    offset_y_px: f64,
    duration_ms: f64,
    stagger_ms: f64,
}

impl CardReveal {
    pub fn new(cfg: &SiteConfig) -> Self {
        Self {
            rule: cfg.card_trigger,
            offset_y_px: cfg.card_offset_y_px,
            duration_ms: cfg.card_duration_ms,
            stagger_ms: cfg.card_stagger_ms,
        }
    }

    pub fn rule(&self) -> &ViewportRule {
        &self.rule
    }

    /// Hidden style applied to the card at `index` before it is observed.
    pub fn initial_style(&self, index: usize) -> CardStyle {
        let delay_ms = index as f64 * self.stagger_ms;
        CardStyle {
            opacity: "0".to_string(),
            transform: format!("translateY({}px)", self.offset_y_px),
            transition: Some(format!(
                "all {} ease {}",
                css_seconds(self.duration_ms),
                css_seconds(delay_ms)
            )),
        }
    }

    pub fn revealed_style(&self) -> CardStyle {
        CardStyle {
            opacity: "1".to_string(),
            transform: "translateY(0)".to_string(),
            transition: None,
        }
    }

    /// Revealed style when `entry` satisfies the card trigger rule.
    /// Cards are not tracked; a repeat report yields the same style again.
    pub fn on_intersection(&self, entry: &IntersectionEntry) -> Option<CardStyle> {
        self.rule.accepts(entry).then(|| self.revealed_style())
    }

    pub fn hover_style(&self, hovered: bool) -> CardStyle {
        let transform = if hovered {
            "translateY(-10px) scale(1.02)"
        } else {
            "translateY(0) scale(1)"
        };
        CardStyle {
            opacity: "1".to_string(),
            transform: transform.to_string(),
            transition: None,
        }
    }
}
