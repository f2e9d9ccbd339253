//! Submit-button feedback for the contact form.
//!
//! Idle -> Sending -> Sent -> Idle, driven by host timestamps. The form
//! contents are reset when the button returns to Idle.

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

const LABEL_SENDING: &str = "Sending...";
const LABEL_SENT: &str = "Message Sent!";
const BG_LOADING: &str = "rgba(255, 255, 255, 0.3)";
const BG_SUCCESS: &str = "rgba(76, 175, 80, 0.3)";
const BG_DEFAULT: &str = "rgba(255, 255, 255, 0.2)";

/// What the submit button should show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    pub label: String,
    pub background: String,
    pub disabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum FormPhase {
    Idle,
    Sending { until_ms: f64 },
    Sent { until_ms: f64 },
}

/// Result of advancing the feedback timer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormUpdate {
    pub button: ButtonState,
    /// Host should clear the form fields.
    pub reset_form: bool,
}

#[derive(Clone, Debug)]
pub struct FormFeedback {
    original_label: String,
    /// Inline background before submission; empty when none was set.
    original_background: String,
    submit_delay_ms: f64,
    success_duration_ms: f64,
    phase: FormPhase,
}

impl FormFeedback {
    pub fn new(
        original_label: impl Into<String>,
        original_background: impl Into<String>,
        cfg: &SiteConfig,
    ) -> Self {
        Self {
            original_label: original_label.into(),
            original_background: original_background.into(),
            submit_delay_ms: cfg.form_submit_delay_ms,
            success_duration_ms: cfg.form_success_duration_ms,
            phase: FormPhase::Idle,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, FormPhase::Idle)
    }

    /// Begin the feedback sequence. Ignored unless idle.
    pub fn submit(&mut self, now_ms: f64) -> Option<ButtonState> {
        if !self.is_idle() {
            log::debug!("form: submit ignored while {:?}", self.phase);
            return None;
        }
        self.phase = FormPhase::Sending {
            until_ms: now_ms + self.submit_delay_ms,
        };
        Some(ButtonState {
            label: LABEL_SENDING.to_string(),
            background: BG_LOADING.to_string(),
            disabled: true,
        })
    }

    /// Apply every transition due by `now_ms`, returning the latest button state.
    pub fn advance(&mut self, now_ms: f64) -> Option<FormUpdate> {
        let mut update = None;
        loop {
            match self.phase {
                FormPhase::Sending { until_ms } if now_ms >= until_ms => {
                    self.phase = FormPhase::Sent {
                        until_ms: until_ms + self.success_duration_ms,
                    };
                    update = Some(FormUpdate {
                        button: ButtonState {
                            label: LABEL_SENT.to_string(),
                            background: BG_SUCCESS.to_string(),
                            disabled: true,
                        },
                        reset_form: false,
                    });
                }
                FormPhase::Sent { until_ms } if now_ms >= until_ms => {
                    self.phase = FormPhase::Idle;
                    update = Some(FormUpdate {
                        button: self.restored(),
                        reset_form: true,
                    });
                }
                _ => return update,
            }
        }
    }

    /// Timestamp of the next pending transition, for host timer scheduling.
    pub fn next_deadline(&self) -> Option<f64> {
        match self.phase {
            FormPhase::Idle => None,
            FormPhase::Sending { until_ms } | FormPhase::Sent { until_ms } => Some(until_ms),
        }
    }

    fn restored(&self) -> ButtonState {
        let background = if self.original_background.is_empty() {
            BG_DEFAULT.to_string()
        } else {
            self.original_background.clone()
        };
        ButtonState {
            label: self.original_label.clone(),
            background,
            disabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback() -> FormFeedback {
        FormFeedback::new("Send Message", "", &SiteConfig::default())
    }

    #[test]
    fn full_sequence() {
        let mut f = feedback();
        let sending = f.submit(1000.0).unwrap();
        assert_eq!(sending.label, "Sending...");
        assert!(sending.disabled);

        assert_eq!(f.advance(2499.0), None);
        let sent = f.advance(2500.0).unwrap();
        assert_eq!(sent.button.label, "Message Sent!");
        assert_eq!(sent.button.background, BG_SUCCESS);
        assert!(!sent.reset_form);
        assert_eq!(f.next_deadline(), Some(4500.0));

        let done = f.advance(4500.0).unwrap();
        assert_eq!(done.button.label, "Send Message");
        assert_eq!(done.button.background, BG_DEFAULT);
        assert!(!done.button.disabled);
        assert!(done.reset_form);
        assert!(f.is_idle());
    }

    #[test]
    fn late_advance_skips_to_idle() {
        let mut f = FormFeedback::new("Go", "navy", &SiteConfig::default());
        f.submit(0.0);
        let update = f.advance(10_000.0).unwrap();
        assert!(update.reset_form);
        assert_eq!(update.button.background, "navy");
    }

    #[test]
    fn double_submit_is_ignored() {
        let mut f = feedback();
        assert!(f.submit(0.0).is_some());
        assert!(f.submit(100.0).is_none());
        assert_eq!(f.phase(), FormPhase::Sending { until_ms: 1500.0 });
    }
}
