//! Site behavior configuration.

use cadenza_counter_core::{RootMargin, ViewportRule};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Timings, thresholds and addresses used by the page behaviors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scroll offset (px) past which the navbar switches to its solid style.
    pub nav_scroll_threshold: f64,

    /// Delay before the submit button reports success.
    pub form_submit_delay_ms: f64,
    /// How long the success state stays before the form resets.
    pub form_success_duration_ms: f64,
    /// Recipient of the contact form's mailto link.
    pub contact_email: String,

    pub card_offset_y_px: f64,
    pub card_duration_ms: f64,
    pub card_stagger_ms: f64,
    pub card_trigger: ViewportRule,

    pub parallax_rate: f64,
    pub type_speed_ms: f64,
    pub testimonial_rotate_ms: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_scroll_threshold: 100.0,
            form_submit_delay_ms: 1500.0,
            form_success_duration_ms: 2000.0,
            contact_email: "dianeboxill.pianolessons@gmail.com".to_string(),
            card_offset_y_px: 30.0,
            card_duration_ms: 600.0,
            card_stagger_ms: 100.0,
            card_trigger: ViewportRule {
                threshold: 0.1,
                root_margin_bottom: RootMargin::Px(-50.0),
            },
            parallax_rate: -0.5,
            type_speed_ms: 100.0,
            testimonial_rotate_ms: 5000.0,
        }
    }
}

fn check_timing(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SiteError::InvalidTiming { field, value })
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SiteError::NotFinite { field, value })
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<()> {
        check_timing("form_submit_delay_ms", self.form_submit_delay_ms)?;
        check_timing("form_success_duration_ms", self.form_success_duration_ms)?;
        check_timing("card_duration_ms", self.card_duration_ms)?;
        check_timing("card_stagger_ms", self.card_stagger_ms)?;
        check_timing("type_speed_ms", self.type_speed_ms)?;
        check_timing("testimonial_rotate_ms", self.testimonial_rotate_ms)?;
        if self.testimonial_rotate_ms == 0.0 {
            return Err(SiteError::InvalidTiming {
                field: "testimonial_rotate_ms",
                value: 0.0,
            });
        }
        check_finite("nav_scroll_threshold", self.nav_scroll_threshold)?;
        check_finite("parallax_rate", self.parallax_rate)?;
        let email = self.contact_email.trim();
        if email.is_empty() || !email.contains('@') || email.contains(char::is_whitespace) {
            return Err(SiteError::InvalidEmail(self.contact_email.clone()));
        }
        self.card_trigger.validate()?;
        Ok(())
    }

    /// Parse a JSON config object; missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: SiteConfig = serde_json::from_str(s).map_err(|e| SiteError::Malformed {
            what: "site config",
            reason: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }
}
