//! Cadenza Site Core
//!
//! The page's small interactive behaviors as host-agnostic state machines.
//! Each returns the strings a host should copy onto the DOM (styles, labels,
//! URIs); timers are driven by host timestamps in milliseconds.

pub mod anchors;
pub mod config;
pub mod effects;
pub mod error;
pub mod form;
pub mod mailto;
pub mod navbar;
pub mod reveal;
pub mod slider;

pub use anchors::anchor_target;
pub use config::SiteConfig;
pub use effects::{parallax_transform, Debouncer, MobileMenu, Typewriter};
pub use error::{Result, SiteError};
pub use form::{ButtonState, FormFeedback, FormPhase, FormUpdate};
pub use mailto::{compose_mailto, ContactForm};
pub use navbar::{navbar_style, NavbarStyle};
pub use reveal::{CardReveal, CardStyle};
pub use slider::{SlideView, TestimonialSlider};
