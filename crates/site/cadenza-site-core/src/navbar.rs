//! Navbar background/shadow as a function of scroll offset.

use serde::Serialize;

const NAV_BG_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";
const NAV_BG_TOP: &str = "rgba(255, 255, 255, 0.95)";
const NAV_SHADOW_SCROLLED: &str = "0 2px 20px rgba(0, 0, 0, 0.1)";
const NAV_SHADOW_TOP: &str = "none";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

/// Style for the navbar at `scroll_y`; solid once strictly past `threshold`.
pub fn navbar_style(scroll_y: f64, threshold: f64) -> NavbarStyle {
    if scroll_y > threshold {
        NavbarStyle {
            background: NAV_BG_SCROLLED,
            box_shadow: NAV_SHADOW_SCROLLED,
        }
    } else {
        NavbarStyle {
            background: NAV_BG_TOP,
            box_shadow: NAV_SHADOW_TOP,
        }
    }
}
