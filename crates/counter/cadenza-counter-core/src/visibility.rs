//! Viewport intersection math.
//!
//! Mirrors what an `IntersectionObserver` reports: the root is the viewport grown
//! (or shrunk, for negative values) by a bottom margin, and the ratio is the
//! visible fraction of the target's area.

use serde::{Deserialize, Serialize};

use crate::error::{CounterError, Result};

const RATIO_EPSILON: f64 = 1e-9;

/// Axis-aligned rectangle in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Overlap of two rects, or `None` when they do not touch.
    /// Edge-adjacent rects yield a zero-area overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

/// Bottom root margin: pixels, or percent of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootMargin {
    Px(f64),
    Percent(f64),
}

impl Default for RootMargin {
    fn default() -> Self {
        RootMargin::Px(0.0)
    }
}

impl RootMargin {
    pub fn to_px(self, viewport_height: f64) -> f64 {
        match self {
            RootMargin::Px(px) => px,
            RootMargin::Percent(p) => viewport_height * p / 100.0,
        }
    }

    fn value(self) -> f64 {
        match self {
            RootMargin::Px(v) | RootMargin::Percent(v) => v,
        }
    }
}

/// One visibility report from the host for an observed element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub key: String,
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

/// When an element counts as "visible enough" to trigger.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportRule {
    /// Minimum visible fraction of the element, `0.0..=1.0`.
    pub threshold: f64,
    pub root_margin_bottom: RootMargin,
}

impl Default for ViewportRule {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin_bottom: RootMargin::default(),
        }
    }
}

impl ViewportRule {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(CounterError::InvalidThreshold(self.threshold));
        }
        if !self.root_margin_bottom.value().is_finite() {
            return Err(CounterError::InvalidRootMargin(format!(
                "{:?}",
                self.root_margin_bottom
            )));
        }
        Ok(())
    }

    /// Effective root rect for a viewport of the given size.
    pub fn root(&self, viewport_width: f64, viewport_height: f64) -> Rect {
        let bottom = self.root_margin_bottom.to_px(viewport_height);
        Rect::new(0.0, 0.0, viewport_width, (viewport_height + bottom).max(0.0))
    }

    /// Visible fraction of `target` inside the effective root. Returns `None`
    /// when the target does not touch the root at all.
    pub fn intersection_ratio(
        &self,
        target: &Rect,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Option<f64> {
        let root = self.root(viewport_width, viewport_height);
        let overlap = target.intersection(&root)?;
        let area = target.area();
        if area <= 0.0 {
            // Zero-area targets count as fully visible once they touch the root.
            return Some(1.0);
        }
        Some((overlap.area() / area).clamp(0.0, 1.0))
    }

    /// Does a host-reported entry satisfy this rule?
    pub fn accepts(&self, entry: &IntersectionEntry) -> bool {
        entry.is_intersecting && entry.intersection_ratio + RATIO_EPSILON >= self.threshold
    }

    /// Build an entry from layout geometry, for hosts without an observer.
    pub fn measure(
        &self,
        key: impl Into<String>,
        target: &Rect,
        viewport_width: f64,
        viewport_height: f64,
    ) -> IntersectionEntry {
        let ratio = self.intersection_ratio(target, viewport_width, viewport_height);
        IntersectionEntry {
            key: key.into(),
            is_intersecting: ratio.is_some(),
            intersection_ratio: ratio.unwrap_or(0.0),
        }
    }
}
