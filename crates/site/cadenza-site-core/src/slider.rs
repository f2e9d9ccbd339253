//! Auto-rotating testimonial slider with dot navigation.

use serde::{Deserialize, Serialize};

/// What the host should render after a slide change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideView {
    pub index: usize,
    /// Track transform, e.g. `translateX(-200%)`.
    pub transform: String,
    /// Dot to mark active; `None` when there are fewer dots than slides.
    pub active_dot: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct TestimonialSlider {
    slides: usize,
    dots: usize,
    index: usize,
    rotate_ms: f64,
    /// Next auto-rotation time; `None` while paused.
    next_rotation_ms: Option<f64>,
}

impl TestimonialSlider {
    /// `active` is the slide marked active in the markup, if any.
    pub fn new(
        slides: usize,
        dots: usize,
        active: Option<usize>,
        rotate_ms: f64,
        now_ms: f64,
    ) -> Self {
        let index = active.filter(|&i| i < slides).unwrap_or(0);
        Self {
            slides,
            dots,
            index,
            rotate_ms,
            next_rotation_ms: Some(now_ms + rotate_ms),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.next_rotation_ms.is_none()
    }

    /// Show slide `index`, wrapping in both directions. No-op without slides.
    pub fn show(&mut self, index: isize) -> Option<SlideView> {
        if self.slides == 0 {
            return None;
        }
        self.index = index.rem_euclid(self.slides as isize) as usize;
        Some(self.view())
    }

    pub fn next(&mut self) -> Option<SlideView> {
        self.show(self.index as isize + 1)
    }

    pub fn view(&self) -> SlideView {
        let offset = -(self.index as i64) * 100;
        SlideView {
            index: self.index,
            transform: format!("translateX({offset}%)"),
            active_dot: (self.index < self.dots).then_some(self.index),
        }
    }

    /// Dot click.
    pub fn select(&mut self, dot: usize) -> Option<SlideView> {
        self.show(dot as isize)
    }

    /// Pointer entered the slider: stop rotating.
    pub fn pause(&mut self) {
        self.next_rotation_ms = None;
    }

    /// Pointer left: restart the interval from now.
    pub fn resume(&mut self, now_ms: f64) {
        self.next_rotation_ms = Some(now_ms + self.rotate_ms);
    }

    /// Rotate if the interval elapsed. At most one slide per call.
    pub fn tick(&mut self, now_ms: f64) -> Option<SlideView> {
        let due = self.next_rotation_ms?;
        if now_ms < due {
            return None;
        }
        let mut next_due = due + self.rotate_ms;
        if next_due <= now_ms {
            next_due = now_ms + self.rotate_ms;
        }
        self.next_rotation_ms = Some(next_due);
        self.next()
    }
}
