//! A single running counter: steps once per host frame until complete.

use serde::{Deserialize, Serialize};

use crate::config::Grouping;
use crate::easing::{ease_out_cubic, elapsed_ratio, lerp};
use crate::format::format_count;
use crate::target::CounterTarget;

/// Result of stepping an animation at one timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Elapsed ratio `t` in `[0, 1]`.
    pub ratio: f64,
    /// Eased, unfloored value.
    pub value: f64,
    /// Text to display, `None` for targets that do not render.
    pub text: Option<String>,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: CounterTarget,
    started_at_ms: f64,
    grouping: Grouping,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget, started_at_ms: f64, grouping: Grouping) -> Self {
        Self {
            target,
            started_at_ms,
            grouping,
            done: false,
        }
    }

    pub fn target(&self) -> &CounterTarget {
        &self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Value shown at ratio `t` before flooring.
    pub fn value_at(&self, t: f64) -> f64 {
        lerp(self.target.start_value, self.target.end_value, ease_out_cubic(t))
    }

    /// Render `value` between the target's prefix and suffix.
    pub fn render(&self, value: f64) -> String {
        format!(
            "{}{}{}",
            self.target.prefix,
            format_count(value, self.grouping),
            self.target.suffix
        )
    }

    /// Advance to host time `now_ms`. Once a frame reports `done`, later calls
    /// keep returning the final frame.
    pub fn step(&mut self, now_ms: f64) -> Frame {
        let t = if self.done {
            1.0
        } else {
            elapsed_ratio(now_ms - self.started_at_ms, self.target.duration_ms)
        };
        // Exact end value at completion; the eased curve can land a ulp short.
        let value = if t >= 1.0 {
            self.target.end_value
        } else {
            self.value_at(t)
        };
        self.done = t >= 1.0;
        Frame {
            ratio: t,
            value,
            text: self.target.renders.then(|| self.render(value)),
            done: self.done,
        }
    }
}
