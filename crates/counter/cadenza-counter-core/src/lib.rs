//! Cadenza Counter Core (engine-agnostic)
//!
//! Animates numeric text such as "1,250+" from zero up to its value the first time
//! the element scrolls into view. The crate never touches a DOM: hosts feed
//! visibility entries and frame timestamps into [`CounterEngine`] and apply the
//! returned [`TextChange`]s to their own elements.

pub mod animation;
pub mod config;
pub mod easing;
pub mod engine;
pub mod error;
pub mod format;
pub mod outputs;
pub mod parse;
pub mod target;
pub mod visibility;

// Re-exports for consumers (adapters)
pub use animation::{CounterAnimation, Frame};
pub use config::{CounterConfig, Grouping, StartFrom};
pub use easing::ease_out_cubic;
pub use engine::CounterEngine;
pub use error::{CounterError, Result};
pub use format::format_count;
pub use outputs::{CounterEvent, Outputs, TextChange};
pub use parse::{parse_number_parts, to_number, NumberParts};
pub use target::{CounterSource, CounterTarget};
pub use visibility::{IntersectionEntry, Rect, RootMargin, ViewportRule};
