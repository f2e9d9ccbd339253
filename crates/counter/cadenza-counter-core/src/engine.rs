//! Engine: owns the observed/seen sets and every running counter.
//!
//! Hosts call, in order:
//! - `observe` for each counter element on the page,
//! - `on_intersection(s)` from their visibility callback,
//! - `update(now_ms)` once per animation frame while `is_animating()`.

use hashbrown::HashSet;

use crate::animation::CounterAnimation;
use crate::config::CounterConfig;
use crate::error::Result;
use crate::outputs::{CounterEvent, Outputs, TextChange};
use crate::target::{CounterSource, CounterTarget};
use crate::visibility::IntersectionEntry;

/// Host-side lookup of an element's current text and attributes.
///
/// `Ok(None)` means the element is gone from the page. `Err` is a failed
/// lookup; the element keeps waiting for a later report.
pub trait SourceResolver {
    fn source(&mut self, key: &str) -> Result<Option<CounterSource>>;
}

impl<F> SourceResolver for F
where
    F: FnMut(&str) -> Result<Option<CounterSource>>,
{
    fn source(&mut self, key: &str) -> Result<Option<CounterSource>> {
        self(key)
    }
}

#[derive(Debug)]
pub struct CounterEngine {
    cfg: CounterConfig,
    /// Elements still waiting for their first qualifying visibility report.
    observed: HashSet<String>,
    /// Elements that have already been animated; never re-triggered.
    seen: HashSet<String>,
    running: Vec<CounterAnimation>,
    /// Events raised by intersection calls, flushed by the next update.
    pending_events: Vec<CounterEvent>,
    // Per-frame outputs
    outputs: Outputs,
}

impl Default for CounterEngine {
    fn default() -> Self {
        Self::new(CounterConfig::default())
    }
}

impl CounterEngine {
    pub fn new(cfg: CounterConfig) -> Self {
        Self {
            cfg,
            observed: HashSet::new(),
            seen: HashSet::new(),
            running: Vec::new(),
            pending_events: Vec::new(),
            outputs: Outputs::default(),
        }
    }

    /// Create an engine after validating `cfg`.
    pub fn try_new(cfg: CounterConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::new(cfg))
    }

    pub fn config(&self) -> &CounterConfig {
        &self.cfg
    }

    /// Start watching an element. Returns false if it is already watched or
    /// has already animated.
    pub fn observe(&mut self, key: &str) -> bool {
        if self.seen.contains(key) {
            return false;
        }
        self.observed.insert(key.to_string())
    }

    pub fn unobserve(&mut self, key: &str) -> bool {
        self.observed.remove(key)
    }

    pub fn is_observed(&self, key: &str) -> bool {
        self.observed.contains(key)
    }

    pub fn has_animated(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    /// Handle one visibility report. Starts the counter and returns true the
    /// first time an observed element satisfies the trigger rule.
    pub fn on_intersection(
        &mut self,
        entry: &IntersectionEntry,
        source: &CounterSource,
        now_ms: f64,
    ) -> bool {
        if !self.should_trigger(entry) {
            return false;
        }
        self.start(&entry.key, source, now_ms);
        true
    }

    /// Handle a batch of reports, reading element sources lazily through the
    /// host resolver. Returns the keys that started animating.
    pub fn on_intersections(
        &mut self,
        entries: &[IntersectionEntry],
        resolver: &mut dyn SourceResolver,
        now_ms: f64,
    ) -> Vec<String> {
        let mut started = Vec::new();
        for entry in entries {
            if !self.should_trigger(entry) {
                continue;
            }
            let source = match resolver.source(&entry.key) {
                Ok(Some(source)) => source,
                Ok(None) => {
                    log::debug!("counter {}: element gone, unobserving", entry.key);
                    self.observed.remove(&entry.key);
                    continue;
                }
                Err(err) => {
                    log::warn!("counter {}: {err}", entry.key);
                    continue;
                }
            };
            self.start(&entry.key, &source, now_ms);
            started.push(entry.key.clone());
        }
        started
    }

    fn should_trigger(&self, entry: &IntersectionEntry) -> bool {
        if self.seen.contains(&entry.key) {
            log::trace!("counter {}: already animated, ignoring", entry.key);
            return false;
        }
        if !self.observed.contains(&entry.key) {
            log::trace!("counter {}: not observed, ignoring", entry.key);
            return false;
        }
        self.cfg.trigger.accepts(entry)
    }

    fn start(&mut self, key: &str, source: &CounterSource, now_ms: f64) {
        self.observed.remove(key);
        self.seen.insert(key.to_string());

        let target = CounterTarget::resolve(key, source, &self.cfg);
        log::debug!(
            "counter {key}: start {} -> {} over {}ms",
            target.start_value,
            target.end_value,
            target.duration_ms
        );
        self.pending_events.push(CounterEvent::Started {
            key: key.to_string(),
            end_value: target.end_value,
            duration_ms: target.duration_ms,
        });
        self.running
            .push(CounterAnimation::new(target, now_ms, self.cfg.grouping));
    }

    /// Step every running counter to `now_ms`. Finished counters are dropped.
    ///
    /// The returned outputs also include `Started` events queued by
    /// intersection calls since the previous update.
    pub fn update(&mut self, now_ms: f64) -> &Outputs {
        self.outputs.clear();
        self.outputs.events.append(&mut self.pending_events);
        for anim in self.running.iter_mut() {
            let frame = anim.step(now_ms);
            let key = &anim.target().key;
            if let Some(text) = frame.text.clone() {
                self.outputs.changes.push(TextChange {
                    key: key.clone(),
                    text,
                });
            }
            if frame.done {
                log::debug!("counter {key}: finished");
                self.outputs.events.push(CounterEvent::Finished {
                    key: key.clone(),
                    text: frame.text,
                });
            }
        }
        self.running.retain(|a| !a.is_done());
        &self.outputs
    }

    /// Outputs of the most recent update.
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Forget every element, seen or running.
    pub fn reset(&mut self) {
        self.observed.clear();
        self.seen.clear();
        self.running.clear();
        self.pending_events.clear();
        self.outputs.clear();
    }
}
