use js_sys::Function;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use cadenza_counter_core::engine::SourceResolver;
use cadenza_counter_core::{
    format_count, parse_number_parts, CounterConfig, CounterEngine, CounterError, CounterSource,
    IntersectionEntry, Outputs,
};

/// Counter engine handle for the page script.
///
/// The host wires an `IntersectionObserver` to `intersect` and drives `update`
/// from `requestAnimationFrame` while `is_animating()` is true, writing each
/// returned change into the element's `textContent`.
#[wasm_bindgen]
pub struct CadenzaCounters {
    core: CounterEngine,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

struct JsSourceResolver {
    f: Function,
}

impl SourceResolver for JsSourceResolver {
    fn source(&mut self, key: &str) -> Result<Option<CounterSource>, CounterError> {
        // Call JS resolver(key) - expect { text, target?, duration? } or a bare string
        let arg = JsValue::from_str(key);
        let val = self
            .f
            .call1(&JsValue::UNDEFINED, &arg)
            .map_err(|e| CounterError::Resolver {
                key: key.to_string(),
                reason: format!("resolver threw {e:?}"),
            })?;
        if jsvalue_is_undefined_or_null(&val) {
            return Ok(None);
        }
        if let Some(text) = val.as_string() {
            return Ok(Some(CounterSource::text(text)));
        }
        swb::from_value::<CounterSource>(val)
            .map(Some)
            .map_err(|e| CounterError::Resolver {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }
}

#[wasm_bindgen]
impl CadenzaCounters {
    /// Create a counter engine. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new CadenzaCounters({ default_duration_ms: 1200 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CadenzaCounters, JsError> {
        console_error_panic_hook::set_once();

        let cfg: CounterConfig = if jsvalue_is_undefined_or_null(&config) {
            CounterConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let core =
            CounterEngine::try_new(cfg).map_err(|e| JsError::new(&format!("config error: {e}")))?;
        Ok(CadenzaCounters { core })
    }

    /// Register an element key. Returns false if already observed or animated.
    #[wasm_bindgen]
    pub fn observe(&mut self, key: String) -> bool {
        self.core.observe(&key)
    }

    #[wasm_bindgen]
    pub fn unobserve(&mut self, key: String) -> bool {
        self.core.unobserve(&key)
    }

    #[wasm_bindgen(js_name = has_animated)]
    pub fn has_animated(&self, key: String) -> bool {
        self.core.has_animated(&key)
    }

    #[wasm_bindgen(js_name = is_animating)]
    pub fn is_animating(&self) -> bool {
        self.core.is_animating()
    }

    /// Attribute the host reads the end-value override from (`data-target` by default).
    #[wasm_bindgen(js_name = target_attribute)]
    pub fn target_attribute(&self) -> String {
        self.core.config().target_attribute.clone()
    }

    /// Attribute the host reads the duration override from (`data-duration` by default).
    #[wasm_bindgen(js_name = duration_attribute)]
    pub fn duration_attribute(&self) -> String {
        self.core.config().duration_attribute.clone()
    }

    /// Feed observer entries `[{ key, is_intersecting, intersection_ratio }]`.
    /// The resolver is called as `resolver(key) -> { text, target?, duration? } | string | null`
    /// for each element that starts, reading `target`/`duration` from the attributes
    /// named by `target_attribute()`/`duration_attribute()`. A `null` result drops the
    /// element. A throwing resolver or an unreadable result leaves it observed and logs
    /// a warning. Returns the started keys.
    #[wasm_bindgen]
    pub fn intersect(
        &mut self,
        entries: JsValue,
        resolver: Function,
        now_ms: f64,
    ) -> Result<JsValue, JsError> {
        let entries: Vec<IntersectionEntry> = swb::from_value(entries)
            .map_err(|e| JsError::new(&format!("intersect entries error: {e}")))?;
        let mut js_resolver = JsSourceResolver { f: resolver };
        let started = self.core.on_intersections(&entries, &mut js_resolver, now_ms);
        swb::to_value(&started).map_err(|e| JsError::new(&format!("intersect result error: {e}")))
    }

    /// Single-entry variant with the element source passed inline.
    #[wasm_bindgen]
    pub fn trigger(
        &mut self,
        entry: JsValue,
        source: JsValue,
        now_ms: f64,
    ) -> Result<bool, JsError> {
        let entry: IntersectionEntry =
            swb::from_value(entry).map_err(|e| JsError::new(&format!("entry error: {e}")))?;
        let source: CounterSource =
            swb::from_value(source).map_err(|e| JsError::new(&format!("source error: {e}")))?;
        Ok(self.core.on_intersection(&entry, &source, now_ms))
    }

    /// Step all running counters to `now_ms` (a `requestAnimationFrame` timestamp).
    /// Returns Outputs JSON `{ changes: [{ key, text }], events: [...] }`.
    #[wasm_bindgen]
    pub fn update(&mut self, now_ms: f64) -> Result<JsValue, JsError> {
        let out: &Outputs = self.core.update(now_ms);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.core.reset();
    }
}

/// Split counter text into `{ prefix, value, suffix }`.
#[wasm_bindgen(js_name = parse_counter_text)]
pub fn parse_counter_text(text: &str) -> Result<JsValue, JsError> {
    swb::to_value(&parse_number_parts(text))
        .map_err(|e| JsError::new(&format!("parse_counter_text error: {e}")))
}

/// Render an integer with the default thousands grouping.
#[wasm_bindgen(js_name = format_counter_value)]
pub fn format_counter_value(value: f64) -> String {
    format_count(value, CounterConfig::default().grouping)
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
