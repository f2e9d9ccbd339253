//! Resolving a page element into an immutable counter target.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{CounterConfig, StartFrom};
use crate::parse::{parse_number_parts, to_number};

/// What the page markup supplies for one counter element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CounterSource {
    /// Text content at the time the element became visible.
    pub text: String,
    /// Raw `data-target` attribute, if present.
    #[serde(default, deserialize_with = "attribute_text")]
    pub target: Option<String>,
    /// Raw `data-duration` attribute (milliseconds), if present.
    #[serde(default, deserialize_with = "attribute_text")]
    pub duration: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAttribute {
    Text(String),
    Number(f64),
}

/// Hosts may pass attribute values already converted to numbers.
fn attribute_text<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawAttribute>::deserialize(de)?.map(|raw| match raw {
        RawAttribute::Text(s) => s,
        RawAttribute::Number(n) => n.to_string(),
    }))
}

impl CounterSource {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }
}

/// One element's animation parameters, fixed at trigger time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CounterTarget {
    pub key: String,
    pub prefix: String,
    pub suffix: String,
    pub start_value: f64,
    pub end_value: f64,
    pub duration_ms: f64,
    /// False when neither the text nor an override yielded a number; the
    /// element's text is then left as authored.
    pub renders: bool,
}

impl CounterTarget {
    /// Resolve end value (override -> parsed text -> 0) and duration
    /// (override -> configured default).
    pub fn resolve(key: impl Into<String>, source: &CounterSource, cfg: &CounterConfig) -> Self {
        let key = key.into();
        let parts = parse_number_parts(&source.text);

        let override_target = source.target.as_deref().and_then(|raw| {
            let n = to_number(raw);
            if n.is_none() {
                log::warn!(
                    "counter {key}: ignoring unparsable {}={raw:?}",
                    cfg.target_attribute
                );
            }
            n
        });
        let end_value = override_target.or(parts.value).unwrap_or(0.0);

        let duration_ms = source
            .duration
            .as_deref()
            .and_then(|raw| {
                let n = to_number(raw);
                if n.is_none() {
                    log::warn!(
                        "counter {key}: ignoring unparsable {}={raw:?}",
                        cfg.duration_attribute
                    );
                }
                n
            })
            .unwrap_or(cfg.default_duration_ms);

        let start_value = match cfg.start_from {
            StartFrom::Zero => 0.0,
            StartFrom::Parsed => parts.value.unwrap_or(0.0),
        };

        Self {
            key,
            prefix: parts.prefix,
            suffix: parts.suffix,
            start_value,
            end_value,
            duration_ms,
            renders: override_target.is_some() || parts.value.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_only() {
        let src = CounterSource::text("1,250+");
        let t = CounterTarget::resolve("s1", &src, &CounterConfig::default());
        assert_eq!(t.prefix, "");
        assert_eq!(t.suffix, "+");
        assert_eq!(t.start_value, 0.0);
        assert_eq!(t.end_value, 1250.0);
        assert_eq!(t.duration_ms, 1500.0);
        assert!(t.renders);
    }

    #[test]
    fn overrides_win() {
        let src = CounterSource::text("0").with_target("500").with_duration("2000");
        let t = CounterTarget::resolve("s2", &src, &CounterConfig::default());
        assert_eq!(t.end_value, 500.0);
        assert_eq!(t.duration_ms, 2000.0);
    }

    #[test]
    fn numeric_attribute_values_are_accepted() {
        let src: CounterSource =
            serde_json::from_str(r#"{ "text": "0", "target": 500, "duration": 2000.5 }"#).unwrap();
        assert_eq!(src.target.as_deref(), Some("500"));
        assert_eq!(src.duration.as_deref(), Some("2000.5"));
        let t = CounterTarget::resolve("s6", &src, &CounterConfig::default());
        assert_eq!(t.end_value, 500.0);

        let src: CounterSource = serde_json::from_str(r#"{ "text": "7", "target": null }"#).unwrap();
        assert_eq!(src.target, None);
        assert!(serde_json::from_str::<CounterSource>(r#"{ "text": "7", "target": true }"#).is_err());
    }

    #[test]
    fn unparsable_override_falls_back_to_text_then_zero() {
        let cfg = CounterConfig::default();
        let src = CounterSource::text("98%").with_target("lots").with_duration("slow");
        let t = CounterTarget::resolve("s3", &src, &cfg);
        assert_eq!(t.end_value, 98.0);
        assert_eq!(t.duration_ms, 1500.0);

        let src = CounterSource::text("Students").with_target("lots");
        let t = CounterTarget::resolve("s4", &src, &cfg);
        assert_eq!(t.end_value, 0.0);
        assert!(!t.renders);
    }

    #[test]
    fn override_without_digits_still_renders() {
        let src = CounterSource::text("Students").with_target("1,000");
        let t = CounterTarget::resolve("s5", &src, &CounterConfig::default());
        assert_eq!(t.end_value, 1000.0);
        assert_eq!(t.prefix, "");
        assert_eq!(t.suffix, "");
        assert!(t.renders);
    }

    #[test]
    fn start_from_parsed() {
        let cfg = CounterConfig {
            start_from: StartFrom::Parsed,
            ..CounterConfig::default()
        };
        let src = CounterSource::text("40 years").with_target("50");
        let t = CounterTarget::resolve("s6", &src, &cfg);
        assert_eq!(t.start_value, 40.0);
        assert_eq!(t.end_value, 50.0);
        assert_eq!(t.suffix, " years");
    }
}
