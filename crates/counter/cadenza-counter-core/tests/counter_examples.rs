use cadenza_counter_core::{
    ease_out_cubic, parse_number_parts, CounterConfig, CounterEngine, CounterSource,
    CounterTarget, Grouping, IntersectionEntry,
};

fn entry(key: &str, ratio: f64) -> IntersectionEntry {
    IntersectionEntry {
        key: key.to_string(),
        is_intersecting: ratio > 0.0,
        intersection_ratio: ratio,
    }
}

#[test]
fn parse_recovers_prefix_value_suffix() {
    let cases = [
        ("1,250+", "", 1250.0, "+"),
        ("$5", "$", 5.0, ""),
        ("Over 10,000,000 notes", "Over ", 10_000_000.0, " notes"),
        ("#1", "#", 1.0, ""),
        ("98%", "", 98.0, "%"),
    ];
    for (text, prefix, value, suffix) in cases {
        let parts = parse_number_parts(text);
        assert_eq!(parts.prefix, prefix, "{text}");
        assert_eq!(parts.value, Some(value), "{text}");
        assert_eq!(parts.suffix, suffix, "{text}");
    }
}

#[test]
fn missing_digits_default_to_zero() {
    let parts = parse_number_parts("N/A");
    assert_eq!(parts.value, None);
    let src = CounterSource::text("N/A");
    let target = CounterTarget::resolve("x", &src, &CounterConfig::default());
    assert_eq!(target.end_value, 0.0);
}

#[test]
fn easing_endpoints() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
}

#[test]
fn default_counter_runs_1500ms() {
    let mut eng = CounterEngine::default();
    eng.observe("s");
    assert!(eng.on_intersection(&entry("s", 1.0), &CounterSource::text("1,250+"), 0.0));

    let out = eng.update(1499.0);
    assert_ne!(out.text_for("s"), Some("1,250+"));
    assert!(eng.is_animating());

    let out = eng.update(1500.0);
    assert_eq!(out.text_for("s"), Some("1,250+"));
    assert!(!eng.is_animating());
}

#[test]
fn overrides_run_2000ms_to_500() {
    let mut eng = CounterEngine::default();
    eng.observe("r");
    let src = CounterSource::text("0").with_target("500").with_duration("2000");
    eng.on_intersection(&entry("r", 0.4), &src, 1000.0);

    let first = eng.update(1000.0).text_for("r").map(str::to_owned);
    assert_eq!(first.as_deref(), Some("0"));
    assert_eq!(eng.update(2999.0).text_for("r"), Some("499"));
    assert!(eng.is_animating());
    assert_eq!(eng.update(3000.0).text_for("r"), Some("500"));
    assert!(!eng.is_animating());
}

#[test]
fn text_without_digits_is_left_alone() {
    let mut eng = CounterEngine::default();
    eng.observe("label");
    let src = CounterSource::text("Students");
    assert!(eng.on_intersection(&entry("label", 1.0), &src, 0.0));
    let out = eng.update(5000.0);
    assert!(out.changes.is_empty());
    assert!(eng.has_animated("label"));
}

#[test]
fn values_never_decrease_while_counting_up() {
    let mut eng = CounterEngine::new(CounterConfig {
        grouping: Grouping::Plain,
        ..CounterConfig::default()
    });
    eng.observe("n");
    eng.on_intersection(&entry("n", 1.0), &CounterSource::text("9876"), 0.0);
    let mut prev = 0_i64;
    let mut now = 0.0;
    while eng.is_animating() {
        now += 16.0;
        let text = eng.update(now).text_for("n").unwrap().to_string();
        let v: i64 = text.parse().unwrap();
        assert!(v >= prev);
        prev = v;
    }
    assert_eq!(prev, 9876);
}

#[test]
fn second_visibility_report_is_ignored() {
    let mut eng = CounterEngine::default();
    eng.observe("s");
    let src = CounterSource::text("7");
    assert!(eng.on_intersection(&entry("s", 1.0), &src, 0.0));
    assert!(!eng.on_intersection(&entry("s", 1.0), &src, 0.0));
    assert_eq!(eng.running_count(), 1);
}
