use std::collections::HashMap;

use cadenza_counter_core::{
    CounterConfig, CounterEngine, CounterEvent, CounterSource, Rect, ViewportRule,
};
use cadenza_test_fixtures::{pages, CounterFixture, PageFixture};

const FRAME_MS: f64 = 1000.0 / 60.0;

/// Minimal page model: element text plus layout, with a scroll offset.
struct Page {
    fixture: PageFixture,
    texts: HashMap<String, String>,
    scroll_y: f64,
}

impl Page {
    fn load(name: &str) -> Self {
        let fixture = pages::page(name).expect("page fixture");
        let texts = fixture
            .counters
            .iter()
            .map(|c| (c.key.clone(), c.text.clone()))
            .collect();
        Self {
            fixture,
            texts,
            scroll_y: 0.0,
        }
    }

    fn source(&self, c: &CounterFixture) -> CounterSource {
        CounterSource {
            text: self.texts[&c.key].clone(),
            target: c.target.clone(),
            duration: c.duration.clone(),
        }
    }

    fn rect(&self, c: &CounterFixture) -> Rect {
        Rect::new(c.rect.x, c.rect.y - self.scroll_y, c.rect.width, c.rect.height)
    }

    /// Report visibility of every counter, as an observer callback would.
    fn report(&self, eng: &mut CounterEngine, rule: &ViewportRule, now: f64) -> Vec<String> {
        let vp = &self.fixture.viewport;
        let mut started = Vec::new();
        for c in &self.fixture.counters {
            let entry = rule.measure(c.key.clone(), &self.rect(c), vp.width, vp.height);
            if eng.on_intersection(&entry, &self.source(c), now) {
                started.push(c.key.clone());
            }
        }
        started
    }

    /// Run frames until the engine is idle, applying text changes.
    fn run_frames(&mut self, eng: &mut CounterEngine, mut now: f64) -> f64 {
        while eng.is_animating() {
            now += FRAME_MS;
            let out = eng.update(now);
            for change in &out.changes {
                self.texts.insert(change.key.clone(), change.text.clone());
            }
        }
        now
    }
}

fn observe_all(eng: &mut CounterEngine, page: &Page) {
    for c in &page.fixture.counters {
        assert!(eng.observe(&c.key));
    }
}

#[test]
fn home_counters_wait_until_scrolled_into_view() {
    let mut page = Page::load("home");
    let mut eng = CounterEngine::new(CounterConfig::default());
    let rule = eng.config().trigger;
    observe_all(&mut eng, &page);

    assert!(page.report(&mut eng, &rule, 0.0).is_empty());
    assert!(!eng.is_animating());

    page.scroll_y = 800.0;
    let started = page.report(&mut eng, &rule, 100.0);
    assert_eq!(started.len(), page.fixture.counters.len());
    page.run_frames(&mut eng, 100.0);

    for c in &page.fixture.counters {
        assert_eq!(page.texts[&c.key], c.final_text, "{}", c.key);
    }
}

#[test]
fn scrolling_back_and_forth_does_not_restart() {
    let mut page = Page::load("home");
    let mut eng = CounterEngine::default();
    let rule = eng.config().trigger;
    observe_all(&mut eng, &page);

    page.scroll_y = 800.0;
    page.report(&mut eng, &rule, 0.0);
    let now = page.run_frames(&mut eng, 0.0);

    page.scroll_y = 0.0;
    assert!(page.report(&mut eng, &rule, now).is_empty());
    page.scroll_y = 800.0;
    assert!(page.report(&mut eng, &rule, now + 50.0).is_empty());
    assert!(!eng.is_animating());
    assert_eq!(page.texts["stat-students"], "1,250+");
}

#[test]
fn about_page_triggers_in_two_stages() {
    let mut page = Page::load("about");
    let mut eng = CounterEngine::default();
    let rule = eng.config().trigger;
    observe_all(&mut eng, &page);

    let started = page.report(&mut eng, &rule, 0.0);
    assert_eq!(started, vec!["stat-hours".to_string()]);
    let now = page.run_frames(&mut eng, 0.0);
    assert_eq!(page.texts["stat-hours"], "$12,000 raised");
    assert!(eng.is_observed("stat-rating"));

    page.scroll_y = 1600.0;
    let started = page.report(&mut eng, &rule, now);
    assert_eq!(started, vec!["stat-rating".to_string()]);
    page.run_frames(&mut eng, now);
    assert_eq!(page.texts["stat-rating"], "4,800");
}

#[test]
fn counters_animate_concurrently_and_finish_independently() {
    let mut page = Page::load("home");
    let mut eng = CounterEngine::default();
    let rule = eng.config().trigger;
    observe_all(&mut eng, &page);
    page.scroll_y = 800.0;
    page.report(&mut eng, &rule, 0.0);
    assert_eq!(eng.running_count(), 4);

    // Default-duration counters end at 1500ms; the 2000ms override keeps running.
    let out = eng.update(1500.0);
    let finished: Vec<&str> = out
        .events
        .iter()
        .filter_map(|e| match e {
            CounterEvent::Finished { key, .. } => Some(key.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(finished.len(), 3);
    assert!(!finished.contains(&"stat-recitals"));
    assert_eq!(eng.running_count(), 1);

    let out = eng.update(2000.0);
    assert_eq!(out.text_for("stat-recitals"), Some("500"));
    assert!(!eng.is_animating());
}
