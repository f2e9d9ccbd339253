//! Optional page effects: hero parallax, typewriter heading, mobile menu,
//! and a debouncer for scroll/resize handlers.

/// Hero transform for the current scroll offset.
pub fn parallax_transform(scroll_y: f64, rate: f64) -> String {
    // + 0.0 turns -0 into 0
    format!("translateY({}px)", scroll_y * rate + 0.0)
}

/// Types `text` one character per `speed_ms`.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    speed_ms: f64,
    next_at_ms: Option<f64>,
}

impl Typewriter {
    pub fn new(text: &str, speed_ms: f64) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            speed_ms,
            next_at_ms: None,
        }
    }

    pub fn text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    /// Clear the element and type the first character immediately.
    pub fn start(&mut self, now_ms: f64) -> String {
        self.shown = 0;
        self.next_at_ms = None;
        if !self.chars.is_empty() {
            self.shown = 1;
            self.next_at_ms = (!self.is_done()).then_some(now_ms + self.speed_ms);
        }
        self.text()
    }

    /// Type every character due by `now_ms`. `None` when nothing changed.
    pub fn tick(&mut self, now_ms: f64) -> Option<String> {
        let mut changed = false;
        while let Some(due) = self.next_at_ms {
            if now_ms < due {
                break;
            }
            self.shown += 1;
            changed = true;
            self.next_at_ms = (!self.is_done()).then_some(due + self.speed_ms);
        }
        changed.then(|| self.text())
    }
}

/// Mobile navigation toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button click. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Key press anywhere on the page. Returns true if it closed the menu.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.open = false;
            return true;
        }
        false
    }
}

/// Host-timestamp debouncer.
///
/// Trailing by default: `poll` fires once `wait_ms` passes without another
/// `call`. With `immediate`, `call` fires on the leading edge instead.
#[derive(Clone, Debug)]
pub struct Debouncer {
    wait_ms: f64,
    immediate: bool,
    deadline_ms: Option<f64>,
}

impl Debouncer {
    pub fn new(wait_ms: f64, immediate: bool) -> Self {
        Self {
            wait_ms,
            immediate,
            deadline_ms: None,
        }
    }

    /// Record a call. Returns true if the handler should run now.
    pub fn call(&mut self, now_ms: f64) -> bool {
        // An expired deadline counts as no timer, polled or not.
        let idle = self.deadline_ms.map_or(true, |d| now_ms >= d);
        let call_now = self.immediate && idle;
        self.deadline_ms = Some(now_ms + self.wait_ms);
        call_now
    }

    /// Returns true if the trailing handler should run now.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                !self.immediate
            }
            _ => false,
        }
    }
}
