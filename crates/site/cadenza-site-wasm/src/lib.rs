use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use cadenza_counter_core::IntersectionEntry;
use cadenza_site_core::{
    anchor_target, compose_mailto, navbar_style, parallax_transform, CardReveal, ContactForm,
    FormFeedback, MobileMenu, SiteConfig, TestimonialSlider, Typewriter,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn to_js<T: serde::Serialize>(what: &str, v: &T) -> Result<JsValue, JsError> {
    swb::to_value(v).map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

/// Page-level behaviors sharing one SiteConfig.
#[wasm_bindgen]
pub struct CadenzaSite {
    cfg: SiteConfig,
    reveal: CardReveal,
    menu: MobileMenu,
}

#[wasm_bindgen]
impl CadenzaSite {
    /// Pass a JSON config object or undefined/null for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CadenzaSite, JsError> {
        console_error_panic_hook::set_once();

        let cfg: SiteConfig = if jsvalue_is_undefined_or_null(&config) {
            SiteConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        cfg.validate()
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;
        Ok(CadenzaSite {
            reveal: CardReveal::new(&cfg),
            cfg,
            menu: MobileMenu::default(),
        })
    }

    /// Section id for an in-page link, or undefined.
    #[wasm_bindgen(js_name = anchor_target)]
    pub fn anchor_target(&self, href: &str) -> Option<String> {
        anchor_target(href).map(str::to_string)
    }

    /// `{ background, box_shadow }` for the navbar at `scroll_y`.
    #[wasm_bindgen(js_name = navbar_style)]
    pub fn navbar_style(&self, scroll_y: f64) -> Result<JsValue, JsError> {
        to_js("navbar_style", &navbar_style(scroll_y, self.cfg.nav_scroll_threshold))
    }

    #[wasm_bindgen(js_name = parallax_transform)]
    pub fn parallax_transform(&self, scroll_y: f64) -> String {
        parallax_transform(scroll_y, self.cfg.parallax_rate)
    }

    /// `mailto:` URI for a form object `{ firstName, lastName, email, phone, message }`.
    #[wasm_bindgen(js_name = compose_mailto)]
    pub fn compose_mailto(&self, form: JsValue) -> Result<String, JsError> {
        let form: ContactForm =
            swb::from_value(form).map_err(|e| JsError::new(&format!("contact form error: {e}")))?;
        Ok(compose_mailto(&self.cfg.contact_email, &form))
    }

    #[wasm_bindgen(js_name = card_initial_style)]
    pub fn card_initial_style(&self, index: usize) -> Result<JsValue, JsError> {
        to_js("card style", &self.reveal.initial_style(index))
    }

    /// Revealed card style for an observer entry, or undefined.
    #[wasm_bindgen(js_name = card_intersect)]
    pub fn card_intersect(&self, entry: JsValue) -> Result<JsValue, JsError> {
        let entry: IntersectionEntry =
            swb::from_value(entry).map_err(|e| JsError::new(&format!("entry error: {e}")))?;
        match self.reveal.on_intersection(&entry) {
            Some(style) => to_js("card style", &style),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen(js_name = card_hover_style)]
    pub fn card_hover_style(&self, hovered: bool) -> Result<JsValue, JsError> {
        to_js("card style", &self.reveal.hover_style(hovered))
    }

    #[wasm_bindgen(js_name = toggle_menu)]
    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    /// Returns true if the key closed the mobile menu.
    #[wasm_bindgen(js_name = menu_key)]
    pub fn menu_key(&mut self, key: &str) -> bool {
        self.menu.on_key(key)
    }

    #[wasm_bindgen(js_name = create_form_feedback)]
    pub fn create_form_feedback(&self, label: String, background: String) -> CadenzaFormFeedback {
        CadenzaFormFeedback {
            inner: FormFeedback::new(label, background, &self.cfg),
        }
    }

    #[wasm_bindgen(js_name = create_slider)]
    pub fn create_slider(
        &self,
        slides: usize,
        dots: usize,
        active: Option<usize>,
        now_ms: f64,
    ) -> CadenzaSlider {
        CadenzaSlider {
            inner: TestimonialSlider::new(
                slides,
                dots,
                active,
                self.cfg.testimonial_rotate_ms,
                now_ms,
            ),
        }
    }

    #[wasm_bindgen(js_name = create_typewriter)]
    pub fn create_typewriter(&self, text: &str, speed_ms: Option<f64>) -> CadenzaTypewriter {
        CadenzaTypewriter {
            inner: Typewriter::new(text, speed_ms.unwrap_or(self.cfg.type_speed_ms)),
        }
    }
}

/// Submit-button feedback timer.
#[wasm_bindgen]
pub struct CadenzaFormFeedback {
    inner: FormFeedback,
}

#[wasm_bindgen]
impl CadenzaFormFeedback {
    /// Button state `{ label, background, disabled }`, or undefined if ignored.
    #[wasm_bindgen]
    pub fn submit(&mut self, now_ms: f64) -> Result<JsValue, JsError> {
        match self.inner.submit(now_ms) {
            Some(button) => to_js("button state", &button),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// `{ button, reset_form }` when a transition happened, else undefined.
    #[wasm_bindgen]
    pub fn advance(&mut self, now_ms: f64) -> Result<JsValue, JsError> {
        match self.inner.advance(now_ms) {
            Some(update) => to_js("form update", &update),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen(js_name = next_deadline)]
    pub fn next_deadline(&self) -> Option<f64> {
        self.inner.next_deadline()
    }
}

/// Testimonial slider state.
#[wasm_bindgen]
pub struct CadenzaSlider {
    inner: TestimonialSlider,
}

#[wasm_bindgen]
impl CadenzaSlider {
    #[wasm_bindgen]
    pub fn select(&mut self, dot: usize) -> Result<JsValue, JsError> {
        match self.inner.select(dot) {
            Some(view) => to_js("slide view", &view),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen]
    pub fn tick(&mut self, now_ms: f64) -> Result<JsValue, JsError> {
        match self.inner.tick(now_ms) {
            Some(view) => to_js("slide view", &view),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen]
    pub fn pause(&mut self) {
        self.inner.pause();
    }

    #[wasm_bindgen]
    pub fn resume(&mut self, now_ms: f64) {
        self.inner.resume(now_ms);
    }

    #[wasm_bindgen]
    pub fn index(&self) -> usize {
        self.inner.index()
    }
}

/// Typewriter heading effect.
#[wasm_bindgen]
pub struct CadenzaTypewriter {
    inner: Typewriter,
}

#[wasm_bindgen]
impl CadenzaTypewriter {
    #[wasm_bindgen]
    pub fn start(&mut self, now_ms: f64) -> String {
        self.inner.start(now_ms)
    }

    /// New text when characters were typed, else undefined.
    #[wasm_bindgen]
    pub fn tick(&mut self, now_ms: f64) -> Option<String> {
        self.inner.tick(now_ms)
    }

    #[wasm_bindgen(js_name = is_done)]
    pub fn is_done(&self) -> bool {
        self.inner.is_done()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
