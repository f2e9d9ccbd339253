use cadenza_counter_core::Rect;
use cadenza_site_core::{
    anchor_target, compose_mailto, navbar_style, CardReveal, ContactForm, FormFeedback,
    SiteConfig, TestimonialSlider,
};

#[test]
fn contact_submission_opens_mailto_and_runs_feedback() {
    let cfg = SiteConfig::default();
    let mut feedback = FormFeedback::new("Send Message", "", &cfg);

    let form: ContactForm = serde_json::from_str(
        r#"{ "firstName": "Clara", "lastName": "Schumann", "phone": " 555-0100 ",
             "message": "Intermediate piano, weekday evenings." }"#,
    )
    .unwrap();

    let button = feedback.submit(0.0).unwrap();
    assert!(button.disabled);
    let uri = compose_mailto(&cfg.contact_email, &form);
    assert!(uri.starts_with("mailto:dianeboxill.pianolessons@gmail.com?subject="));
    assert!(uri.contains("subject=Website%20inquiry%20from%20Clara%20Schumann&"));
    assert!(uri.contains("Phone%3A%20555-0100%0AMessage%3A"));
    assert!(!uri.contains("Email%3A"));

    let mut resets = 0;
    let mut now = 0.0;
    while !feedback.is_idle() {
        now += 250.0;
        if let Some(update) = feedback.advance(now) {
            if update.reset_form {
                resets += 1;
                assert_eq!(update.button.label, "Send Message");
            }
        }
    }
    assert_eq!(resets, 1);
    assert_eq!(now, 3500.0);
}

#[test]
fn navbar_follows_scroll() {
    let cfg = SiteConfig::default();
    let styles: Vec<&str> = [0.0, 80.0, 101.0, 640.0, 20.0]
        .iter()
        .map(|&y| navbar_style(y, cfg.nav_scroll_threshold).box_shadow)
        .collect();
    assert_eq!(
        styles,
        vec![
            "none",
            "none",
            "0 2px 20px rgba(0, 0, 0, 0.1)",
            "0 2px 20px rgba(0, 0, 0, 0.1)",
            "none"
        ]
    );
}

#[test]
fn nav_links_resolve_to_sections() {
    let hrefs = ["#programs", "#contact", "#", "mailto:x@example.com"];
    let targets: Vec<Option<&str>> = hrefs.iter().map(|h| anchor_target(h)).collect();
    assert_eq!(targets, vec![Some("programs"), Some("contact"), None, None]);
}

#[test]
fn cards_reveal_when_scrolled_past_bottom_margin() {
    let cfg = SiteConfig::default();
    let reveal = CardReveal::new(&cfg);
    // Viewport 800 tall; -50px margin puts the root's bottom at 750.
    let card = Rect::new(0.0, 740.0, 300.0, 200.0);
    let entry = reveal.rule().measure("card-0", &card, 1200.0, 800.0);
    // 10px of 200px visible: 5%.
    assert!(reveal.on_intersection(&entry).is_none());

    let card = Rect::new(0.0, 700.0, 300.0, 200.0);
    let entry = reveal.rule().measure("card-0", &card, 1200.0, 800.0);
    assert!(reveal.on_intersection(&entry).is_some());
}

#[test]
fn slider_rotation_with_hover_and_dots() {
    let cfg = SiteConfig::default();
    let mut slider = TestimonialSlider::new(3, 3, Some(1), cfg.testimonial_rotate_ms, 0.0);
    assert_eq!(slider.tick(5000.0).unwrap().index, 2);

    slider.pause();
    assert!(slider.tick(60_000.0).is_none());
    assert_eq!(slider.select(0).unwrap().active_dot, Some(0));

    slider.resume(60_000.0);
    let view = slider.tick(65_000.0).unwrap();
    assert_eq!(view.index, 1);
    assert_eq!(view.transform, "translateX(-100%)");
}
