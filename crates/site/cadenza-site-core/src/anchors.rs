//! In-page anchor links (`<a href="#programs">`).

/// Id of the element an in-page link should smooth-scroll to.
///
/// Returns `None` for external links and for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}
