//! Accessibility and link affordances.

/// Glyph appended to links that leave the page.
pub const EXTERNAL_INDICATOR: &str = " ↗";

pub const SKIP_LINK_TEXT: &str = "Skip to main content";

/// Id given to the main region and targeted by the skip link.
pub const MAIN_ID: &str = "main";

/// Extra markup for one anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkDecoration {
    /// Append [`EXTERNAL_INDICATOR`]
    pub indicator: bool,
    /// Value for the `rel` attribute
    pub rel: Option<&'static str>,
}

pub fn is_external(href: &str) -> bool {
    href.starts_with("http")
}

/// Decorate a link by its href and target.
///
/// `has_indicator` is whether the markup already carries the glyph.
pub fn decorate(href: &str, target: Option<&str>, has_indicator: bool) -> LinkDecoration {
    if !is_external(href) {
        return LinkDecoration::default();
    }
    LinkDecoration {
        indicator: !has_indicator,
        rel: (target == Some("_blank")).then_some("noopener noreferrer"),
    }
}

/// Accessible name for a button: keep an explicit label, else use its text.
pub fn aria_label(existing: Option<&str>, text: &str) -> String {
    match existing {
        Some(label) if !label.is_empty() => label.to_string(),
        _ if !text.trim().is_empty() => text.trim().to_string(),
        _ => "Button".to_string(),
    }
}

/// Skip link sits off-screen until it receives focus.
pub fn skip_link_style(focused: bool) -> String {
    let top = if focused { "0" } else { "-100px" };
    format!(
        "position: absolute; top: {top}; left: 0; background: var(--accent-primary); \
         color: white; padding: 1rem 2rem; z-index: 10000; transition: top 0.3s;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_link_untouched() {
        assert_eq!(decorate("#features", None, false), LinkDecoration::default());
        assert_eq!(decorate("/docs", Some("_blank"), false), LinkDecoration::default());
    }

    #[test]
    fn test_external_link() {
        let deco = decorate("https://github.com", Some("_blank"), false);
        assert!(deco.indicator);
        assert_eq!(deco.rel, Some("noopener noreferrer"));

        let deco = decorate("http://example.com", None, true);
        assert!(!deco.indicator);
        assert_eq!(deco.rel, None);
    }

    #[test]
    fn test_aria_label() {
        assert_eq!(aria_label(Some("Open menu"), "☰"), "Open menu");
        assert_eq!(aria_label(None, " Copy "), "Copy");
        assert_eq!(aria_label(Some(""), ""), "Button");
    }

    #[test]
    fn test_skip_link_style() {
        assert!(skip_link_style(false).contains("top: -100px"));
        assert!(skip_link_style(true).contains("top: 0;"));
    }
}
