//! Smooth same-page anchor navigation.
//!
//! A click on `href="#features"` is turned into a smooth scroll to the
//! `features` section, stopping short by the header height so the sticky
//! header does not cover the heading. The anchor is recorded as the current
//! location without navigating anywhere.

/// Element id an href points at, if it is a same-page anchor.
///
/// A bare `#` is a placeholder link and is ignored.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a target just under the header.
///
/// `target_top` is relative to the viewport, as a bounding rect reports it.
pub fn target_offset(target_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    target_top + scroll_y - header_height
}

/// In-page location, updated without navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    history: Vec<String>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `href` as the current location.
    pub fn push(&mut self, href: &str) {
        self.history.push(href.to_string());
    }

    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#features"), Some("features"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn test_target_offset() {
        // Section 600px below the viewport top while scrolled 400px, 80px header
        assert_eq!(target_offset(600.0, 400.0, 80.0), 920.0);
        // Section above the viewport
        assert_eq!(target_offset(-300.0, 1000.0, 80.0), 620.0);
    }

    #[test]
    fn test_location() {
        let mut location = Location::new();
        assert!(location.is_empty());
        location.push("#features");
        location.push("#stats");
        assert_eq!(location.current(), Some("#stats"));
        assert_eq!(location.len(), 2);
    }
}
