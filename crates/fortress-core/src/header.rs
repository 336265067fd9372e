//! Scroll-reactive header and hero parallax.

use crate::config::HeaderConfig;

/// Tracks whether the page has scrolled past the header threshold.
#[derive(Debug, Clone)]
pub struct HeaderTracker {
    config: HeaderConfig,
    scrolled: bool,
}

impl HeaderTracker {
    pub fn new(config: HeaderConfig) -> Self {
        Self {
            config,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feed the current scroll offset.
    ///
    /// Returns the new state only when the threshold was crossed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
        if !self.crosses(scroll_y) {
            return None;
        }
        let scrolled = !self.scrolled;
        self.scrolled = scrolled;
        tracing::trace!(scroll_y, scrolled, "Header state changed");
        Some(scrolled)
    }

    /// Whether [`on_scroll`](Self::on_scroll) at `scroll_y` would change state.
    pub fn crosses(&self, scroll_y: f64) -> bool {
        (scroll_y > self.config.scroll_threshold) != self.scrolled
    }

    /// Class list for the header element.
    pub fn class(&self) -> &'static str {
        if self.scrolled {
            "site-header scrolled"
        } else {
            "site-header"
        }
    }

    /// Hero dashboard offset while the hero is still on screen.
    ///
    /// `None` means "leave the last transform alone".
    pub fn parallax_offset(&self, scroll_y: f64, viewport_height: f64) -> Option<f64> {
        (scroll_y < viewport_height).then(|| scroll_y * self.config.parallax_factor)
    }

    /// Height to subtract from anchor targets.
    pub fn offset_height(&self, measured: Option<f64>) -> f64 {
        measured.unwrap_or(self.config.fallback_height)
    }
}

/// Inline transform for a parallax offset.
pub fn parallax_transform(offset: f64) -> String {
    format!("transform: translateY({offset}px);")
}
