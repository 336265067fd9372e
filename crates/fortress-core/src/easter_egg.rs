//! Konami code easter egg.
//!
//! ↑ ↑ ↓ ↓ ← → ← → B A turns the whole page into a 3-second hue-cycling
//! rave with a toast in the middle.

/// Key names in the order they must be pressed.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

pub const TOAST_MESSAGE: &str = "🎉 FORTRESS MODE ACTIVATED! 🏰";

/// Inline style for the page root while active.
pub const PAGE_ANIMATION: &str = "animation: rainbow 2s linear infinite;";

/// Keyframes injected while active.
pub const RAINBOW_KEYFRAMES: &str = r#"
@keyframes rainbow {
  0% { filter: hue-rotate(0deg); }
  100% { filter: hue-rotate(360deg); }
}
"#;

/// Progress through [`KONAMI_SEQUENCE`].
#[derive(Debug, Clone, Default)]
pub struct KonamiTracker {
    position: usize,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Feed a key. Returns `true` when it completes the sequence.
    ///
    /// Any wrong key drops all progress, including a wrong key that happens
    /// to be the first key of the sequence.
    pub fn feed(&mut self, key: &str) -> bool {
        if KONAMI_SEQUENCE[self.position] != key {
            self.position = 0;
            return false;
        }

        self.position += 1;
        if self.position == KONAMI_SEQUENCE.len() {
            self.position = 0;
            return true;
        }
        false
    }
}

/// Whether the celebration is currently showing.
#[derive(Debug, Clone, Default)]
pub struct EasterEgg {
    active: bool,
    activations: u32,
}

impl EasterEgg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activations(&self) -> u32 {
        self.activations
    }

    /// Start the celebration. Returns `false` if it is already running.
    pub fn activate(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.activations += 1;
        tracing::info!(activations = self.activations, "Fortress mode activated");
        true
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Inline style for the page root.
    pub fn page_style(&self) -> &'static str {
        if self.active {
            PAGE_ANIMATION
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(tracker: &mut KonamiTracker, keys: &[&str]) -> Vec<bool> {
        keys.iter().map(|key| tracker.feed(key)).collect()
    }

    #[test]
    fn test_full_sequence() {
        let mut tracker = KonamiTracker::new();
        let results = feed_all(&mut tracker, &KONAMI_SEQUENCE);
        assert_eq!(results.iter().filter(|hit| **hit).count(), 1);
        assert!(results[9]);
        assert_eq!(tracker.position(), 0);
    }

    #[test]
    fn test_wrong_key_resets() {
        let mut tracker = KonamiTracker::new();
        feed_all(&mut tracker, &["ArrowUp", "ArrowUp", "ArrowDown"]);
        assert_eq!(tracker.position(), 3);
        assert!(!tracker.feed("x"));
        assert_eq!(tracker.position(), 0);
    }

    #[test]
    fn test_third_up_resets_to_zero() {
        let mut tracker = KonamiTracker::new();
        feed_all(&mut tracker, &["ArrowUp", "ArrowUp", "ArrowUp"]);
        assert_eq!(tracker.position(), 0);
    }

    #[test]
    fn test_case_sensitive() {
        let mut tracker = KonamiTracker::new();
        let mut keys = KONAMI_SEQUENCE.to_vec();
        keys[8] = "B";
        assert!(!feed_all(&mut tracker, &keys).contains(&true));
    }

    #[test]
    fn test_egg_activation() {
        let mut egg = EasterEgg::new();
        assert_eq!(egg.page_style(), "");
        assert!(egg.activate());
        assert!(!egg.activate());
        assert_eq!(egg.page_style(), PAGE_ANIMATION);
        egg.deactivate();
        assert!(egg.activate());
        assert_eq!(egg.activations(), 2);
    }
}
