//! Mobile navigation menu.
//!
//! Two states. Anything that navigates away or signals "done" closes an open
//! menu; growing the viewport past the desktop breakpoint also restores the
//! desktop row layout.

use crate::config::MenuConfig;

/// Open/closed state of the menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Layout applied to the nav links container.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NavLayout {
    /// No inline layout; the stylesheet decides
    #[default]
    Stylesheet,
    /// Dropdown column under the header
    Expanded,
    /// Hidden after closing on a narrow screen
    Collapsed,
    /// Horizontal row after resizing to desktop
    Desktop,
}

impl NavLayout {
    pub fn inline_style(&self) -> &'static str {
        match self {
            NavLayout::Stylesheet => "",
            NavLayout::Expanded => {
                "display: flex; position: absolute; top: 100%; left: 0; right: 0; \
                 flex-direction: column; background: var(--bg-secondary); \
                 padding: var(--spacing-lg); border-top: 1px solid var(--border-color); \
                 gap: var(--spacing-sm); animation: slideDown 0.3s ease;"
            }
            NavLayout::Collapsed => "display: none;",
            NavLayout::Desktop => {
                "display: flex; position: static; flex-direction: row; \
                 background: transparent; padding: 0; border: none;"
            }
        }
    }
}

const BARS_OPEN: [&str; 3] = [
    "transform: rotate(45deg) translateY(10px);",
    "opacity: 0;",
    "transform: rotate(-45deg) translateY(-10px);",
];

const BARS_CLOSED: [&str; 3] = ["transform: none;", "opacity: 1;", "transform: none;"];

/// Why the menu closed, for logs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum CloseReason {
    Toggle,
    NavLink,
    Escape,
    Resize,
}

#[derive(Debug, Clone)]
pub struct MobileMenu {
    config: MenuConfig,
    state: MenuState,
    layout: NavLayout,
}

impl MobileMenu {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            config,
            state: MenuState::Closed,
            layout: NavLayout::Stylesheet,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn layout(&self) -> NavLayout {
        self.layout
    }

    /// Inline styles for the three hamburger bars.
    pub fn icon_bars(&self) -> [&'static str; 3] {
        match self.state {
            MenuState::Open => BARS_OPEN,
            MenuState::Closed => BARS_CLOSED,
        }
    }

    /// Flip the menu.
    pub fn toggle(&mut self) -> MenuState {
        match self.state {
            MenuState::Closed => {
                self.state = MenuState::Open;
                self.layout = NavLayout::Expanded;
                tracing::debug!("Mobile menu opened");
            }
            MenuState::Open => self.close(CloseReason::Toggle),
        }
        self.state
    }

    /// A nav link was activated. Returns whether the menu closed.
    pub fn on_nav_link(&mut self) -> bool {
        self.close_if_open(CloseReason::NavLink)
    }

    /// A key was pressed. Only Escape matters.
    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close_if_open(CloseReason::Escape)
    }

    /// The viewport settled at `width` after a resize.
    pub fn on_resize(&mut self, width: f64) -> bool {
        if width <= self.config.desktop_breakpoint || !self.is_open() {
            return false;
        }
        self.close(CloseReason::Resize);
        self.layout = NavLayout::Desktop;
        true
    }

    fn close_if_open(&mut self, reason: CloseReason) -> bool {
        if self.is_open() {
            self.close(reason);
            true
        } else {
            false
        }
    }

    fn close(&mut self, reason: CloseReason) {
        self.state = MenuState::Closed;
        self.layout = NavLayout::Collapsed;
        tracing::debug!(?reason, "Mobile menu closed");
    }
}
