//! Page context for HP Fortress.
//!
//! Provides the page state and the mounted element handles to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| PageContext::new(state));
//!
//! // In child components
//! let page = use_page();
//! let scrolled = page.state.read().header.is_scrolled();
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use fortress_core::{AppState, InputGates, ItemPhase, PageHandle, SectionId};

/// Elements resolved once they mount.
///
/// Everything is optional: a missing element just leaves its feature idle.
#[derive(Default)]
pub struct PageRefs {
    /// The scrolling page container
    pub root: Option<Rc<MountedData>>,
    pub header: Option<Rc<MountedData>>,
    pub sections: HashMap<SectionId, Rc<MountedData>>,
}

/// Signals shared by every component on the page.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub state: Signal<AppState>,
    /// Scroll and resize bookkeeping; not reactive, writing it renders nothing
    pub gates: CopyValue<InputGates>,
    pub refs: Signal<PageRefs>,
    /// Entrance phase of every item in every revealed group
    pub phases: Signal<HashMap<SectionId, Vec<ItemPhase>>>,
    /// Wall clock label
    pub clock: Signal<String>,
    /// Hero dashboard parallax offset in px
    pub parallax: Signal<f64>,
}

impl PageContext {
    /// Must be called from a component (creates signals in its scope).
    pub fn new(state: AppState) -> Self {
        Self {
            state: Signal::new(state),
            gates: CopyValue::new(InputGates::new()),
            refs: Signal::new(PageRefs::default()),
            phases: Signal::new(HashMap::new()),
            clock: Signal::new(fortress_core::clock::now_label()),
            parallax: Signal::new(0.0),
        }
    }

    /// Phase of one grouped item; untouched items are hidden.
    pub fn item_phase(&self, section: &SectionId, index: usize) -> ItemPhase {
        self.phases
            .read()
            .get(section)
            .and_then(|items| items.get(index).copied())
            .unwrap_or_default()
    }
}

impl PageHandle for PageContext {
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.peek())
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut state = self.state;
        let mut guard = state.write();
        f(&mut guard)
    }

    fn with_gates<R>(&self, f: impl FnOnce(&mut InputGates) -> R) -> R {
        let mut gates = self.gates;
        let mut guard = gates.write();
        f(&mut guard)
    }
}

/// Hook to access the page context.
pub fn use_page() -> PageContext {
    use_context::<PageContext>()
}
