mod styles;

pub use styles::{GLOBAL_STYLES, INJECTED_STYLES};
