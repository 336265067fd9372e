//! UI Components for HP Fortress.
//!
//! Dark server-room dashboard components.

mod accessibility;
mod code_block;
mod easter_egg;
mod mobile_nav;
mod nav_header;
mod reveal_section;
mod server_dashboard;

pub use accessibility::{ExternalLink, SkipLink};
pub use code_block::CodeBlock;
pub use easter_egg::FortressModeToast;
pub use nav_header::{AnchorLink, SiteHeader};
pub use reveal_section::{RevealSection, StaggerItem};
pub use server_dashboard::ServerDashboard;
