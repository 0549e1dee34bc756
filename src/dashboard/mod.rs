//! Dashboard module: the page model behind the second-brain UI
//!
//! Turns catalog and engine output into stat cards, sidebar tabs, popular
//! tags, and content cards with relative timestamps.

pub mod format;
pub mod handler;
pub mod view;

pub use handler::{dashboard_router, DashboardState};
pub use view::{CategoryTab, ContentCard, DashboardView, StatCard};
