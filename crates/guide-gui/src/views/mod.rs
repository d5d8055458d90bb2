//! View components
//!
//! The viewer is a sidebar for navigation and a central chapter panel.

mod chapter;
mod sidebar;

pub use chapter::ChapterView;
pub use sidebar::{SidebarView, pick_content_dir};
