//! Physics study guide viewer - GUI library
//!
//! This module exposes settings and state for testing.

pub mod settings;
pub mod state;
pub mod theme;
