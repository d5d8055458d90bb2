//! Validation for the physics study guide content.
//!
//! Two layers: [`check_json_str`] / [`check_file`] look at raw syntax and
//! can repair stray control characters, while [`validate_chapter`] checks a
//! parsed chapter against the expected layout and the catalog.

mod checks;
mod error;
mod file_check;
mod json_check;

pub use checks::validate_chapter;
pub use error::{Result, ValidateError};
pub use file_check::{FileCheck, check_file};
pub use json_check::{JsonCheck, JsonSyntaxError, check_json_str, strip_control_characters};
