//! Navigation session for the physics study guide viewer.
//!
//! [`NavigationState`] tracks where the reader is; [`render`] turns that
//! state plus a [`guide_ingest::ChapterSource`] into a [`Page`] that both
//! the desktop viewer and the command line display.

mod error;
mod render;
mod state;

pub use error::NavigationError;
pub use render::{
    ChapterPage, DIAGRAM_MISSING, DiagramView, EXERCISES_MISSING, ExerciseView, ExercisesTab,
    LATEX_GUIDANCE, Page, THEORY_MISSING, TheoryTab, render,
};
pub use state::{NavigationState, Tab};
