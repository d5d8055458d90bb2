use guide_model::ChapterId;
use thiserror::Error;

/// A rejected navigation transition. The state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("unknown part '{selector}'")]
    UnknownPart { selector: String },

    #[error("chapter {chapter} is not part of '{part}'")]
    ChapterNotInPart { chapter: ChapterId, part: String },
}
