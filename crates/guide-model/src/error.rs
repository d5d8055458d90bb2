use thiserror::Error;

use crate::ChapterId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid chapter id: {0:?}")]
    InvalidChapterId(String),
    #[error("catalog has no parts")]
    EmptyCatalog,
    #[error("part '{slug}' has no chapters")]
    EmptyPart { slug: String },
    #[error("duplicate part slug '{slug}'")]
    DuplicatePart { slug: String },
    #[error("chapter {chapter} is listed in both '{first}' and '{second}'")]
    DuplicateChapter {
        chapter: ChapterId,
        first: String,
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
