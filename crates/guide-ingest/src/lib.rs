//! Chapter ingestion for the physics study guide.
//!
//! This crate finds chapter JSON files on disk, parses them into
//! [`guide_model::Chapter`] values and memoizes the results.
//!
//! # Example
//!
//! ```ignore
//! use guide_ingest::{ChapterRepository, ChapterSource};
//! use guide_model::{Catalog, ChapterId};
//!
//! let catalog = Catalog::serway_volume_one();
//! let repository = ChapterRepository::new("json_capitulos", &catalog);
//! let record = repository.load(ChapterId::new(5))?;
//! println!("{}", record.chapter.title);
//! ```

mod cache;
mod discovery;
mod error;
mod position;
mod repository;

// === Error Types ===
pub use error::{IngestError, LoadError, LoadErrorKind, Result};

// === File Discovery ===
pub use discovery::{list_chapter_files, list_files_with_extension, parse_chapter_file_name};

// === Loading ===
pub use cache::ChapterCache;
pub use position::{TextPosition, json_error_position};
pub use repository::{
    ChapterRecord, ChapterRepository, ChapterSource, DEFAULT_CONTENT_DIR, MemorySource,
    parse_chapter, parse_chapter_bytes,
};
