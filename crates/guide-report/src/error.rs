use std::path::PathBuf;

use guide_ingest::IngestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to list chapters: {0}")]
    Discovery(#[from] IngestError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExportError>;
