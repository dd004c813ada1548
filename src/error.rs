//! Error types for reading dictionaries and graph files.
//!
//! The graph core itself never fails: a missing path is `None`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LadderError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The graph file does not follow the `[Vertex]`/`[Edges]` layout.
    #[error("line {line}: {message}")]
    FileFormat { line: usize, message: String },

    #[error("no input for {0}")]
    MissingInput(String),
}

impl LadderError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn file_format(line: usize, message: impl Into<String>) -> Self {
        Self::FileFormat {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LadderError>;
