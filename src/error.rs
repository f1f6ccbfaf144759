use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by motif enumeration, counting and graph I/O.
#[derive(Debug, Error)]
pub enum MotifError {
    #[error("the motif size (n = {n}) is greater than the input graph size ({size})")]
    MotifLargerThanGraph { n: usize, size: usize },

    #[error("invalid motif size (n = {n}), expected 1 <= n <= {max}")]
    InvalidMotifSize { n: usize, max: usize },

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MotifError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MotifError::Io {
            path: path.into(),
            source,
        }
    }

    /// Validate a requested motif size against `1..=ceiling`.
    pub fn check_motif_size(n: usize, ceiling: usize) -> Result<()> {
        if n == 0 || n > ceiling {
            return Err(MotifError::InvalidMotifSize { n, max: ceiling });
        }
        Ok(())
    }
}

pub type Result<T> = std::result::Result<T, MotifError>;
