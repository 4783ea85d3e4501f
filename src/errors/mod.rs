use std::path::{Path, PathBuf};

/// Failure to produce the flat rating table from the input files.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Input file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("Failed to read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("Malformed row in {} at line {line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("No rows found in {}", path.display())]
    Empty { path: PathBuf },

    #[error("No rating in {} refers to a movie in {}", ratings.display(), items.display())]
    NoMatches { ratings: PathBuf, items: PathBuf },
}

impl LoadError {
    pub fn io(path: &Path, err: impl std::fmt::Display) -> Self {
        LoadError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn malformed(path: &Path, line: u64, reason: impl Into<String>) -> Self {
        LoadError::Malformed {
            path: path.to_path_buf(),
            line,
            reason: reason.into(),
        }
    }
}

/// A requested title is not part of the loaded dataset.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Movie not found: {title}")]
pub struct NotFoundError {
    pub title: String,
}

impl NotFoundError {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
