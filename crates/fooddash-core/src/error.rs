use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoodDashError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl FoodDashError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FoodDashError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        FoodDashError::Csv {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            FoodDashError::Io { path, .. } | FoodDashError::Csv { path, .. } => Some(path),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FoodDashError>;
