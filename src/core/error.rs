use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = TranslationError> = std::result::Result<T, E>;

/// Failures raised while loading translation sources.
///
/// A missing lang directory is not an error: it simply yields no translations.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// A `<locale>.json` file is not a valid JSON object.
    #[error("Malformed JSON translation file {}", .path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A resource file inside a locale directory cannot be read as a key/value object.
    #[error("Invalid resource file {}", .path.display())]
    InvalidResourceFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A file or directory exists but could not be read.
    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TranslationError {
    /// Path of the file that caused the failure.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::MalformedJson { path, .. }
            | Self::InvalidResourceFile { path, .. }
            | Self::Io { path, .. } => path,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
