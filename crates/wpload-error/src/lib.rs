use std::fmt;

#[derive(Debug)]
pub enum AutoloadError {
    ManifestError(String),
    InstalledRepositoryError(String),
    MissingInstallPath(String),
    WriteFailed(String, String),
}

impl fmt::Display for AutoloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManifestError(msg) => {
                write!(f, "composer.json error: {msg}")
            }
            Self::InstalledRepositoryError(msg) => {
                write!(f, "installed.json error: {msg}")
            }
            Self::MissingInstallPath(name) => {
                write!(f, "Package '{name}' has no install path")
            }
            Self::WriteFailed(path, reason) => {
                write!(f, "Failed to write {path}: {reason}")
            }
        }
    }
}

impl std::error::Error for AutoloadError {}

pub type Result<T> = std::result::Result<T, AutoloadError>;
