// Menu Error Types
use thiserror::Error;

/// Errors raised while loading, assembling or mutating a menu tree.
///
/// Projection itself never fails; `MalformedItem` values are collected by the
/// decoder and reported rather than returned.
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Malformed menu item at {path}: {reason}")]
    MalformedItem { path: String, reason: String },

    #[error("Cyclic menu structure detected at item '{0}'")]
    CyclicStructure(String),

    #[error("Duplicate menu item id: {0}")]
    DuplicateId(String),

    #[error("Invalid menu document: {0}")]
    InvalidDocument(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("No remote menu API configured (set MENU_API_URL or run `menu remote set`)")]
    RemoteNotConfigured,

    #[error("Remote returned status {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl MenuError {
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        MenuError::MalformedItem {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Structural errors make a collection unusable as a whole; the rest are
    /// either per-item or environmental.
    pub fn is_structural(&self) -> bool {
        matches!(self, MenuError::CyclicStructure(_) | MenuError::DuplicateId(_))
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
