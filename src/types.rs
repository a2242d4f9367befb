//! Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// Output format for a rendered menu
/// Used by the render configuration and the CLI `--format` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    Text,
    Html,
    Json,
}

impl RenderFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(RenderFormat::Text),
            "html" => Some(RenderFormat::Html),
            "json" => Some(RenderFormat::Json),
            _ => None,
        }
    }
}

/// Serialized form of a menu document on disk or on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension; anything unknown is `None`
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()) {
            Some(ext) if ext == "json" => Some(DocumentFormat::Json),
            Some(ext) if ext == "yaml" || ext == "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}
