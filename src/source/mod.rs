use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::config::SourceConfig;
use crate::error::{MenuError, Result};
use crate::menu::{decode_items, parse_document, Decoded};
use crate::types::DocumentFormat;

/// Where a menu collection comes from
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn load(&self) -> Result<Decoded>;

    /// Human-readable origin for logs and CLI output
    fn describe(&self) -> String;
}

/// Menu document on disk; `.json`, `.yaml` or `.yml`
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Result<DocumentFormat> {
        DocumentFormat::from_path(&self.path)
            .ok_or_else(|| MenuError::UnsupportedFormat(self.path.display().to_string()))
    }

    /// Raw parsed document, for callers that edit and write it back
    pub async fn read_document(&self) -> Result<serde_json::Value> {
        let format = self.format()?;
        let content = tokio::fs::read_to_string(&self.path).await?;
        tracing::debug!("Loaded {} bytes of menu data from {}", content.len(), self.path.display());
        parse_document(&content, format)
    }
}

#[async_trait]
impl MenuSource for FileSource {
    async fn load(&self) -> Result<Decoded> {
        decode_items(&self.read_document().await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Menu list served by the project API, fetched with an optional bearer
/// token
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
    token: Option<String>,
}

impl HttpSource {
    pub fn new(base_url: &str, menus_path: &str, token: Option<String>, timeout: Duration) -> Result<Self> {
        let url = menus_url(base_url, menus_path)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url, token })
    }

    /// Build from config; `token` overrides the configured one when given
    pub fn from_config(config: &SourceConfig, base_url: Option<&str>, token: Option<String>) -> Result<Self> {
        let base_url = base_url
            .or(config.base_url.as_deref())
            .ok_or(MenuError::RemoteNotConfigured)?;
        Self::new(
            base_url,
            &config.menus_path,
            token.or_else(|| config.token.clone()),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Resolve `menus_path` below the base URL's path, so a base such as
/// `https://host/v1` keeps its `/v1` prefix
fn menus_url(base_url: &str, menus_path: &str) -> Result<Url> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(menus_path.trim_start_matches('/'))?)
}

#[async_trait]
impl MenuSource for HttpSource {
    async fn load(&self) -> Result<Decoded> {
        let mut request = self.client.get(self.url.clone());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Menu request to {} failed with {}", self.url, status);
            return Err(MenuError::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload = response.json::<serde_json::Value>().await?;
        tracing::debug!("Fetched menu data from {}", self.url);
        decode_items(&payload)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
