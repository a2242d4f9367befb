use std::fs;
use std::path::PathBuf;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Remote menu API selected with `menu remote set`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub base_url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Bearer token stored with `menu auth login`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    pub token: Option<String>,
    pub saved_at: Option<DateTime<Utc>>,
}

impl RemoteConfig {
    pub fn set(&mut self, base_url: String) {
        self.base_url = Some(base_url);
        self.updated_at = Some(Utc::now());
    }
}

impl AuthConfig {
    pub fn set(&mut self, token: String) {
        self.token = Some(token);
        self.saved_at = Some(Utc::now());
    }

    /// Token with everything past the first four characters hidden
    pub fn masked_token(&self) -> Option<String> {
        self.token.as_ref().map(|t| {
            let visible: String = t.chars().take(4).collect();
            format!("{}…", visible)
        })
    }
}

pub fn get_config_dir() -> anyhow::Result<PathBuf> {
    let config_dir = if let Ok(custom_dir) = std::env::var("MENU_CLI_CONFIG_DIR") {
        PathBuf::from(custom_dir)
    } else {
        let home = std::env::var("HOME").map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
        PathBuf::from(home).join(".config").join("menu-tree").join("cli")
    };

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

fn load_file<T: DeserializeOwned + Default>(name: &str) -> anyhow::Result<T> {
    let file = get_config_dir()?.join(name);

    if !file.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(file)?;
    Ok(serde_json::from_str(&content)?)
}

fn save_file<T: Serialize>(name: &str, value: &T) -> anyhow::Result<()> {
    let file = get_config_dir()?.join(name);
    let content = serde_json::to_string_pretty(value)?;
    fs::write(file, content)?;
    Ok(())
}

pub fn load_remote_config() -> anyhow::Result<RemoteConfig> {
    load_file("remote.json")
}

pub fn save_remote_config(config: &RemoteConfig) -> anyhow::Result<()> {
    save_file("remote.json", config)
}

pub fn load_auth_config() -> anyhow::Result<AuthConfig> {
    load_file("auth.json")
}

pub fn save_auth_config(config: &AuthConfig) -> anyhow::Result<()> {
    save_file("auth.json", config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_token_hides_tail() {
        let mut auth = AuthConfig::default();
        assert!(auth.masked_token().is_none());
        auth.set("abcdef123456".to_string());
        assert_eq!(auth.masked_token().as_deref(), Some("abcd…"));
        assert!(auth.saved_at.is_some());
    }
}
