use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;

use crate::types::RenderFormat;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub render: RenderConfig,
    pub source: SourceConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub format: RenderFormat,
    pub indent: usize,
    pub html_class_prefix: String,
    /// Symbolic icon name -> glyph text
    pub glyphs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub menus_path: String,
    pub timeout_secs: u64,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("MENU_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from a key lookup (the process environment in `from_env`)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        // Render overrides
        if let Some(v) = lookup("MENU_RENDER_FORMAT") {
            self.render.format = RenderFormat::parse(&v).unwrap_or(self.render.format);
        }
        if let Some(v) = lookup("MENU_RENDER_INDENT") {
            self.render.indent = v.parse().unwrap_or(self.render.indent);
        }
        if let Some(v) = lookup("MENU_HTML_CLASS_PREFIX") {
            if !v.trim().is_empty() {
                self.render.html_class_prefix = v.trim().to_string();
            }
        }
        if let Some(v) = lookup("MENU_ICON_GLYPHS") {
            self.render.glyphs.extend(parse_glyphs(&v));
        }

        // Source overrides
        if let Some(v) = lookup("MENU_API_URL") {
            self.source.base_url = Some(v).filter(|s| !s.trim().is_empty());
        }
        if let Some(v) = lookup("MENU_API_PATH") {
            self.source.menus_path = v;
        }
        if let Some(v) = lookup("MENU_API_TIMEOUT_SECS") {
            self.source.timeout_secs = v.parse().unwrap_or(self.source.timeout_secs);
        }
        if let Some(v) = lookup("MENU_API_TOKEN") {
            self.source.token = Some(v).filter(|s| !s.trim().is_empty());
        }

        // Log overrides
        if let Some(v) = lookup("MENU_LOG") {
            self.log.filter = v;
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            render: RenderConfig {
                format: RenderFormat::Text,
                indent: 2,
                html_class_prefix: "menu".to_string(),
                glyphs: BTreeMap::new(),
            },
            source: SourceConfig {
                base_url: Some("http://localhost:3000".to_string()),
                menus_path: "/api/menus".to_string(),
                timeout_secs: 30,
                token: None,
            },
            log: LogConfig {
                filter: "menu_tree=debug,warn".to_string(),
            },
        }
    }

    pub fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            render: RenderConfig {
                format: RenderFormat::Html,
                indent: 2,
                html_class_prefix: "menu".to_string(),
                glyphs: BTreeMap::new(),
            },
            source: SourceConfig {
                base_url: None,
                menus_path: "/api/menus".to_string(),
                timeout_secs: 10,
                token: None,
            },
            log: LogConfig {
                filter: "menu_tree=info,warn".to_string(),
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            render: RenderConfig {
                format: RenderFormat::Html,
                indent: 2,
                html_class_prefix: "menu".to_string(),
                glyphs: BTreeMap::new(),
            },
            source: SourceConfig {
                base_url: None,
                menus_path: "/api/menus".to_string(),
                timeout_secs: 5,
                token: None,
            },
            log: LogConfig {
                filter: "warn".to_string(),
            },
        }
    }
}

/// Parse `name=glyph,name=glyph`; malformed pairs are dropped
fn parse_glyphs(s: &str) -> BTreeMap<String, String> {
    s.split(',')
        .filter_map(|pair| {
            let (name, glyph) = pair.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), glyph.trim().to_string()))
        })
        .collect()
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
