use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use projdoc_core::models::token::Token;
use projdoc_export::convert::ConverterConfig;
use projdoc_export::pipeline::InputMode;

pub const CONFIG_ENV: &str = "PROJDOC_CONFIG";
pub const BIND_ENV: &str = "PROJDOC_BIND";
pub const TEMPLATE_DIR_ENV: &str = "PROJDOC_TEMPLATE_DIR";
pub const CONVERTER_BIN_ENV: &str = "PROJDOC_CONVERTER_BIN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Directory holding `UG Internal Project.docx` and `UG External Project.docx`.
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,
    #[serde(default)]
    pub converter: ConverterConfig,
    #[serde(default)]
    pub input_mode: InputMode,
    /// Point sizes layered over the reference size table for both templates.
    #[serde(default)]
    pub font_sizes: BTreeMap<Token, usize>,
}

fn default_bind() -> String {
    "127.0.0.1:8501".to_string()
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("assets")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            template_dir: default_template_dir(),
            converter: ConverterConfig::default(),
            input_mode: InputMode::default(),
            font_sizes: BTreeMap::new(),
        }
    }
}

/// `$PROJDOC_CONFIG`, else `<config dir>/projdoc/config.json` when it exists.
fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|base| base.join("projdoc").join("config.json"))
        .filter(|path| path.exists())
}

/// Resolve the server configuration once at startup.
pub fn load_config() -> eyre::Result<ServerConfig> {
    let mut config = match config_path() {
        Some(path) => {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
            let config = parse_config(&contents)
                .map_err(|e| eyre::eyre!("invalid config at {}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), "config loaded");
            config
        }
        None => {
            tracing::warn!("no config file found, using defaults");
            ServerConfig::default()
        }
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

pub fn parse_config(contents: &str) -> eyre::Result<ServerConfig> {
    Ok(serde_json::from_str(contents)?)
}

/// Layer environment overrides on top of `config`. `lookup` maps a variable
/// name to its value.
pub fn apply_overrides(config: &mut ServerConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(bind) = lookup(BIND_ENV) {
        config.bind = bind;
    }
    if let Some(dir) = lookup(TEMPLATE_DIR_ENV) {
        config.template_dir = PathBuf::from(dir);
    }
    if let Some(binary) = lookup(CONVERTER_BIN_ENV) {
        config.converter.binary = Some(PathBuf::from(binary));
    }
}
