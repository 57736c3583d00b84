//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.draftbox/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::composer::ComposerOptions;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DraftboxConfig {
    #[serde(default)]
    pub composer: ComposerSection,
    #[serde(default)]
    pub quick_actions: Vec<QuickActionEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ComposerSection {
    pub placeholder: Option<String>,
    pub max_height: Option<u16>,
    pub disabled: Option<bool>,
    pub show_emoji: Option<bool>,
    pub show_attachment: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QuickActionEntry {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
}

/// Values supplied on the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub max_height: Option<u16>,
    pub disabled: bool,
    pub no_attach: bool,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PLACEHOLDER: &str = "Type a message...";

/// Terminal rows are much coarser than pixels, so the on-disk default is small.
pub const DEFAULT_TERMINAL_MAX_HEIGHT: u16 = 8;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub options: ComposerOptions,
    pub quick_actions: Vec<QuickActionEntry>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.draftbox/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".draftbox").join("config.toml"))
}

/// Load config from `path`, or from `~/.draftbox/config.toml` when `None`.
///
/// A missing default file is generated (commented out) and treated as empty.
/// A missing explicit file is an I/O error. Malformed files are
/// `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<DraftboxConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => {
                if !p.exists() {
                    info!("No config file found, generating default at {}", p.display());
                    generate_default_config(&p);
                    return Ok(DraftboxConfig::default());
                }
                p
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(DraftboxConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<DraftboxConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# draftbox configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [composer]
# placeholder = "Type a message..."   # Or set DRAFTBOX_PLACEHOLDER
# max_height = 8                      # Rows, including the border. Or DRAFTBOX_MAX_HEIGHT
# disabled = false
# show_emoji = true
# show_attachment = true

# [[quick_actions]]
# id = "schedule"
# label = "Schedule a meeting"
# icon = "@"

# [[quick_actions]]
# id = "availability"
# label = "Share availability"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DraftboxConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &DraftboxConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let section = &config.composer;

    // Placeholder: env → config → default
    let placeholder = env("DRAFTBOX_PLACEHOLDER")
        .or_else(|| section.placeholder.clone())
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

    // Max height: CLI → env → config → default
    let env_max_height = env("DRAFTBOX_MAX_HEIGHT").and_then(|v| match v.parse::<u16>() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("Ignoring DRAFTBOX_MAX_HEIGHT={v:?}: {e}");
            None
        }
    });
    let max_height = cli
        .max_height
        .or(env_max_height)
        .or(section.max_height)
        .unwrap_or(DEFAULT_TERMINAL_MAX_HEIGHT);

    let options = ComposerOptions {
        placeholder,
        disabled: cli.disabled || section.disabled.unwrap_or(false),
        max_height,
        show_emoji: section.show_emoji.unwrap_or(true),
        show_attachment: !cli.no_attach && section.show_attachment.unwrap_or(true),
    };

    ResolvedConfig {
        options,
        quick_actions: config.quick_actions.clone(),
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            options: ComposerOptions {
                max_height: DEFAULT_TERMINAL_MAX_HEIGHT,
                ..ComposerOptions::default()
            },
            quick_actions: Vec::new(),
        }
    }
}
