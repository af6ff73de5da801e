use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default price list endpoint.
pub const DEFAULT_PRICES_URL: &str = "https://interview.switcheo.com/prices.json";

/// Default base URL for token icons; `{base}/{SYMBOL}.svg`.
pub const DEFAULT_ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

fn default_prices_url() -> String {
    DEFAULT_PRICES_URL.to_string()
}

fn default_icon_base_url() -> String {
    DEFAULT_ICON_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Display/output formatting configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// If set, USD values are rounded to this many decimal places before
    /// being rendered as strings.
    ///
    /// This is purely a presentation setting and does not affect calculations.
    pub currency_decimals: Option<u32>,

    /// When true, render USD values with thousands separators.
    pub currency_grouping: bool,

    /// Optional currency symbol (e.g. "$") for display rendering.
    pub currency_symbol: Option<String>,

    /// When true and `currency_decimals` is set, display values with exactly
    /// that many decimal places (padding with trailing zeros).
    pub currency_fixed_decimals: bool,
}

/// Price feed configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricesConfig {
    /// HTTP endpoint serving the JSON price list.
    #[serde(default = "default_prices_url")]
    pub url: String,

    /// Local price list used instead of the HTTP feed. If relative, resolved
    /// from the config file location.
    pub file: Option<PathBuf>,

    /// HTTP request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Base URL for token icons.
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,
}

impl Default for PricesConfig {
    fn default() -> Self {
        Self {
            url: default_prices_url(),
            file: None,
            timeout_secs: default_timeout_secs(),
            icon_base_url: default_icon_base_url(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display/output formatting settings.
    pub display: DisplayConfig,

    /// Price feed settings.
    pub prices: PricesConfig,
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load config from a file, or return default config if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Loaded configuration with resolved paths.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// Display/output formatting settings.
    pub display: DisplayConfig,

    /// Price feed settings; `file` is absolute when set.
    pub prices: PricesConfig,
}

/// Returns the default config file path.
///
/// Resolution order:
/// 1. `./walletview.toml` if it exists in current directory
/// 2. `~/.local/share/walletview/walletview.toml` (XDG data directory)
pub fn default_config_path() -> PathBuf {
    let local_config = PathBuf::from("walletview.toml");
    if local_config.exists() {
        return local_config;
    }

    if let Some(data_dir) = dirs::data_dir() {
        return data_dir.join("walletview").join("walletview.toml");
    }

    local_config
}

fn resolve_relative(path: &Path, config_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        config_dir.join(path)
    }
}

impl ResolvedConfig {
    /// Load and resolve config from a file path.
    ///
    /// A relative `prices.file` is resolved against the config file's parent
    /// directory.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_path = config_path
            .canonicalize()
            .with_context(|| format!("Config file not found: {}", config_path.display()))?;

        let config_dir = config_path
            .parent()
            .context("Config file has no parent directory")?;

        let mut config = Config::load(&config_path)?;
        config.prices.file = config
            .prices
            .file
            .as_deref()
            .map(|file| resolve_relative(file, config_dir));

        Ok(Self {
            display: config.display,
            prices: config.prices,
        })
    }

    /// Load config, falling back to defaults if the file doesn't exist.
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            Self::load(config_path)
        } else {
            tracing::debug!(path = %config_path.display(), "config file not found; using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_empty_config() -> Result<()> {
        let dir = TempDir::new()?;
        let config_path = dir.path().join("walletview.toml");

        std::fs::File::create(&config_path)?;

        let config = Config::load(&config_path)?;
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.prices, PricesConfig::default());

        Ok(())
    }

    #[test]
    fn test_load_display_config() -> Result<()> {
        let dir = TempDir::new()?;
        let config_path = dir.path().join("walletview.toml");

        let mut file = std::fs::File::create(&config_path)?;
        writeln!(file, "[display]")?;
        writeln!(file, "currency_decimals = 2")?;
        writeln!(file, "currency_grouping = true")?;
        writeln!(file, "currency_symbol = \"$\"")?;

        let config = Config::load(&config_path)?;
        assert_eq!(config.display.currency_decimals, Some(2));
        assert!(config.display.currency_grouping);
        assert_eq!(config.display.currency_symbol.as_deref(), Some("$"));
        assert!(!config.display.currency_fixed_decimals);

        Ok(())
    }

    #[test]
    fn test_load_prices_config_keeps_defaults_for_missing_keys() -> Result<()> {
        let dir = TempDir::new()?;
        let config_path = dir.path().join("walletview.toml");

        let mut file = std::fs::File::create(&config_path)?;
        writeln!(file, "[prices]")?;
        writeln!(file, "timeout_secs = 3")?;

        let config = Config::load(&config_path)?;
        assert_eq!(config.prices.timeout_secs, 3);
        assert_eq!(config.prices.url, DEFAULT_PRICES_URL);
        assert_eq!(config.prices.icon_base_url, DEFAULT_ICON_BASE_URL);
        assert_eq!(config.prices.file, None);

        Ok(())
    }

    #[test]
    fn test_invalid_config_reports_path() -> Result<()> {
        let dir = TempDir::new()?;
        let config_path = dir.path().join("walletview.toml");
        std::fs::write(&config_path, "[display\n")?;

        let err = Config::load(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        Ok(())
    }

    #[test]
    fn test_resolved_config_resolves_relative_prices_file() -> Result<()> {
        let dir = TempDir::new()?;
        let config_path = dir.path().join("walletview.toml");

        let mut file = std::fs::File::create(&config_path)?;
        writeln!(file, "[prices]")?;
        writeln!(file, "file = \"data/prices.json\"")?;

        let resolved = ResolvedConfig::load(&config_path)?;
        let expected = dir.path().canonicalize()?.join("data/prices.json");
        assert_eq!(resolved.prices.file, Some(expected));

        Ok(())
    }

    #[test]
    fn test_resolved_config_load_or_default_missing_file() -> Result<()> {
        let dir = TempDir::new()?;
        let config_path = dir.path().join("missing.toml");

        let resolved = ResolvedConfig::load_or_default(&config_path)?;
        assert_eq!(resolved.prices.url, DEFAULT_PRICES_URL);
        assert_eq!(resolved.prices.file, None);

        Ok(())
    }
}
