//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/gs/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# gs - inventory search configuration

# Config schema version (do not modify)
version = 1

# Inventory snapshot to search (can also use --inventory or GS_INVENTORY)
# inventory = "/path/to/inventory.json"

# Replacement word tables (season names, stat names, power caps)
# lexicon = "/path/to/lexicon.json"

# Store id used by is:incurrentchar, overriding the inventory file
# current_store = "2305843009"

# Output preferences
[output]
# color = true              # Enable colors (respects NO_COLOR env)

# Search settings
[search]
# limit = 50                # Items shown by 'gs search' without --all
"#;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Inventory file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<PathBuf>,

    /// Lexicon file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,

    /// Current store id override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_store: Option<String>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Search settings.
    #[serde(default)]
    pub search: SearchConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            inventory: None,
            lexicon: None,
            current_store: None,
            output: OutputConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Search configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default result limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Gets the config file path.
///
/// `GS_CONFIG` wins, then `$XDG_CONFIG_HOME/gs/config.toml`, then
/// `~/.config/gs/config.toml` on all platforms.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("GS_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("gs").join("config.toml"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("gs").join("config.toml"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Loads the configuration from disk.
///
/// A missing file yields the default configuration.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let mut config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;
    config.version = CONFIG_VERSION;

    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        if path.exists() {
            println!("Settings:");
            if let Some(ref inventory) = config.inventory {
                println!("  inventory: {}", inventory.display());
            }
            if let Some(ref lexicon) = config.lexicon {
                println!("  lexicon: {}", lexicon.display());
            }
            if let Some(ref store) = config.current_store {
                println!("  current_store: {}", store);
            }

            println!("\n[output]");
            if let Some(color) = config.output.color {
                println!("  color: {}", color);
            }

            println!("\n[search]");
            if let Some(limit) = config.search.limit {
                println!("  limit: {}", limit);
            }
        } else {
            println!("(No config file exists. Run 'gs config init' to create one.)");
        }
    }

    Ok(())
}

/// Executes the config init command.
///
/// Writes the commented default config. An existing file is left untouched.
pub fn execute_init(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;
    let created = !path.exists();

    if created {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CommandError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }
        fs::write(&path, DEFAULT_CONFIG)
            .map_err(|e| CommandError::Config(format!("Failed to create config file: {}", e)))?;
        tracing::info!(path = %path.display(), "created default config");
    }

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "created": created,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        if created {
            println!("Created default config at: {}", path.display());
        } else {
            println!("Config already exists at: {}", path.display());
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    let path = get_config_path()?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Sets one `section.field` (or top-level `field`) on a config.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let (section, field) = match key.split_once('.') {
        Some((section, field)) => (Some(section), field),
        None => (None, key),
    };

    match (section, field) {
        (None, "inventory") => config.inventory = Some(PathBuf::from(value)),
        (None, "lexicon") => config.lexicon = Some(PathBuf::from(value)),
        (None, "current_store") => config.current_store = Some(value.to_string()),
        (Some("output"), "color") => config.output.color = Some(parse_bool(value)?),
        (Some("search"), "limit") => {
            let limit = value.parse::<u32>().map_err(|_| {
                CommandError::Config(format!(
                    "Invalid limit '{}'. Use a non-negative integer",
                    value
                ))
            })?;
            config.search.limit = Some(limit);
        }
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: inventory, lexicon, current_store, output.color, search.limit",
                key
            )));
        }
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tempfile::TempDir;

    use super::*;

    /// Points `GS_CONFIG` at `path` for the duration of `f`.
    fn with_config_path<T>(path: &std::path::Path, f: impl FnOnce() -> T) -> T {
        let original = env::var("GS_CONFIG").ok();
        env::set_var("GS_CONFIG", path);
        let result = f();
        match original {
            Some(value) => env::set_var("GS_CONFIG", value),
            None => env::remove_var("GS_CONFIG"),
        }
        result
    }

    #[test]
    fn test_parse_bool_values() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("YES").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(!parse_bool("False").unwrap());
        assert!(parse_bool("maybe").is_err());
        assert!(parse_bool("").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.inventory.is_none());
        assert!(config.lexicon.is_none());
        assert!(config.output.color.is_none());
        assert!(config.search.limit.is_none());
    }

    #[test]
    fn test_default_config_text_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.inventory.is_none());
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
version = 1
inventory = "/data/inventory.json"
current_store = "hunter"

[output]
color = false

[search]
limit = 20
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.inventory, Some(PathBuf::from("/data/inventory.json")));
        assert_eq!(config.current_store.as_deref(), Some("hunter"));
        assert_eq!(config.output.color, Some(false));
        assert_eq!(config.search.limit, Some(20));
    }

    #[test]
    fn test_config_deserialization_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.inventory.is_none());
    }

    #[test]
    fn test_config_serialization_skips_unset() {
        let config = Config {
            search: SearchConfig { limit: Some(10) },
            ..Config::default()
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("version = 1"));
        assert!(toml_str.contains("[search]"));
        assert!(toml_str.contains("limit = 10"));
        assert!(!toml_str.contains("inventory"));
    }

    #[test]
    fn test_apply_setting() {
        let mut config = Config::default();
        apply_setting(&mut config, "inventory", "/tmp/inv.json").unwrap();
        apply_setting(&mut config, "output.color", "no").unwrap();
        apply_setting(&mut config, "search.limit", "25").unwrap();

        assert_eq!(config.inventory, Some(PathBuf::from("/tmp/inv.json")));
        assert_eq!(config.output.color, Some(false));
        assert_eq!(config.search.limit, Some(25));
    }

    #[test]
    fn test_apply_setting_rejects_bad_input() {
        let mut config = Config::default();
        assert!(apply_setting(&mut config, "search.limit", "-3").is_err());
        assert!(apply_setting(&mut config, "output.format", "wide").is_err());
        assert!(apply_setting(&mut config, "token", "abc").is_err());
    }

    #[test]
    #[serial]
    fn test_load_config_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = with_config_path(&path, load_config).unwrap();
        assert!(config.inventory.is_none());
    }

    #[test]
    #[serial]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let loaded = with_config_path(&path, || {
            let config = Config {
                lexicon: Some(PathBuf::from("/data/lexicon.json")),
                ..Config::default()
            };
            save_config(&config)?;
            load_config()
        })
        .unwrap();

        assert_eq!(loaded.lexicon, Some(PathBuf::from("/data/lexicon.json")));
        assert!(path.exists());
    }

    #[test]
    #[serial]
    fn test_load_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "version = [").unwrap();

        let result = with_config_path(&path, load_config);
        assert!(matches!(result, Err(CommandError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_load_config_stamps_current_version() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "version = 0\ncurrent_store = \"warlock\"\n").unwrap();

        let config = with_config_path(&path, load_config).unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.current_store.as_deref(), Some("warlock"));
    }
}
