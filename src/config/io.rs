//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

/// Default configuration content for `foodscan init`
pub const DEFAULT_CONFIG: &str = r#"# foodscan configuration
# =======================

# ============================================================================
# SETTINGS
# ============================================================================
#
#   scan_timeout_ms - How long a scan waits for a barcode (default: 3000)

[settings]
scan_timeout_ms = 3000

# ============================================================================
# DATABASE - Where product records come from
# ============================================================================
#
# Products are fetched from {base_url}/api/v0/product/{barcode}.json
#
#   base_url             - Product database root (default: Open Food Facts)
#   user_agent           - Identifies this client to the database
#   request_timeout_secs - Give up on a lookup after this many seconds

[database]
base_url = "https://world.openfoodfacts.org"
request_timeout_secs = 10

# ============================================================================
# PROFILE - Your diets
# ============================================================================
#
# Built-in rules exist for: vegan
# `--diet` on the command line replaces this list for one run.

[profile]
diets = []

# ============================================================================
# RULES - Extra diet rule families
# ============================================================================
#
# A rule fires when any trigger occurs (case-insensitive) in the ingredients.
# When several rules fire, the most restrictive status wins (NO > MODERATE > YES).
#
#   [[rule]]
#   diet = "vegetarian"
#   triggers = ["gelatin", "rennet"]
#   status = "NO"
#   reason = "Contains animal-derived setting agents."
#   health_score = 20                  # optional, defaults from status
#   harmful_ingredients = "Gelatin"    # optional, defaults from status
"#;

impl Config {
    /// Get the global config directory path (~/.foodscan/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".foodscan")
    }

    /// Get the global config file path (~/.foodscan/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load `path` if given, otherwise the global config.
    ///
    /// A missing global config is created from [`DEFAULT_CONFIG`]; if that
    /// fails the defaults are used without touching the disk.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let global_path = Self::global_config_path();
        if !global_path.exists() {
            if let Err(e) = Self::write_template(&global_path, false) {
                tracing::warn!("Failed to create default config: {}", e);
                return Ok(Self::default());
            }
        }

        Self::from_file(&global_path)
    }

    /// Save configuration to a file with atomic write and file locking.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        write_locked(path, &content)
    }

    /// Write the commented default template to `path`.
    ///
    /// Returns `false` without writing when the file exists and `force` is not set.
    pub fn write_template(path: &Path, force: bool) -> Result<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        write_locked(path, DEFAULT_CONFIG)?;
        Ok(true)
    }
}

/// Atomic write (temp file + rename) under an exclusive lock file
fn write_locked(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }

    // Lock file is separate from the config so the rename cannot invalidate it
    let lock_path = path.with_extension("toml.lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    lock_file
        .lock_exclusive()
        .with_context(|| "Failed to acquire config lock")?;

    let temp_path = path.with_extension("toml.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write config content")?;

    temp_file
        .sync_all()
        .with_context(|| "Failed to sync config file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

    // Lock is released when lock_file is dropped
    Ok(())
}
