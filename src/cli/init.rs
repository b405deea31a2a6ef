//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;

use foodscan::config::Config;

/// Write the default config to `config_path` (or the global location)
pub fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if !Config::write_template(&config_path, force)? {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    println!("Created: {}", config_path.display());
    Ok(())
}
