//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod parse;

use tracing::debug;

use comanda_core::models::config::ComandaConfig;

use config::ConfigFile;

/// Load settings for `parse` and `batch`.
///
/// An explicit `--config` file must exist; the per-user file is optional.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ComandaConfig> {
    let file = ConfigFile::locate(config_path);
    if config_path.is_some() && !file.exists() {
        anyhow::bail!("Config file not found: {}", file.path().display());
    }

    debug!("Loading configuration from {}", file.path().display());
    file.load()
}
