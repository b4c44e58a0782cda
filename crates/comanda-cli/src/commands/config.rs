//! Config command - inspect and edit the comanda configuration file.
//!
//! Every subcommand works on the file given with the global `--config` flag,
//! or on `<config dir>/comanda/config.json` when none is given.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use comanda_core::models::config::ComandaConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration and where it comes from
    Show,

    /// Write a configuration file with the default settings
    Init {
        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Get a configuration value
    Get {
        /// Dotted key (e.g., "extraction.include_fees")
        key: String,
    },

    /// Set a configuration value; the value must fit the setting's type
    Set {
        /// Dotted key (e.g., "output.format")
        key: String,
        /// New value
        value: String,
    },

    /// Print the configuration file path
    Path,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let file = ConfigFile::locate(config_path);

    match args.command {
        ConfigCommand::Show => {
            let source = if file.exists() { "file" } else { "defaults" };
            println!(
                "{} {} ({})",
                style("ℹ").blue(),
                file.path.display(),
                source
            );
            println!("{}", serde_json::to_string_pretty(&file.load()?)?);
        }
        ConfigCommand::Init { force } => {
            if file.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    file.path.display()
                );
            }
            file.save(&ComandaConfig::default())?;
            println!("{} Created {}", style("✓").green(), file.path.display());
        }
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(file.load()?)?;
            println!("{}", serde_json::to_string_pretty(lookup(&json, &key)?)?);
        }
        ConfigCommand::Set { key, value } => {
            let mut json = serde_json::to_value(file.load()?)?;
            let new_value = assign(&mut json, &key, &value)?;

            // The typed config rejects values such as an unknown output format
            let config: ComandaConfig = serde_json::from_value(json)?;
            file.save(&config)?;

            println!("{} {} = {}", style("✓").green(), key, new_value);
        }
        ConfigCommand::Path => println!("{}", file.path.display()),
    }

    Ok(())
}

/// Location of the configuration file in use.
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// The explicit `--config` path, else the per-user default.
    pub fn locate(config_path: Option<&str>) -> Self {
        let path = config_path.map(PathBuf::from).unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("comanda")
                .join("config.json")
        });
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Settings from the file, or the defaults when it does not exist yet.
    pub fn load(&self) -> anyhow::Result<ComandaConfig> {
        if self.exists() {
            Ok(ComandaConfig::from_file(&self.path)?)
        } else {
            Ok(ComandaConfig::default())
        }
    }

    fn save(&self, config: &ComandaConfig) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(config.save(&self.path)?)
    }
}

/// Resolve a dotted key such as `output.format`.
fn lookup<'a>(json: &'a Value, key: &str) -> anyhow::Result<&'a Value> {
    key.split('.').try_fold(json, |current, part| {
        current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
    })
}

/// Replace an existing leaf setting, parsing `raw` as the type already there.
fn assign(json: &mut Value, key: &str, raw: &str) -> anyhow::Result<Value> {
    let slot = key
        .split('.')
        .try_fold(json, |current, part| current.get_mut(part))
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;

    let value = match slot {
        Value::Bool(_) => match raw.trim().to_lowercase().as_str() {
            "true" | "yes" | "on" => Value::Bool(true),
            "false" | "no" | "off" => Value::Bool(false),
            _ => anyhow::bail!("{} expects true or false, got {:?}", key, raw),
        },
        Value::String(_) => Value::String(raw.trim().to_string()),
        Value::Object(_) => anyhow::bail!("{} is a section; set one of its keys", key),
        _ => serde_json::from_str(raw)
            .map_err(|_| anyhow::anyhow!("Invalid value for {}: {:?}", key, raw))?,
    };

    *slot = value.clone();
    Ok(value)
}
