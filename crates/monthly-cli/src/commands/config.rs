use std::path::Path;

use clap::Subcommand;
use monthly_core::MonthlyConfig;

use super::load_config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (weekend, locale, datebook)
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

fn save(config: Option<&Path>, cfg: &MonthlyConfig) -> monthly_core::Result<()> {
    match config {
        Some(path) => cfg.save_to(path),
        None => cfg.save(),
    }
}

pub fn run(config: Option<&Path>, action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let cfg = load_config(config)?;
            match cfg.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut cfg = load_config(config)?;
            cfg.set(&key, &value)?;
            save(config, &cfg)?;
            println!("ok");
        }
        ConfigAction::List => {
            let cfg = load_config(config)?;
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
        ConfigAction::Reset => {
            save(config, &MonthlyConfig::default())?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
