pub mod config;
pub mod month;

use std::path::Path;

use monthly_core::MonthlyConfig;

/// Load the config at `path`, or the default location when `None`.
pub fn load_config(path: Option<&Path>) -> monthly_core::Result<MonthlyConfig> {
    match path {
        Some(path) => MonthlyConfig::load_from(path),
        None => MonthlyConfig::load(),
    }
}
