//! CLI subcommands.

pub mod batch;
pub mod check;
pub mod config;
pub mod extract;
pub mod validate;

use resumex_core::ResumexConfig;

/// Load configuration from an explicit path, the default location, or defaults.
///
/// A file named with `--config` must exist.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ResumexConfig> {
    let path = config::resolve_path(config_path);

    if config_path.is_some() || path.exists() {
        Ok(ResumexConfig::from_file(&path)?)
    } else {
        Ok(ResumexConfig::default())
    }
}
