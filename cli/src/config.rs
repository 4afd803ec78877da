use std::path::PathBuf;

use anyhow::Context as _;
use warenbuchung_core::{config::EnvOverrides, ProbeConfig};

use crate::cmd::GlobalArgs;

pub const APP_NAME: &str = "login-probe";

/// `--config` if given, else `<user config dir>/login-probe/login-probe.toml`.
pub fn filepath(args: &GlobalArgs) -> anyhow::Result<PathBuf> {
    if let Some(path) = &args.config {
        return Ok(path.clone());
    }
    let dir = dirs::config_dir().context("Failed to get user's config dir path")?;
    Ok(dir.join(APP_NAME).join(ProbeConfig::FILENAME))
}

/// Config file, then `LOGIN_PROBE_*` environment variables. Command line options are
/// applied by each subcommand on top of this.
pub fn load_probe_config(args: &GlobalArgs) -> anyhow::Result<ProbeConfig> {
    let path = self::filepath(args)?;
    log::debug!("Loading config {:?}", path);
    let cfg = ProbeConfig::from_file_or_default(&path)?;
    log::info!("Using {}", cfg.source_description());
    let env = EnvOverrides::from_env()?;
    Ok(cfg.with_env(env))
}
