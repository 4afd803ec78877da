use url::Url;
use warenbuchung_core::{action, print_success};
use warenbuchung_webclient::WarenbuchungClient;

use super::{GlobalArgs, SubcmdResult};
use crate::config;

/// Check that the API answers `GET /health`
#[derive(Debug, Default, clap::Args)]
pub struct Args {
    /// Root of the API, e.g. http://localhost:5232/api
    #[arg(long)]
    pub base_url: Option<Url>,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let mut cfg = config::load_probe_config(global_args)?;
    args.base_url.as_ref().map(|u| cfg.base_url = u.clone());

    let cli = WarenbuchungClient::new(cfg.base_url.clone())?;
    let health = action::check_health(&cli).await?;
    print_success!(
        "✅ API reachable at {} (status: {})",
        cfg.base_url,
        health.status
    );
    Ok(())
}
