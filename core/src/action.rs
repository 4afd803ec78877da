pub mod error {
    #[allow(unused_imports)]
    pub(crate) use anyhow::{anyhow, bail, ensure, Context as _};
    pub use anyhow::{Error, Result};
}
use std::io::Write;
use std::path::Path;

use colored::Colorize;
use error::*;
use warenbuchung_webclient::{AuthService, Credential, HealthStatus};

use crate::config::ProbeConfig;
use crate::outcome::{ProbeOutcome, ProbeReport};
use crate::style::{self, ColorTheme as _};

pub const BANNER_TITLE: &str = "=== Warenbuchung User Test ===";
pub const BANNER_SUBTITLE: &str = "Testing different users and passwords...";
pub const FOOTER: &str = "=== Test Complete ===";

/// Try every credential against the login endpoint, one after another,
/// writing the human readable result to `out`.
///
/// A failed login never aborts the run; only a failure to write to `out` does.
pub async fn run_probe<W: Write>(
    svc: &dyn AuthService,
    credentials: &[Credential],
    out: &mut W,
) -> Result<ProbeReport> {
    log::info!(
        "Probing {} credential(s) against {}",
        credentials.len(),
        svc.base_url()
    );

    writeln!(out, "{}\n", BANNER_TITLE)?;
    writeln!(out, "{}\n", BANNER_SUBTITLE)?;

    let mut report = ProbeReport::default();

    for (i, cred) in credentials.iter().enumerate() {
        writeln!(out, "{}. Testing {} user:", i + 1, cred.username)?;

        let outcome = ProbeOutcome::classify(svc.login(cred).await);
        self::log_outcome(cred, &outcome);
        self::write_outcome(out, cred, &outcome)?;
        writeln!(out)?;

        report.push(cred.clone(), outcome);
    }

    writeln!(out, "{}", FOOTER)?;
    out.flush()?;
    Ok(report)
}

pub fn write_outcome<W: Write>(
    out: &mut W,
    cred: &Credential,
    outcome: &ProbeOutcome,
) -> Result<()> {
    let Credential { username, password } = cred;
    let verdict = outcome.verdict();
    let icon = style::verdict_icon(verdict);

    match outcome {
        ProbeOutcome::Success { locations } => {
            writeln!(out, "{} {} / {} - {}", icon, username, password, verdict)?;
            if locations.is_empty() {
                writeln!(out, "   Locations: none")?;
            } else {
                writeln!(out, "   Locations: {}", locations.join(", "))?;
            }
        }
        ProbeOutcome::Failure(kind) => {
            writeln!(
                out,
                "{} {} / {} - {} ({})",
                icon, username, password, verdict, kind
            )?;
        }
    }
    Ok(())
}

fn log_outcome(cred: &Credential, outcome: &ProbeOutcome) {
    let verdict = outcome.verdict();
    let tag = verdict.to_string().color(verdict.color()).bold();
    match outcome {
        ProbeOutcome::Success { locations } => {
            log::info!("{}: {} ({} location(s))", cred.username, tag, locations.len())
        }
        ProbeOutcome::Failure(kind) => log::warn!("{}: {} ({})", cred.username, tag, kind),
    }
}

pub async fn check_health(svc: &dyn AuthService) -> Result<HealthStatus> {
    svc.health()
        .await
        .with_context(|| format!("API is not reachable at {}", svc.base_url()))
}

/// Write the example config to `path`, creating parent dirs. Never overwrites.
pub fn init_config_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    ensure!(!path.exists(), "Config file already exists: {:?}", path);

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config dir {:?}", dir))?;
    }
    std::fs::write(path, ProbeConfig::example_toml())
        .with_context(|| format!("Failed to write config file {:?}", path))
}
