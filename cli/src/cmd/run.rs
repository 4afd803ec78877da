use anyhow::ensure;
use url::Url;
use warenbuchung_core::{action, outcome::ProbeReport, ProbeConfig};
use warenbuchung_webclient::{Credential, WarenbuchungClient};

use super::{GlobalArgs, SubcmdResult};
use crate::{config, util};

/// Try each credential against the login endpoint and print the result per user
#[derive(Debug, Default, clap::Args)]
pub struct Args {
    /// Root of the API, e.g. http://localhost:5232/api
    #[arg(long)]
    pub base_url: Option<Url>,

    /// USER:PASSWORD to try, replaces the configured list (repeatable)
    #[arg(long, value_parser = util::parse_credential)]
    pub cred: Vec<Credential>,

    /// Exit with status 1 if any login failed
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    pub fn apply_to(&self, mut cfg: ProbeConfig) -> ProbeConfig {
        let Args {
            base_url,
            cred,
            strict: _,
        } = self;

        base_url.as_ref().map(|u| cfg.base_url = u.clone());
        if !cred.is_empty() {
            cfg.credentials = cred.clone();
        }
        cfg
    }
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = args.apply_to(config::load_probe_config(global_args)?);
    let cli = WarenbuchungClient::new(cfg.base_url.clone())?;

    let mut stdout = std::io::stdout().lock();
    let report = action::run_probe(&cli, &cfg.credentials, &mut stdout).await?;

    self::check_strict(args.strict, &report)
}

/// With `strict`, any failed login turns into an error (exit status 1).
pub fn check_strict(strict: bool, report: &ProbeReport) -> SubcmdResult {
    ensure!(
        !strict || report.all_passed(),
        "{}/{} login(s) failed",
        report.num_failed(),
        report.num_total()
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use warenbuchung_core::outcome::{FailureKind, ProbeOutcome};

    fn report_of(outcomes: Vec<ProbeOutcome>) -> ProbeReport {
        let mut report = ProbeReport::default();
        for (i, outcome) in outcomes.into_iter().enumerate() {
            report.push(Credential::new(format!("user{}", i), "admin123"), outcome);
        }
        report
    }

    #[test]
    fn strict_fails_only_on_failed_login() {
        let passing = report_of(vec![
            ProbeOutcome::Success { locations: vec![] },
            ProbeOutcome::Success {
                locations: vec!["Berlin".to_owned()],
            },
        ]);
        let failing = report_of(vec![
            ProbeOutcome::Success { locations: vec![] },
            ProbeOutcome::Failure(FailureKind::NoToken),
            ProbeOutcome::Failure(FailureKind::Transport),
        ]);

        assert!(check_strict(false, &passing).is_ok());
        assert!(check_strict(false, &failing).is_ok());
        assert!(check_strict(true, &passing).is_ok());

        let err = check_strict(true, &failing).unwrap_err();
        assert_eq!(err.to_string(), "2/3 login(s) failed");
    }

    #[test]
    fn strict_without_credentials_passes() {
        assert!(check_strict(true, &ProbeReport::default()).is_ok());
    }

    #[test]
    fn no_args_keep_config() {
        let cfg = Args::default().apply_to(ProbeConfig::default());
        assert_eq!(cfg, ProbeConfig::default());
    }

    #[test]
    fn args_override_config() {
        let args = Args {
            base_url: Some(Url::parse("http://10.0.2.2:5232/api").unwrap()),
            cred: vec![Credential::new("lager", "secret")],
            strict: true,
        };
        let cfg = args.apply_to(ProbeConfig::default());
        assert_eq!(cfg.base_url.as_str(), "http://10.0.2.2:5232/api");
        assert_eq!(cfg.credentials, vec![Credential::new("lager", "secret")]);
    }
}
