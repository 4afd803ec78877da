pub mod health;
pub mod init;
pub mod run;

use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct GlobalArgs {
    #[command(subcommand)]
    pub subcmd: Option<Subcommand>,

    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    Run(run::Args),
    Health(health::Args),
    Init(init::Args),
}

pub type SubcmdResult = anyhow::Result<()>;

impl GlobalArgs {
    pub async fn exec_subcmd(&self) -> SubcmdResult {
        use Subcommand::*;
        match &self.subcmd {
            None => run::exec(&run::Args::default(), self).await,
            Some(Run(args)) => run::exec(args, self).await,
            Some(Health(args)) => health::exec(args, self).await,
            Some(Init(args)) => init::exec(args, self),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser as _;
    use pretty_assertions::assert_eq;
    use warenbuchung_webclient::Credential;

    #[test]
    fn no_subcommand_means_run() {
        let args = GlobalArgs::try_parse_from(["login-probe"]).unwrap();
        assert!(args.subcmd.is_none());
        assert_eq!(args.config, None);
    }

    #[test]
    fn run_args() {
        let args = GlobalArgs::try_parse_from([
            "login-probe",
            "run",
            "--base-url",
            "http://127.0.0.1:8080/api",
            "--cred",
            "admin:admin123",
            "--cred",
            "lager:pw:with:colons",
            "--strict",
            "--config",
            "/tmp/probe.toml",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("/tmp/probe.toml")));
        let Some(Subcommand::Run(run)) = args.subcmd else {
            panic!("expected run subcommand")
        };
        assert_eq!(
            run.base_url.map(|u| u.to_string()),
            Some("http://127.0.0.1:8080/api".to_owned())
        );
        assert_eq!(
            run.cred,
            vec![
                Credential::new("admin", "admin123"),
                Credential::new("lager", "pw:with:colons"),
            ]
        );
        assert!(run.strict);
    }

    #[test]
    fn invalid_args() {
        assert!(GlobalArgs::try_parse_from(["login-probe", "run", "--cred", "admin"]).is_err());
        assert!(
            GlobalArgs::try_parse_from(["login-probe", "run", "--base-url", "not a url"]).is_err()
        );
        assert!(GlobalArgs::try_parse_from(["login-probe", "logout"]).is_err());
    }
}
