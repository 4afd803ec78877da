use warenbuchung_core::{action, print_success};

use super::{GlobalArgs, SubcmdResult};
use crate::{config, util};

/// Write an example config file (to `--config` or the user's config dir)
#[derive(Debug, clap::Args)]
pub struct Args {}

pub fn exec(_args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let path = config::filepath(global_args)?;
    action::init_config_file(&path)?;
    print_success!(
        "Successfully created config file. (path: {})",
        util::replace_homedir_to_tilde(path).to_string_lossy()
    );
    Ok(())
}
