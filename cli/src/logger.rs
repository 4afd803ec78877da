use std::io::Write as _;

use colored::Colorize as _;
use warenbuchung_core::style::ColorTheme as _;

/// Log to stderr. Filter defaults to `warn`, override with `RUST_LOG`.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let level = record.level();
            writeln!(
                buf,
                "[{}] {}",
                level.as_str().color(level.color()).bold(),
                record.args()
            )
        })
        .init();
}
