use colored::Color;

use crate::outcome::Verdict;

#[macro_export]
macro_rules! print_success {
    ($fmt:literal, $($e:tt)*) => {
        use ::colored::Colorize as _;
        println!("{}", format!($fmt, $($e)*).green())
    }
}

pub fn is_truecolor_supported() -> bool {
    let Ok(v) = std::env::var("COLORTERM") else {
        return false
    };
    match v.as_str() {
        "truecolor" | "24bit" => true,
        _ => false,
    }
}

pub trait ColorTheme {
    fn color(&self) -> Color;
}

impl ColorTheme for log::Level {
    fn color(&self) -> Color {
        use log::Level::*;
        match self {
            Error => Color::BrightRed,
            Warn => Color::BrightYellow,
            Info => Color::Cyan,
            Debug => Color::Magenta,
            Trace => Color::Blue,
        }
    }
}

impl ColorTheme for Verdict {
    fn color(&self) -> Color {
        use Verdict::*;
        if !self::is_truecolor_supported() {
            return match self {
                Success => Color::Green,
                Failed => Color::Red,
            };
        }

        match self {
            Success => Color::TrueColor {
                r: 30,
                g: 180,
                b: 40,
            },
            Failed => Color::TrueColor {
                r: 220,
                g: 42,
                b: 42,
            },
        }
    }
}

/// Uncolored: the probe output is scraped line by line.
pub const fn verdict_icon(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Success => "✅",
        Verdict::Failed => "❌",
    }
}
