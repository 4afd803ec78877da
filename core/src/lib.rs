pub mod action;
pub mod config;
pub mod outcome;
pub mod style;

pub use crate::config::ProbeConfig;
