// src/setup.rs

use std::env;
use std::fmt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FORM: &str = "donation-tracker";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormKind {
    EventSignup,
    DonationTracker,
}

impl FormKind {
    fn parse(name: &str) -> Result<Self, ConfigError> {
        match name {
            "event-signup" => Ok(FormKind::EventSignup),
            "donation-tracker" => Ok(FormKind::DonationTracker),
            other => Err(ConfigError::UnknownForm(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub(crate) enum ConfigError {
    UnknownForm(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownForm(name) => write!(
                f,
                "unknown form \"{}\", expected \"event-signup\" or \"donation-tracker\"",
                name
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub form: FormKind,
    /// JSON file of field id to value; stdin when absent
    pub values_path: Option<String>,
    pub json_logs: bool,
}

impl Config {
    /// Reads `FORMCHECK_*` variables, letting positional arguments
    /// `[form] [values-file]` override them.
    pub fn from_env(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut args = args.into_iter();

        let form = args
            .next()
            .or_else(|| env::var("FORMCHECK_FORM").ok())
            .unwrap_or_else(|| DEFAULT_FORM.to_string());
        let values_path = args
            .next()
            .or_else(|| env::var("FORMCHECK_VALUES").ok())
            .filter(|p| !p.is_empty());
        let json_logs = env::var("FORMCHECK_LOG_FORMAT")
            .map(|f| f.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(Config {
            form: FormKind::parse(&form)?,
            values_path,
            json_logs,
        })
    }
}

pub(crate) fn set_up_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json_logs {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}
