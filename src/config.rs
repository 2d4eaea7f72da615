//! Environment-driven settings.

use as_codec::{Codec, CodecConfig};
use as_vocab::Kind;
use thiserror::Error;

pub const LENIENT: &str = "ACTIVITYSTREAMS_LENIENT";
pub const ARRAY_PROPERTIES: &str = "ACTIVITYSTREAMS_ARRAY_PROPERTIES";
pub const LOG_FORMAT: &str = "ACTIVITYSTREAMS_LOG_FORMAT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a boolean, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
    #[error("{name} must be `text` or `json`, got {value:?}")]
    InvalidLogFormat { name: &'static str, value: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Resolve unknown discriminators to each interface's fallback.
    pub lenient: bool,
    pub codec: CodecConfig,
    pub log_format: LogFormat,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which returns the value of a variable
    /// if it is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lenient = match lookup(LENIENT) {
            Some(value) => parse_flag(LENIENT, &value)?,
            None => false,
        };

        let codec = lookup(ARRAY_PROPERTIES)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|property| !property.is_empty())
                    .fold(CodecConfig::default(), |config, property| {
                        config.with_array_property(property)
                    })
            })
            .unwrap_or_default();

        let log_format = match lookup(LOG_FORMAT) {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "" | "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidLogFormat {
                        name: LOG_FORMAT,
                        value,
                    })
                }
            },
            None => LogFormat::default(),
        };

        Ok(Self {
            lenient,
            codec,
            log_format,
        })
    }

    /// A codec over the registry and options these settings select.
    pub fn codec(&self) -> Codec<'static, Kind> {
        as_vocab::codec_with(self.lenient, self.codec.clone())
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_owned(),
        }),
    }
}
