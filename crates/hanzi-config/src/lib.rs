use std::env;

use hanzi_core::numbering::IdNumbering;
use serde::{Deserialize, Serialize};

use self::output::OutputConfig;

pub mod output;

fn default_log_filter() -> String {
    "warn".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,

    /// Id counter policy when a run covers several levels
    pub numbering: IdNumbering,
    /// Emit log lines as JSON instead of text
    pub log_json: bool,
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Config {
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Read settings through `var`; missing or invalid values use defaults
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let numbering = var("HANZI_ID_NUMBERING")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let log_json = var("HANZI_LOG_JSON")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(false);

        let log_filter = var("HANZI_LOG_FILTER").unwrap_or_else(default_log_filter);

        Config {
            output: OutputConfig::from_vars(&var),

            numbering,
            log_json,
            log_filter,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            numbering: IdNumbering::default(),
            log_json: false,
            log_filter: default_log_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.indent, 2);
        assert_eq!(config.numbering, IdNumbering::PerLevel);
        assert!(!config.log_json);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"numbering":"global"}"#).unwrap();
        assert_eq!(config.numbering, IdNumbering::Global);
        assert_eq!(config.output.indent, 2);
        assert_eq!(config.log_filter, "warn");
    }

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_config_from_vars() {
        let config = Config::from_vars(vars(&[
            ("HANZI_JSON_INDENT", "4"),
            ("HANZI_ID_NUMBERING", "global"),
            ("HANZI_LOG_JSON", "true"),
            ("HANZI_LOG_FILTER", "debug"),
        ]));

        assert_eq!(config.output.indent, 4);
        assert_eq!(config.numbering, IdNumbering::Global);
        assert!(config.log_json);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_vars_fall_back_to_defaults() {
        let config = Config::from_vars(vars(&[
            ("HANZI_JSON_INDENT", "abc"),
            ("HANZI_ID_NUMBERING", "random"),
            ("HANZI_LOG_JSON", "yes please"),
        ]));
        assert_eq!(config, Config::default());

        let config = Config::from_vars(vars(&[("HANZI_JSON_INDENT", "0")]));
        assert_eq!(config.output.indent, 2);
    }

    #[test]
    fn test_new_reads_process_environment() {
        // The only test in this crate that touches the real environment
        unsafe {
            env::set_var("HANZI_JSON_INDENT", "0");
            env::set_var("HANZI_ID_NUMBERING", "global");
        }
        let config = Config::new();
        unsafe {
            env::remove_var("HANZI_JSON_INDENT");
            env::remove_var("HANZI_ID_NUMBERING");
        }

        assert_eq!(config.output.indent, 2);
        assert_eq!(config.numbering, IdNumbering::Global);
        assert_eq!(OutputConfig::new().indent, 2);
    }
}
