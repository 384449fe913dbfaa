//! Provides configuration options.
//!
//! Native hosts layer options in the following order:
//! - default values;
//! - configuration file in TOML format, the name of which is given as a
//!   command line argument or an environment variable;
//! - environment variables.
//!
//! JS hosts pass options as a plain object, see [`Conf::from_json()`].

pub mod log;
pub mod stats;

use std::env;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

#[doc(inline)]
pub use self::{log::Log, stats::Stats};

#[doc(inline)]
pub use config::ConfigError;

/// CLI argument that is responsible for holding the path to the configuration
/// file.
pub const APP_CONF_PATH_CMD_ARG_NAME: &str = "--conf";

/// Environment variable that is responsible for holding the path to the
/// configuration file.
pub const APP_CONF_PATH_ENV_VAR_NAME: &str = "MEDEA_TRACK_STATS_CONF";

/// Prefix of the environment variables overriding configuration options.
pub const APP_CONF_ENV_PREFIX: &str = "MEDEA_TRACK_STATS";

/// Holds all the configuration options.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Conf {
    /// Logging settings.
    pub log: Log,

    /// Stats querying settings.
    pub stats: Stats,
}

impl Conf {
    /// Creates a new [`Conf`] and applies values from the following sources
    /// (in the following order):
    /// - default values;
    /// - configuration file, the name of which is given as a command line
    ///   parameter or environment variable;
    /// - environment variables.
    ///
    /// # Errors
    ///
    /// If the configuration file cannot be read or any of the sources holds
    /// an invalid value.
    pub fn parse() -> Result<Self, ConfigError> {
        let mut cfg = Config::new();

        if let Some(path) = get_conf_file_name(
            env::var(APP_CONF_PATH_ENV_VAR_NAME),
            env::args(),
        ) {
            cfg.merge(File::with_name(&path))?;
        }

        cfg.merge(
            Environment::with_prefix(APP_CONF_ENV_PREFIX).separator("__"),
        )?;

        cfg.try_into()
    }

    /// Creates a new [`Conf`] out of the provided JSON `value`, with default
    /// values for all the omitted options.
    ///
    /// `null` yields the default [`Conf`].
    ///
    /// # Errors
    ///
    /// If the provided `value` is not an object or holds an invalid option.
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }
}

/// Returns the path to the configuration file, if it's set either via the
/// environment variable or the command line argument. Environment variable
/// takes precedence.
fn get_conf_file_name<T>(
    env_var: Result<String, env::VarError>,
    cmd_args: T,
) -> Option<String>
where
    T: IntoIterator<Item = String>,
{
    if let Ok(path) = env_var {
        if !path.is_empty() {
            return Some(path);
        }
    }
    let mut args = cmd_args
        .into_iter()
        .skip_while(|x| x != APP_CONF_PATH_CMD_ARG_NAME);
    args.next().and_then(|_| args.next())
}

#[cfg(test)]
mod spec {
    use std::fs;

    use serde_json::{json, Value};
    use serial_test::serial;

    use crate::vendor::Vendor;

    use super::*;

    #[test]
    fn conf_file_name_none() {
        let file = get_conf_file_name(Err(env::VarError::NotPresent), vec![]);

        assert_eq!(file, None);
    }

    #[test]
    fn conf_file_name_from_env() {
        let file = get_conf_file_name(Ok("env_path".to_owned()), vec![]);

        assert_eq!(file, Some("env_path".to_owned()));
    }

    #[test]
    fn conf_file_name_from_arg() {
        let file = get_conf_file_name(
            Err(env::VarError::NotPresent),
            vec![APP_CONF_PATH_CMD_ARG_NAME.to_owned(), "arg_path".to_owned()],
        );

        assert_eq!(file, Some("arg_path".to_owned()));
    }

    #[test]
    fn conf_file_name_env_overrides_arg() {
        let file = get_conf_file_name(
            Ok("env_path".to_owned()),
            vec![APP_CONF_PATH_CMD_ARG_NAME.to_owned(), "arg_path".to_owned()],
        );

        assert_eq!(file, Some("env_path".to_owned()));
    }

    #[test]
    fn conf_file_name_arg_without_value() {
        let file = get_conf_file_name(
            Err(env::VarError::NotPresent),
            vec![APP_CONF_PATH_CMD_ARG_NAME.to_owned()],
        );

        assert_eq!(file, None);
    }

    #[test]
    #[serial]
    fn defaults_are_used_without_sources() {
        let conf = Conf::parse().unwrap();

        assert_eq!(conf, Conf::default());
        assert_eq!(conf.stats.vendor, None);
    }

    #[test]
    #[serial]
    fn file_overrides_defaults() {
        let path = "test_track_stats_conf_file.toml";
        fs::write(path, "[stats]\nvendor = \"firefox\"\n").unwrap();
        env::set_var(APP_CONF_PATH_ENV_VAR_NAME, path);

        let conf = Conf::parse();

        env::remove_var(APP_CONF_PATH_ENV_VAR_NAME);
        fs::remove_file(path).unwrap();

        let conf = conf.unwrap();
        assert_eq!(conf.stats.vendor, Some(Vendor::Firefox));
        assert_eq!(conf.log, Log::default());
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        let path = "test_track_stats_conf_env.toml";
        fs::write(path, "[stats]\nvendor = \"firefox\"\n").unwrap();
        env::set_var(APP_CONF_PATH_ENV_VAR_NAME, path);
        env::set_var("MEDEA_TRACK_STATS_STATS__VENDOR", "chrome");

        let conf = Conf::parse();

        env::remove_var("MEDEA_TRACK_STATS_STATS__VENDOR");
        env::remove_var(APP_CONF_PATH_ENV_VAR_NAME);
        fs::remove_file(path).unwrap();

        assert_eq!(conf.unwrap().stats.vendor, Some(Vendor::Chrome));
    }

    #[test]
    fn json_null_yields_defaults() {
        assert_eq!(Conf::from_json(Value::Null).unwrap(), Conf::default());
        assert_eq!(Conf::from_json(json!({})).unwrap(), Conf::default());
    }

    #[test]
    fn json_overrides_defaults() {
        let conf = Conf::from_json(json!({
            "log": { "level": "DEBUG" },
            "stats": { "vendor": "firefox" },
        }))
        .unwrap();

        assert_eq!(conf.log.level(), Some(::log::Level::Debug));
        assert_eq!(conf.stats, Stats::forced(Vendor::Firefox));

        let conf = Conf::from_json(json!({ "stats": {} })).unwrap();
        assert_eq!(conf.stats.vendor, None);
        assert_eq!(conf.log, Log::default());
    }

    #[test]
    fn json_with_invalid_options_is_an_error() {
        assert!(Conf::from_json(json!({ "stats": { "vendor": "safari" } }))
            .is_err());
        assert!(Conf::from_json(json!("chrome")).is_err());
    }

    #[test]
    #[serial]
    fn missing_file_is_an_error() {
        env::set_var(APP_CONF_PATH_ENV_VAR_NAME, "no_such_conf_file.toml");

        let conf = Conf::parse();

        env::remove_var(APP_CONF_PATH_ENV_VAR_NAME);

        assert!(conf.is_err());
    }
}
