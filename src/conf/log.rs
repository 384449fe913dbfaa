//! Settings of the `log` records emitted by this crate.

use std::{borrow::Cow, str::FromStr as _};

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

/// Settings of the logger installed by the host.
///
/// In a browser `wasm-logger` is installed with these settings on the first
/// `getStatsReport()` call.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, SmartDefault)]
#[serde(default)]
pub struct Log {
    /// Name of the most verbose [`log::Level`] passed to the console, case
    /// insensitive. `OFF` or any unknown name disables logging.
    ///
    /// Defaults to `INFO`.
    #[default("INFO")]
    pub level: Cow<'static, str>,
}

impl Log {
    /// Parses the configured [`log::Level`].
    ///
    /// Returns `None` if logging is disabled.
    #[must_use]
    pub fn level(&self) -> Option<log::Level> {
        log::Level::from_str(&self.level).ok()
    }
}
