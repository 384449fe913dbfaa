//! Stats querying settings.

use serde::{Deserialize, Serialize};

use crate::vendor::Vendor;

/// Stats querying settings.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Stats {
    /// [`Vendor`] stats API to be used regardless of the one detected on a
    /// peer connection.
    ///
    /// Defaults to `None`, meaning the API is detected.
    pub vendor: Option<Vendor>,
}

impl Stats {
    /// Creates [`Stats`] settings forcing the provided [`Vendor`] API.
    #[inline]
    #[must_use]
    pub fn forced(vendor: Vendor) -> Self {
        Self {
            vendor: Some(vendor),
        }
    }
}
