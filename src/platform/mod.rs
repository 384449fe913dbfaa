//! Host platform boundary.
//!
//! On `wasm32` targets the [`PeerConnection`] is implemented on top of a
//! browser [RTCPeerConnection][1]. Other hosts are expected to provide their
//! own implementation.
//!
//! [`PeerConnection`]: crate::PeerConnection
//! [1]: https://w3.org/TR/webrtc/#dom-rtcpeerconnection

#[cfg(target_arch = "wasm32")]
mod wasm;

use std::borrow::Cow;

use derive_more::Display;

#[cfg(target_arch = "wasm32")]
pub use self::wasm::{
    api::get_stats_report,
    get_property_by_name,
    init_logger,
    init_once,
    peer_connection::{RtcMediaStream, RtcMediaStreamTrack, RtcPeerConnection},
    rtc_stats::RtcStatsError,
};
#[cfg(all(target_arch = "wasm32", feature = "console_error_panic_hook"))]
pub use self::wasm::set_panic_hook;

/// Error reported by the host platform while querying stats.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display(fmt = "{}: {}", name, message)]
pub struct Error {
    /// Name of this error (`TypeError`, `InvalidStateError`, etc).
    name: Cow<'static, str>,

    /// Message describing this error.
    message: String,
}

impl Error {
    /// Creates a new [`Error`] with the provided `name` and `message`.
    #[inline]
    #[must_use]
    pub fn new<N, M>(name: N, message: M) -> Self
    where
        N: Into<Cow<'static, str>>,
        M: Into<String>,
    {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns name of this [`Error`].
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns message of this [`Error`].
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::error::Error for Error {}
