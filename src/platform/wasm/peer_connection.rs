//! [`PeerConnection`] backed by a browser [RTCPeerConnection][1].
//!
//! [1]: https://w3.org/TR/webrtc/#dom-rtcpeerconnection

use async_trait::async_trait;
use js_sys::{Array as JsArray, Function as JsFunction, Promise, Reflect};
use tracerr::Traced;
use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::{
    peer::{MediaStream, MediaStreamTrack, PeerConnection},
    platform::{self, wasm::get_property_by_name},
    vendor::{LegacyStatsResponse, MapStatsReport, Vendor},
};

use super::rtc_stats;

/// Global constructor defined by the browsers exposing the legacy
/// callback-based stats API.
const CHROME_PEER_CONSTRUCTOR: &str = "webkitRTCPeerConnection";

/// Global constructor defined by the browsers exposing the map-based stats
/// API.
const FIREFOX_PEER_CONSTRUCTOR: &str = "mozRTCPeerConnection";

/// Wrapper around a [`web_sys::MediaStreamTrack`].
#[derive(Clone, Debug)]
pub struct RtcMediaStreamTrack(web_sys::MediaStreamTrack);

impl From<web_sys::MediaStreamTrack> for RtcMediaStreamTrack {
    #[inline]
    fn from(track: web_sys::MediaStreamTrack) -> Self {
        Self(track)
    }
}

impl AsRef<web_sys::MediaStreamTrack> for RtcMediaStreamTrack {
    #[inline]
    fn as_ref(&self) -> &web_sys::MediaStreamTrack {
        &self.0
    }
}

impl MediaStreamTrack for RtcMediaStreamTrack {
    #[inline]
    fn id(&self) -> String {
        self.0.id()
    }
}

/// Wrapper around a [`web_sys::MediaStream`].
#[derive(Clone, Debug)]
pub struct RtcMediaStream(web_sys::MediaStream);

impl RtcMediaStream {
    fn collect_tracks(tracks: &JsArray) -> Vec<RtcMediaStreamTrack> {
        tracks
            .iter()
            .map(|t| RtcMediaStreamTrack(t.unchecked_into()))
            .collect()
    }
}

impl From<web_sys::MediaStream> for RtcMediaStream {
    #[inline]
    fn from(stream: web_sys::MediaStream) -> Self {
        Self(stream)
    }
}

impl MediaStream for RtcMediaStream {
    type Track = RtcMediaStreamTrack;

    fn audio_tracks(&self) -> Vec<Self::Track> {
        Self::collect_tracks(&self.0.get_audio_tracks())
    }

    fn video_tracks(&self) -> Vec<Self::Track> {
        Self::collect_tracks(&self.0.get_video_tracks())
    }
}

/// [`PeerConnection`] backed by a [`web_sys::RtcPeerConnection`].
#[derive(Clone, Debug)]
pub struct RtcPeerConnection(web_sys::RtcPeerConnection);

impl From<web_sys::RtcPeerConnection> for RtcPeerConnection {
    #[inline]
    fn from(peer: web_sys::RtcPeerConnection) -> Self {
        Self(peer)
    }
}

impl RtcPeerConnection {
    /// Returns `getStats()` function of the underlying
    /// [`web_sys::RtcPeerConnection`], if there is any.
    fn get_stats_fn(&self) -> Option<JsFunction> {
        get_property_by_name(&self.0, "getStats", |f| {
            f.dyn_into::<JsFunction>().ok()
        })
    }

    /// Calls the provided `getStreams` style method of the underlying
    /// [`web_sys::RtcPeerConnection`].
    ///
    /// Returns no streams if the browser doesn't implement it.
    fn streams(&self, method: &str) -> Vec<RtcMediaStream> {
        let getter = match get_property_by_name(&self.0, method, |f| {
            f.dyn_into::<JsFunction>().ok()
        }) {
            Some(getter) => getter,
            None => {
                log::debug!("RTCPeerConnection.{} is not a function", method);
                return Vec::new();
            }
        };
        match getter.call0(&self.0) {
            Ok(streams) => JsArray::from(&streams)
                .iter()
                .map(|s| RtcMediaStream(s.unchecked_into()))
                .collect(),
            Err(e) => {
                log::error!(
                    "RTCPeerConnection.{}() failed: {}",
                    method,
                    platform::Error::from(e),
                );
                Vec::new()
            }
        }
    }

    /// Calls `getStats()` with the arguments built by the provided `args`
    /// from the `resolve` and `reject` callbacks, and awaits the value passed
    /// to `resolve`.
    async fn query_stats<F>(
        &self,
        args: F,
    ) -> Result<JsValue, Traced<platform::Error>>
    where
        F: FnOnce(&JsValue, &JsValue) -> [JsValue; 3],
    {
        let get_stats = self.get_stats_fn().ok_or_else(|| {
            tracerr::new!(platform::Error::new(
                "TypeError",
                "RTCPeerConnection.getStats is not a function",
            ))
        })?;

        let mut args = Some(args);
        let peer: &JsValue = &self.0;
        let promise = Promise::new(&mut |resolve, reject| {
            let args = match args.take() {
                Some(args) => args(&resolve, &reject),
                None => return,
            };
            if let Err(e) =
                get_stats.call3(peer, &args[0], &args[1], &args[2])
            {
                let _ = reject.call1(&JsValue::UNDEFINED, &e);
            }
        });

        JsFuture::from(promise)
            .await
            .map_err(platform::Error::from)
            .map_err(tracerr::wrap!())
    }
}

#[async_trait(?Send)]
impl PeerConnection for RtcPeerConnection {
    type Stream = RtcMediaStream;
    type Track = RtcMediaStreamTrack;

    fn has_get_stats(&self) -> bool {
        self.get_stats_fn().is_some()
    }

    fn stats_api(&self) -> Option<Vendor> {
        let global = js_sys::global();
        let is_defined = |name: &str| {
            Reflect::get(&global, &JsValue::from_str(name))
                .map_or(false, |v| !v.is_undefined())
        };

        if is_defined(CHROME_PEER_CONSTRUCTOR) {
            Some(Vendor::Chrome)
        } else if is_defined(FIREFOX_PEER_CONSTRUCTOR) {
            Some(Vendor::Firefox)
        } else {
            None
        }
    }

    fn local_streams(&self) -> Vec<Self::Stream> {
        self.streams("getLocalStreams")
    }

    fn remote_streams(&self) -> Vec<Self::Stream> {
        self.streams("getRemoteStreams")
    }

    async fn legacy_stats(
        &self,
        track: &Self::Track,
    ) -> Result<LegacyStatsResponse, Traced<platform::Error>> {
        let track: &JsValue = &track.0;
        let response = self
            .query_stats(|resolve, reject| {
                [resolve.clone(), track.clone(), reject.clone()]
            })
            .await?;

        rtc_stats::parse_legacy_response(&response)
            .map_err(tracerr::map_from_and_wrap!())
    }

    async fn map_stats(
        &self,
        track: &Self::Track,
    ) -> Result<MapStatsReport, Traced<platform::Error>> {
        let track: &JsValue = &track.0;
        let report = self
            .query_stats(|resolve, reject| {
                [track.clone(), resolve.clone(), reject.clone()]
            })
            .await?;

        rtc_stats::parse_map_report(&report)
            .map_err(tracerr::map_from_and_wrap!())
    }
}
