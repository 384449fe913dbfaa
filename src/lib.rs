//! Standardized [WebRTC] track statistics.
//!
//! Browsers expose peer connection statistics in vendor specific shapes:
//! Chrome's callback-based legacy [getStats()][1] and Firefox's map-based one.
//! This crate queries stats of every track of a [`PeerConnection`] via the
//! detected (or configured) [`Vendor`] API, normalizes them into a
//! [`StandardizedTrackStatsReport`], and wraps the results into a read-only
//! [`StatsReport`].
//!
//! ```
//! use medea_track_stats::{
//!     vendor::LegacyStatsResponse, StandardizedStatsResponse, StatsReport,
//! };
//!
//! let response: LegacyStatsResponse = serde_json::from_str(
//!     r#"[{
//!         "id": "ssrc_1234_send",
//!         "type": "ssrc",
//!         "timestamp": 1000.0,
//!         "stats": { "ssrc": "1234", "googRtt": "0.05", "bytesSent": "100" }
//!     }]"#,
//! )
//! .unwrap();
//!
//! let mut stats = response.standardize();
//! stats.track_id = Some("mic".to_owned());
//! assert_eq!(stats.round_trip_time, Some(50.0));
//!
//! let report = StatsReport::new(
//!     "pc-1",
//!     &StandardizedStatsResponse {
//!         local_audio_track_stats: vec![stats],
//!         ..StandardizedStatsResponse::default()
//!     },
//! );
//! assert_eq!(report.local_audio_track_stats[0].sending.bytes_sent, Some(100));
//! ```
//!
//! [WebRTC]: https://w3.org/TR/webrtc
//! [1]: https://w3.org/TR/webrtc/#dom-rtcpeerconnection-getstats

#![allow(clippy::module_name_repetitions)]
#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts
)]

pub mod conf;
pub mod peer;
pub mod platform;
pub mod standardized;
pub mod stats;
pub mod vendor;

#[doc(inline)]
pub use self::{
    conf::Conf,
    peer::{
        get_stats, get_stats_report, GetStatsError, MediaKind, MediaStream,
        MediaStreamTrack, PeerConnection,
    },
    standardized::{StandardizedStatsResponse, StandardizedTrackStatsReport},
    stats::{
        LocalAudioTrackStats, LocalVideoTrackStats, PeerConnectionId,
        RemoteAudioTrackStats, RemoteVideoTrackStats, StatsReport,
        StatsReportError, TrackDirection, TrackStats,
    },
    vendor::Vendor,
};
