//! Read-only per-track stats reports of a peer connection.

mod local;
mod remote;

use std::convert::TryFrom;

use derive_more::{Display, From, Into};
use serde::Serialize;
use serde_json::Value;
use tracerr::Traced;

use crate::{StandardizedStatsResponse, StandardizedTrackStatsReport};

#[doc(inline)]
pub use self::{
    local::{LocalAudioTrackStats, LocalVideoTrackStats, SendingStats},
    remote::{ReceivingStats, RemoteAudioTrackStats, RemoteVideoTrackStats},
};

/// ID of a peer connection which a [`StatsReport`] describes.
#[derive(Clone, Debug, Display, Eq, From, Hash, Into, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PeerConnectionId(String);

impl From<&str> for PeerConnectionId {
    #[inline]
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl PeerConnectionId {
    /// Returns string representation of this [`PeerConnectionId`].
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<Value> for PeerConnectionId {
    type Error = Traced<StatsReportError>;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(id) => Ok(Self(id)),
            _ => Err(tracerr::new!(StatsReportError::InvalidPeerConnectionId)),
        }
    }
}

/// Errors which can occur while constructing a [`StatsReport`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum StatsReportError {
    /// Provided peer connection ID is not a string.
    #[display(fmt = "RTCPeerConnection id must be a string")]
    InvalidPeerConnectionId,
}

impl std::error::Error for StatsReportError {}

/// Direction of the media flowing through a track.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackDirection {
    /// Track is sent by the local side.
    #[display(fmt = "sending")]
    Sending,

    /// Track is received from the remote side.
    #[display(fmt = "receiving")]
    Receiving,
}

/// Resolution of a video track.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Builds [`Dimensions`] if both `width` and `height` are known.
    #[inline]
    #[must_use]
    pub fn new(width: Option<u32>, height: Option<u32>) -> Option<Self> {
        Some(Self {
            width: width?,
            height: height?,
        })
    }
}

/// Stats shared by all kinds of tracks.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackStats {
    /// ID of the track.
    pub track_id: String,

    /// Time these stats were gathered at, in milliseconds.
    pub timestamp: Option<f64>,

    /// SSRC of the RTP stream carrying the track.
    pub ssrc: Option<String>,

    /// Name of the codec in use.
    pub codec: Option<String>,

    /// Number of lost packets.
    pub packets_lost: Option<i64>,

    /// Direction of the track.
    pub direction: TrackDirection,
}

impl TrackStats {
    /// Picks the shared stats out of the provided `report`.
    #[must_use]
    pub fn new(
        track_id: String,
        direction: TrackDirection,
        report: &StandardizedTrackStatsReport,
    ) -> Self {
        Self {
            track_id,
            timestamp: report.timestamp,
            ssrc: report.ssrc.clone(),
            codec: report.codec_name.clone(),
            packets_lost: report.packets_lost,
            direction,
        }
    }
}

/// Statistics report of a peer connection at some point in time.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    /// ID of the peer connection.
    pub peer_connection_id: PeerConnectionId,

    /// Stats of the local audio tracks.
    pub local_audio_track_stats: Vec<LocalAudioTrackStats>,

    /// Stats of the local video tracks.
    pub local_video_track_stats: Vec<LocalVideoTrackStats>,

    /// Stats of the remote audio tracks.
    pub remote_audio_track_stats: Vec<RemoteAudioTrackStats>,

    /// Stats of the remote video tracks.
    pub remote_video_track_stats: Vec<RemoteVideoTrackStats>,
}

impl StatsReport {
    /// Wraps the provided [`StandardizedStatsResponse`] into a new
    /// [`StatsReport`].
    #[must_use]
    pub fn new<I>(
        peer_connection_id: I,
        response: &StandardizedStatsResponse,
    ) -> Self
    where
        I: Into<PeerConnectionId>,
    {
        Self {
            peer_connection_id: peer_connection_id.into(),
            local_audio_track_stats: wrap(&response.local_audio_track_stats),
            local_video_track_stats: wrap(&response.local_video_track_stats),
            remote_audio_track_stats: wrap(&response.remote_audio_track_stats),
            remote_video_track_stats: wrap(&response.remote_video_track_stats),
        }
    }

    /// Wraps the provided [`StandardizedStatsResponse`] into a new
    /// [`StatsReport`] with an untyped peer connection ID.
    ///
    /// # Errors
    ///
    /// With [`StatsReportError::InvalidPeerConnectionId`] if the provided
    /// `peer_connection_id` is not a string.
    pub fn try_new(
        peer_connection_id: Value,
        response: &StandardizedStatsResponse,
    ) -> Result<Self, Traced<StatsReportError>> {
        let id = PeerConnectionId::try_from(peer_connection_id)
            .map_err(tracerr::wrap!())?;
        Ok(Self::new(id, response))
    }
}

/// Wraps all the provided standardized reports into the `T` track stats.
fn wrap<'a, T>(reports: &'a [StandardizedTrackStatsReport]) -> Vec<T>
where
    T: From<&'a StandardizedTrackStatsReport>,
{
    reports.iter().map(T::from).collect()
}
