//! Stats of the tracks received from the remote side.

use serde::Serialize;

use super::{Dimensions, TrackDirection, TrackStats};
use crate::StandardizedTrackStatsReport;

/// Stats of every track received from the remote side.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivingStats {
    /// Number of bytes received.
    pub bytes_received: Option<u64>,

    /// Number of packets received.
    pub packets_received: Option<u64>,
}

impl From<&StandardizedTrackStatsReport> for ReceivingStats {
    #[inline]
    fn from(report: &StandardizedTrackStatsReport) -> Self {
        Self {
            bytes_received: report.bytes_received,
            packets_received: report.packets_received,
        }
    }
}

/// Stats of a remote audio track.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteAudioTrackStats {
    /// Stats shared by all kinds of tracks.
    #[serde(flatten)]
    pub track: TrackStats,

    /// Stats of the received RTP stream.
    #[serde(flatten)]
    pub receiving: ReceivingStats,

    /// Output audio level.
    pub audio_level: Option<f64>,

    /// Audio jitter in milliseconds.
    pub jitter: Option<f64>,
}

impl RemoteAudioTrackStats {
    /// Creates new [`RemoteAudioTrackStats`] of the track with the provided
    /// ID.
    #[must_use]
    pub fn new(
        track_id: String,
        report: &StandardizedTrackStatsReport,
    ) -> Self {
        Self {
            track: TrackStats::new(track_id, TrackDirection::Receiving, report),
            receiving: ReceivingStats::from(report),
            audio_level: report.audio_output_level,
            jitter: report.jitter,
        }
    }
}

impl From<&StandardizedTrackStatsReport> for RemoteAudioTrackStats {
    #[inline]
    fn from(report: &StandardizedTrackStatsReport) -> Self {
        Self::new(report.track_id.clone().unwrap_or_default(), report)
    }
}

/// Stats of a remote video track.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteVideoTrackStats {
    /// Stats shared by all kinds of tracks.
    #[serde(flatten)]
    pub track: TrackStats,

    /// Stats of the received RTP stream.
    #[serde(flatten)]
    pub receiving: ReceivingStats,

    /// Received video resolution.
    pub dimensions: Option<Dimensions>,

    /// Received video frame rate.
    pub frame_rate: Option<f64>,
}

impl RemoteVideoTrackStats {
    /// Creates new [`RemoteVideoTrackStats`] of the track with the provided
    /// ID.
    #[must_use]
    pub fn new(
        track_id: String,
        report: &StandardizedTrackStatsReport,
    ) -> Self {
        Self {
            track: TrackStats::new(track_id, TrackDirection::Receiving, report),
            receiving: ReceivingStats::from(report),
            dimensions: Dimensions::new(
                report.frame_width_received,
                report.frame_height_received,
            ),
            frame_rate: report.frame_rate_received,
        }
    }
}

impl From<&StandardizedTrackStatsReport> for RemoteVideoTrackStats {
    #[inline]
    fn from(report: &StandardizedTrackStatsReport) -> Self {
        Self::new(report.track_id.clone().unwrap_or_default(), report)
    }
}
