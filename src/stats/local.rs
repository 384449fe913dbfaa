//! Stats of the tracks sent by the local side.

use serde::Serialize;

use super::{Dimensions, TrackDirection, TrackStats};
use crate::StandardizedTrackStatsReport;

/// Stats of every track sent by the local side.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendingStats {
    /// Number of bytes sent.
    pub bytes_sent: Option<u64>,

    /// Number of packets sent.
    pub packets_sent: Option<u64>,

    /// Round trip time in milliseconds.
    pub round_trip_time: Option<f64>,
}

impl From<&StandardizedTrackStatsReport> for SendingStats {
    #[inline]
    fn from(report: &StandardizedTrackStatsReport) -> Self {
        Self {
            bytes_sent: report.bytes_sent,
            packets_sent: report.packets_sent,
            round_trip_time: report.round_trip_time,
        }
    }
}

/// Stats of a local audio track.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalAudioTrackStats {
    /// Stats shared by all kinds of tracks.
    #[serde(flatten)]
    pub track: TrackStats,

    /// Stats of the sent RTP stream.
    #[serde(flatten)]
    pub sending: SendingStats,

    /// Input audio level.
    pub audio_level: Option<f64>,

    /// Audio jitter in milliseconds.
    pub jitter: Option<f64>,
}

impl LocalAudioTrackStats {
    /// Creates new [`LocalAudioTrackStats`] of the track with the provided
    /// ID.
    #[must_use]
    pub fn new(
        track_id: String,
        report: &StandardizedTrackStatsReport,
    ) -> Self {
        Self {
            track: TrackStats::new(track_id, TrackDirection::Sending, report),
            sending: SendingStats::from(report),
            audio_level: report.audio_input_level,
            jitter: report.jitter,
        }
    }
}

impl From<&StandardizedTrackStatsReport> for LocalAudioTrackStats {
    #[inline]
    fn from(report: &StandardizedTrackStatsReport) -> Self {
        Self::new(report.track_id.clone().unwrap_or_default(), report)
    }
}

/// Stats of a local video track.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalVideoTrackStats {
    /// Stats shared by all kinds of tracks.
    #[serde(flatten)]
    pub track: TrackStats,

    /// Stats of the sent RTP stream.
    #[serde(flatten)]
    pub sending: SendingStats,

    /// Video capture resolution.
    pub capture_dimensions: Option<Dimensions>,

    /// Video encoding resolution.
    pub dimensions: Option<Dimensions>,

    /// Video capture frame rate.
    pub capture_frame_rate: Option<f64>,

    /// Video encoding frame rate.
    pub frame_rate: Option<f64>,
}

impl LocalVideoTrackStats {
    /// Creates new [`LocalVideoTrackStats`] of the track with the provided
    /// ID.
    #[must_use]
    pub fn new(
        track_id: String,
        report: &StandardizedTrackStatsReport,
    ) -> Self {
        Self {
            track: TrackStats::new(track_id, TrackDirection::Sending, report),
            sending: SendingStats::from(report),
            capture_dimensions: Dimensions::new(
                report.frame_width_input,
                report.frame_height_input,
            ),
            dimensions: Dimensions::new(
                report.frame_width_sent,
                report.frame_height_sent,
            ),
            capture_frame_rate: report.frame_rate_input,
            frame_rate: report.frame_rate_sent,
        }
    }
}

impl From<&StandardizedTrackStatsReport> for LocalVideoTrackStats {
    #[inline]
    fn from(report: &StandardizedTrackStatsReport) -> Self {
        Self::new(report.track_id.clone().unwrap_or_default(), report)
    }
}
