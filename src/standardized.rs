//! Vendor-neutral intermediate stats shape.

use serde::{Deserialize, Serialize};

/// Statistics of a single [MediaStreamTrack][1] normalized from some vendor
/// specific [getStats()][2] response.
///
/// All the fields are optional, since vendors expose disjoint subsets of
/// stats. Every present numeric field is guaranteed to be finite.
///
/// [1]: https://w3.org/TR/mediacapture-streams/#mediastreamtrack
/// [2]: https://w3.org/TR/webrtc/#dom-rtcpeerconnection-getstats
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StandardizedTrackStatsReport {
    /// ID of the track these stats were queried for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,

    /// Time these stats were gathered at, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,

    /// [SSRC] of the RTP stream carrying the track.
    ///
    /// [SSRC]: https://tools.ietf.org/html/rfc3550#section-3
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssrc: Option<String>,

    /// Name of the codec in use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_name: Option<String>,

    /// Total number of RTP payload bytes sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_sent: Option<u64>,

    /// Total number of RTP payload bytes received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_received: Option<u64>,

    /// Total number of RTP packets sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packets_sent: Option<u64>,

    /// Total number of RTP packets received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packets_received: Option<u64>,

    /// Number of lost packets. May be negative when duplicates are received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packets_lost: Option<i64>,

    /// Packet jitter in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jitter: Option<f64>,

    /// Round trip time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_trip_time: Option<f64>,

    /// Level of the captured audio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_input_level: Option<f64>,

    /// Level of the played out audio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_output_level: Option<f64>,

    /// Width of the captured video frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_width_input: Option<u32>,

    /// Height of the captured video frames.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_height_input: Option<u32>,

    /// Width of the last encoded video frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_width_sent: Option<u32>,

    /// Height of the last encoded video frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_height_sent: Option<u32>,

    /// Width of the last decoded video frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_width_received: Option<u32>,

    /// Height of the last decoded video frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_height_received: Option<u32>,

    /// Frame rate of the captured video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate_input: Option<f64>,

    /// Frame rate of the sent video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate_sent: Option<f64>,

    /// Frame rate of the received video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate_received: Option<f64>,
}

impl StandardizedTrackStatsReport {
    /// Indicates whether this report carries no stats at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Standardized statistics of all the tracks of a single
/// [RTCPeerConnection][1].
///
/// Each list preserves the order in which the tracks were enumerated.
///
/// [1]: https://w3.org/TR/webrtc/#dom-rtcpeerconnection
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StandardizedStatsResponse {
    /// Stats of the local audio tracks.
    pub local_audio_track_stats: Vec<StandardizedTrackStatsReport>,

    /// Stats of the local video tracks.
    pub local_video_track_stats: Vec<StandardizedTrackStatsReport>,

    /// Stats of the remote audio tracks.
    pub remote_audio_track_stats: Vec<StandardizedTrackStatsReport>,

    /// Stats of the remote video tracks.
    pub remote_video_track_stats: Vec<StandardizedTrackStatsReport>,
}

#[cfg(test)]
mod spec {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_report_serializes_to_empty_object() {
        let report = StandardizedTrackStatsReport::default();

        assert!(report.is_empty());
        assert_eq!(serde_json::to_value(&report).unwrap(), json!({}));
    }

    #[test]
    fn serializes_in_camel_case() {
        let report = StandardizedTrackStatsReport {
            track_id: Some("audio-1".into()),
            round_trip_time: Some(120.0),
            frame_width_sent: Some(640),
            ..StandardizedTrackStatsReport::default()
        };

        assert!(!report.is_empty());
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "trackId": "audio-1",
                "roundTripTime": 120.0,
                "frameWidthSent": 640,
            }),
        );
    }

    #[test]
    fn response_keeps_empty_lists() {
        let response = StandardizedStatsResponse::default();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "localAudioTrackStats": [],
                "localVideoTrackStats": [],
                "remoteAudioTrackStats": [],
                "remoteVideoTrackStats": [],
            }),
        );
    }
}
