//! Querying standardized stats of all the tracks of a peer connection.

use async_trait::async_trait;
use derive_more::Display;
use futures::future::{self, LocalBoxFuture, TryJoinAll};
use tracerr::Traced;

use crate::{
    conf,
    platform,
    stats::{PeerConnectionId, StatsReport},
    vendor::{LegacyStatsResponse, MapStatsReport, Vendor},
    StandardizedStatsResponse, StandardizedTrackStatsReport,
};

/// Kind of a [`MediaStreamTrack`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum MediaKind {
    /// Audio track.
    #[display(fmt = "audio")]
    Audio,

    /// Video track.
    #[display(fmt = "video")]
    Video,
}

/// Single audio or video track of a [`MediaStream`].
pub trait MediaStreamTrack {
    /// Returns ID of this [`MediaStreamTrack`].
    fn id(&self) -> String;
}

/// Group of [`MediaStreamTrack`]s attached to a [`PeerConnection`].
pub trait MediaStream {
    /// Type of the [`MediaStreamTrack`]s of this [`MediaStream`].
    type Track: MediaStreamTrack;

    /// Returns all the audio tracks of this [`MediaStream`].
    fn audio_tracks(&self) -> Vec<Self::Track>;

    /// Returns all the video tracks of this [`MediaStream`].
    fn video_tracks(&self) -> Vec<Self::Track>;

    /// Returns all the tracks of the provided [`MediaKind`].
    fn tracks(&self, kind: MediaKind) -> Vec<Self::Track> {
        match kind {
            MediaKind::Audio => self.audio_tracks(),
            MediaKind::Video => self.video_tracks(),
        }
    }
}

/// Host-supplied peer connection which stats can be queried from.
#[async_trait(?Send)]
pub trait PeerConnection {
    /// Type of the [`MediaStream`]s attached to this [`PeerConnection`].
    type Stream: MediaStream<Track = Self::Track>;

    /// Type of the [`MediaStreamTrack`]s attached to this
    /// [`PeerConnection`].
    type Track: MediaStreamTrack;

    /// Indicates whether this [`PeerConnection`] is able to query stats at
    /// all.
    fn has_get_stats(&self) -> bool;

    /// Detects which [`Vendor`] stats API shape this [`PeerConnection`]
    /// exposes, if any.
    fn stats_api(&self) -> Option<Vendor>;

    /// Returns [`MediaStream`]s sent by this [`PeerConnection`].
    fn local_streams(&self) -> Vec<Self::Stream>;

    /// Returns [`MediaStream`]s received by this [`PeerConnection`].
    fn remote_streams(&self) -> Vec<Self::Stream>;

    /// Queries stats of the provided `track` using [`Vendor::Chrome`] API.
    ///
    /// # Errors
    ///
    /// If the host fails to gather stats.
    async fn legacy_stats(
        &self,
        track: &Self::Track,
    ) -> Result<LegacyStatsResponse, Traced<platform::Error>>;

    /// Queries stats of the provided `track` using [`Vendor::Firefox`] API.
    ///
    /// # Errors
    ///
    /// If the host fails to gather stats.
    async fn map_stats(
        &self,
        track: &Self::Track,
    ) -> Result<MapStatsReport, Traced<platform::Error>>;
}

/// Errors which can occur while querying stats of a [`PeerConnection`].
#[derive(Clone, Debug, Display, PartialEq)]
pub enum GetStatsError {
    /// [`PeerConnection`] has no stats query capability.
    #[display(fmt = "Given PeerConnection does not support getStats")]
    Unsupported,

    /// Neither a forced nor a detected [`Vendor`] stats API is available.
    #[display(fmt = "RTCPeerConnection#getStats() not supported")]
    UnknownStatsApi,

    /// Host failed to gather stats.
    #[display(fmt = "Failed to get stats: {}", _0)]
    Platform(platform::Error),
}

impl From<platform::Error> for GetStatsError {
    #[inline]
    fn from(err: platform::Error) -> Self {
        Self::Platform(err)
    }
}

impl std::error::Error for GetStatsError {}

/// Queries standardized stats of all the tracks of the provided
/// [`PeerConnection`].
///
/// A query is issued for every local and remote audio and video track. All
/// of them run concurrently and the result resolves once every query has
/// resolved. Each list of the result preserves the track enumeration order.
///
/// # Errors
///
/// With [`GetStatsError::Unsupported`] if the [`PeerConnection`] can't query
/// stats at all.
///
/// With the error of the first failed per-track query otherwise. No partial
/// results are returned.
pub async fn get_stats<P>(
    peer: &P,
    conf: &conf::Stats,
) -> Result<StandardizedStatsResponse, Traced<GetStatsError>>
where
    P: PeerConnection,
{
    if !peer.has_get_stats() {
        return Err(tracerr::new!(GetStatsError::Unsupported));
    }

    let local_streams = peer.local_streams();
    let remote_streams = peer.remote_streams();
    let local_audio = tracks_of(&local_streams, MediaKind::Audio);
    let local_video = tracks_of(&local_streams, MediaKind::Video);
    let remote_audio = tracks_of(&remote_streams, MediaKind::Audio);
    let remote_video = tracks_of(&remote_streams, MediaKind::Video);

    let (
        local_audio_track_stats,
        local_video_track_stats,
        remote_audio_track_stats,
        remote_video_track_stats,
    ) = future::try_join4(
        get_tracks_stats(peer, &local_audio, conf),
        get_tracks_stats(peer, &local_video, conf),
        get_tracks_stats(peer, &remote_audio, conf),
        get_tracks_stats(peer, &remote_video, conf),
    )
    .await?;

    Ok(StandardizedStatsResponse {
        local_audio_track_stats,
        local_video_track_stats,
        remote_audio_track_stats,
        remote_video_track_stats,
    })
}

/// Queries stats of the provided [`PeerConnection`] and wraps them into a
/// [`StatsReport`] with the provided ID.
///
/// # Errors
///
/// See [`get_stats()`] for details.
pub async fn get_stats_report<P, I>(
    peer_connection_id: I,
    peer: &P,
    conf: &conf::Stats,
) -> Result<StatsReport, Traced<GetStatsError>>
where
    P: PeerConnection,
    I: Into<PeerConnectionId>,
{
    let response = get_stats(peer, conf).await.map_err(tracerr::wrap!())?;
    Ok(StatsReport::new(peer_connection_id, &response))
}

/// Returns all the tracks of the provided [`MediaKind`] from all the
/// `streams`, in order.
fn tracks_of<S>(streams: &[S], kind: MediaKind) -> Vec<S::Track>
where
    S: MediaStream,
{
    streams.iter().flat_map(|s| s.tracks(kind)).collect()
}

/// Type of the future resolving into standardized stats of a single track.
type TrackStatsFuture<'a> = LocalBoxFuture<
    'a,
    Result<StandardizedTrackStatsReport, Traced<GetStatsError>>,
>;

/// Queries standardized stats of all the provided `tracks` concurrently.
fn get_tracks_stats<'a, P>(
    peer: &'a P,
    tracks: &'a [P::Track],
    conf: &'a conf::Stats,
) -> TryJoinAll<TrackStatsFuture<'a>>
where
    P: PeerConnection,
{
    future::try_join_all(
        tracks.iter().map(|track| get_track_stats(peer, track, conf)),
    )
}

/// Queries standardized stats of a single `track`, tagged with its ID.
fn get_track_stats<'a, P>(
    peer: &'a P,
    track: &'a P::Track,
    conf: &conf::Stats,
) -> TrackStatsFuture<'a>
where
    P: PeerConnection,
{
    let vendor = conf.vendor.or_else(|| peer.stats_api());
    Box::pin(async move {
        let vendor = vendor
            .ok_or_else(|| tracerr::new!(GetStatsError::UnknownStatsApi))?;
        log::debug!(
            "Querying stats of track {} via {} API",
            track.id(),
            vendor,
        );

        let mut stats = match vendor {
            Vendor::Chrome => peer
                .legacy_stats(track)
                .await
                .map_err(tracerr::map_from_and_wrap!())?
                .standardize(),
            Vendor::Firefox => peer
                .map_stats(track)
                .await
                .map_err(tracerr::map_from_and_wrap!())?
                .standardize(),
        };
        stats.track_id = Some(track.id());

        log::trace!("Standardized track stats: {:?}", stats);
        Ok(stats)
    })
}
