use std::{cell::RefCell, collections::HashMap};

use async_trait::async_trait;
use medea_track_stats::{
    platform,
    vendor::{LegacyStatsResponse, MapStatsReport, Vendor},
    MediaStream, MediaStreamTrack, PeerConnection,
};
use tracerr::Traced;

/// Track of a [`FakeStream`].
#[derive(Clone, Debug)]
pub struct FakeTrack(pub String);

impl MediaStreamTrack for FakeTrack {
    fn id(&self) -> String {
        self.0.clone()
    }
}

/// Stream of a [`FakePeerConnection`].
#[derive(Clone, Debug, Default)]
pub struct FakeStream {
    pub audio: Vec<FakeTrack>,
    pub video: Vec<FakeTrack>,
}

impl FakeStream {
    pub fn new(audio: &[&str], video: &[&str]) -> Self {
        let tracks = |ids: &[&str]| -> Vec<FakeTrack> {
            ids.iter().map(|id| FakeTrack((*id).to_owned())).collect()
        };
        Self {
            audio: tracks(audio),
            video: tracks(video),
        }
    }
}

impl MediaStream for FakeStream {
    type Track = FakeTrack;

    fn audio_tracks(&self) -> Vec<FakeTrack> {
        self.audio.clone()
    }

    fn video_tracks(&self) -> Vec<FakeTrack> {
        self.video.clone()
    }
}

/// Stats a [`FakePeerConnection`] answers with for a single track.
#[derive(Clone, Debug)]
pub enum FakeStats {
    Legacy(LegacyStatsResponse),
    Map(MapStatsReport),
    Error(platform::Error),
}

/// [`PeerConnection`] answering with the preconfigured [`FakeStats`].
#[derive(Debug, Default)]
pub struct FakePeerConnection {
    pub has_get_stats: bool,
    pub stats_api: Option<Vendor>,
    pub local: Vec<FakeStream>,
    pub remote: Vec<FakeStream>,
    pub stats: HashMap<String, FakeStats>,

    /// Number of times the query of a track yields before resolving.
    pub delays: HashMap<String, usize>,

    /// IDs of the tracks in the order their queries were issued.
    pub queried: RefCell<Vec<(Vendor, String)>>,
}

impl FakePeerConnection {
    pub fn new(stats_api: Option<Vendor>) -> Self {
        Self {
            has_get_stats: true,
            stats_api,
            ..Self::default()
        }
    }

    pub fn with_stats(mut self, track_id: &str, stats: FakeStats) -> Self {
        self.stats.insert(track_id.to_owned(), stats);
        self
    }

    pub fn with_delay(mut self, track_id: &str, yields: usize) -> Self {
        self.delays.insert(track_id.to_owned(), yields);
        self
    }

    async fn query(
        &self,
        vendor: Vendor,
        track: &FakeTrack,
    ) -> Result<Option<FakeStats>, Traced<platform::Error>> {
        self.queried.borrow_mut().push((vendor, track.id()));
        for _ in 0..self.delays.get(&track.0).copied().unwrap_or_default() {
            tokio::task::yield_now().await;
        }
        match self.stats.get(&track.0) {
            Some(FakeStats::Error(e)) => Err(tracerr::new!(e.clone())),
            stats => Ok(stats.cloned()),
        }
    }
}

#[async_trait(?Send)]
impl PeerConnection for FakePeerConnection {
    type Stream = FakeStream;
    type Track = FakeTrack;

    fn has_get_stats(&self) -> bool {
        self.has_get_stats
    }

    fn stats_api(&self) -> Option<Vendor> {
        self.stats_api
    }

    fn local_streams(&self) -> Vec<FakeStream> {
        self.local.clone()
    }

    fn remote_streams(&self) -> Vec<FakeStream> {
        self.remote.clone()
    }

    async fn legacy_stats(
        &self,
        track: &FakeTrack,
    ) -> Result<LegacyStatsResponse, Traced<platform::Error>> {
        match self.query(Vendor::Chrome, track).await? {
            Some(FakeStats::Legacy(response)) => Ok(response),
            _ => Ok(LegacyStatsResponse::default()),
        }
    }

    async fn map_stats(
        &self,
        track: &FakeTrack,
    ) -> Result<MapStatsReport, Traced<platform::Error>> {
        match self.query(Vendor::Firefox, track).await? {
            Some(FakeStats::Map(report)) => Ok(report),
            _ => Ok(MapStatsReport::default()),
        }
    }
}
