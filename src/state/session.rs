use tokio::sync::watch;

use crate::config::PlayerConfig;
use crate::constants;
use crate::models::{AspectMode, MediaSource, SessionId};

/// Immutable snapshot of the live playback session. Views receive clones of
/// this through [`SessionState::subscribe`] and never mutate it directly.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    pub session_id: SessionId,
    pub media_source: Option<MediaSource>,
    pub is_playing: bool,
    pub position_seconds: f64,
    /// 0.0 until the playback surface reports the real duration.
    pub duration_seconds: f64,
    pub volume_level: f64,
    pub is_muted: bool,
    pub playback_rate: f64,
    /// Mirrors the host environment's actual fullscreen status, not merely
    /// the last request.
    pub is_fullscreen: bool,
    pub controls_visible: bool,
    pub zoom_level: f64,
    pub aspect_mode: AspectMode,
    /// `None` means the "Off" sentinel is selected.
    pub subtitle_track: Option<String>,
    pub audio_track_index: usize,
    pub available_subtitle_tracks: Vec<String>,
    pub available_audio_tracks: Vec<String>,
}

impl PlaybackSession {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            session_id: SessionId::new(),
            media_source: config.default_source().map(MediaSource::Persistent),
            is_playing: false,
            position_seconds: 0.0,
            duration_seconds: 0.0,
            volume_level: config
                .playback
                .default_volume
                .clamp(constants::MIN_VOLUME, constants::MAX_VOLUME),
            is_muted: config.playback.start_muted,
            playback_rate: config
                .playback
                .default_rate
                .clamp(constants::MIN_PLAYBACK_RATE, constants::MAX_PLAYBACK_RATE),
            is_fullscreen: false,
            controls_visible: true,
            zoom_level: constants::MIN_ZOOM_LEVEL,
            aspect_mode: AspectMode::default(),
            subtitle_track: None,
            audio_track_index: 0,
            available_subtitle_tracks: default_subtitle_tracks(),
            available_audio_tracks: default_audio_tracks(),
        }
    }
}

fn default_subtitle_tracks() -> Vec<String> {
    ["Off", "English", "Spanish", "French", "German"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_audio_tracks() -> Vec<String> {
    ["Track 1 (Default)", "Track 2", "Track 3"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Single authoritative session store. Mutations go through [`update`],
/// which publishes the new snapshot to every subscriber before returning,
/// so a read issued after an operation always sees that operation applied.
///
/// [`update`]: SessionState::update
#[derive(Clone)]
pub struct SessionState {
    tx: watch::Sender<PlaybackSession>,
}

impl SessionState {
    pub fn new(initial: PlaybackSession) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn snapshot(&self) -> PlaybackSession {
        self.tx.borrow().clone()
    }

    pub fn update<F>(&self, mutate: F)
    where
        F: FnOnce(&mut PlaybackSession),
    {
        self.tx.send_modify(mutate);
    }

    pub fn subscribe(&self) -> watch::Receiver<PlaybackSession> {
        self.tx.subscribe()
    }

    pub fn is_playing(&self) -> bool {
        self.tx.borrow().is_playing
    }
}
