use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::PlayerConfig;
use crate::constants;
use crate::events::SurfaceEvent;
use crate::models::{AspectMode, LocalFile};
use crate::state::{PlaybackSession, SessionState};

use super::fullscreen;
use super::source::SourceSlot;
use super::traits::PlaybackSurface;
use super::visibility::HideTimer;

/// Owns the playback session and drives the playback surface. Every
/// operation updates session state and commands the surface within the same
/// call, so a snapshot read after an operation reflects that operation.
///
/// The controller is reached only through [`PlayerHandle`]; exactly one
/// controller exists per player.
pub struct SessionController {
    config: PlayerConfig,
    surface: Arc<dyn PlaybackSurface>,
    state: SessionState,
    source: Mutex<SourceSlot>,
    hide_timer: HideTimer,
}

impl SessionController {
    fn new(config: PlayerConfig, surface: Arc<dyn PlaybackSurface>) -> Self {
        let session = PlaybackSession::new(&config);
        info!(session_id = %session.session_id, "creating playback session");
        let source = Mutex::new(SourceSlot::new(session.media_source.clone()));
        Self {
            config,
            surface,
            state: SessionState::new(session),
            source,
            hide_timer: HideTimer::new(),
        }
    }

    /// Push the initial session onto the surface. Playback itself starts
    /// when the surface reports `MetadataLoaded`.
    async fn start(&self) {
        let session = self.state.snapshot();
        if let Some(source) = &session.media_source {
            debug!(uri = %source.uri(), "loading initial media source");
            self.surface.load(source).await;
        }
        self.surface.set_muted(session.is_muted).await;
        self.surface.set_volume(session.volume_level).await;
        self.surface.set_rate(session.playback_rate).await;
    }

    async fn toggle_play(&self) {
        if self.state.is_playing() {
            self.surface.pause().await;
            self.set_playing(false);
        } else {
            match self.surface.play().await {
                Ok(()) => self.set_playing(true),
                Err(e) => {
                    // Rejection is a normal outcome, observable only here
                    warn!("playback start rejected: {}", e);
                    self.set_playing(false);
                }
            }
        }
    }

    async fn seek_to(&self, position_seconds: f64) {
        let target = {
            let s = self.state.snapshot();
            position_seconds.clamp(0.0, s.duration_seconds)
        };
        self.surface.seek(target).await;
        self.state.update(|s| s.position_seconds = target);
    }

    async fn set_volume(&self, volume: f64) {
        let volume = volume.clamp(constants::MIN_VOLUME, constants::MAX_VOLUME);
        let muted = volume == 0.0;
        self.surface.set_volume(volume).await;
        self.surface.set_muted(muted).await;
        self.state.update(|s| {
            s.volume_level = volume;
            s.is_muted = muted;
        });
    }

    async fn toggle_mute(&self) {
        let (muted, restore_volume) = {
            let s = self.state.snapshot();
            let next = !s.is_muted;
            (next, !next && s.volume_level == 0.0)
        };
        self.surface.set_muted(muted).await;
        if restore_volume {
            self.surface
                .set_volume(constants::UNMUTE_RESTORE_VOLUME)
                .await;
        }
        self.state.update(|s| {
            s.is_muted = muted;
            if restore_volume {
                s.volume_level = constants::UNMUTE_RESTORE_VOLUME;
            }
        });
    }

    async fn change_playback_rate(&self, delta: f64) {
        let rate = {
            let s = self.state.snapshot();
            (s.playback_rate + delta)
                .clamp(constants::MIN_PLAYBACK_RATE, constants::MAX_PLAYBACK_RATE)
        };
        self.surface.set_rate(rate).await;
        self.state.update(|s| s.playback_rate = rate);
    }

    fn change_zoom(&self, delta: f64) {
        self.state.update(|s| {
            s.zoom_level =
                (s.zoom_level + delta).clamp(constants::MIN_ZOOM_LEVEL, constants::MAX_ZOOM_LEVEL);
        });
    }

    fn set_aspect_mode(&self, mode: AspectMode) {
        self.state.update(|s| s.aspect_mode = mode);
    }

    fn select_subtitle_track(&self, track: Option<String>) {
        debug!(?track, "subtitle track selected");
        self.state.update(|s| s.subtitle_track = track);
    }

    fn select_audio_track(&self, index: usize) {
        self.state.update(|s| {
            if index < s.available_audio_tracks.len() {
                s.audio_track_index = index;
            } else {
                debug!(index, "ignoring out-of-range audio track selection");
            }
        });
    }

    async fn exit_session(&self) {
        info!("exiting playback session");
        self.surface.pause().await;
        self.source.lock().unwrap().release(self.surface.as_ref());
        self.surface.clear().await;
        self.hide_timer.cancel();
        self.state.update(|s| {
            s.media_source = None;
            s.is_playing = false;
            s.position_seconds = 0.0;
            s.duration_seconds = 0.0;
            s.controls_visible = true;
            // Display and track preferences outlive the session
        });
    }

    async fn handle_event(&self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::FileSelected(file) => self.load_local_file(file).await,
            SurfaceEvent::PointerMoved | SurfaceEvent::PanelOpened => self.poke_controls(),
            SurfaceEvent::ContainerClicked => self.toggle_controls(),
            SurfaceEvent::ContainerDoubleClicked => {
                fullscreen::toggle(self.surface.as_ref(), &self.state)
            }
            SurfaceEvent::TimeUpdate { position_seconds } => {
                self.state.update(|s| {
                    s.position_seconds = if s.duration_seconds > 0.0 {
                        position_seconds.clamp(0.0, s.duration_seconds)
                    } else {
                        position_seconds.max(0.0)
                    };
                });
            }
            SurfaceEvent::MetadataLoaded {
                duration_seconds,
                playback_rate,
            } => self.metadata_loaded(duration_seconds, playback_rate).await,
            SurfaceEvent::PlaybackEnded => {
                debug!("playback ended");
                self.set_playing(false);
            }
            SurfaceEvent::FullscreenChanged { active } => {
                fullscreen::reconcile(&self.state, active)
            }
        }
    }

    /// Replace the media source with an ephemeral handle for `file`. The
    /// initial mute existed only to satisfy autoplay policy, so a
    /// user-picked file starts audible at the default volume.
    async fn load_local_file(&self, file: LocalFile) {
        info!(file = %file.name, "loading user-selected file");
        let source = self
            .source
            .lock()
            .unwrap()
            .install_ephemeral(self.surface.as_ref(), &file);

        self.surface.load(&source).await;
        self.surface.set_muted(false).await;
        let volume = self
            .config
            .playback
            .default_volume
            .clamp(constants::MIN_VOLUME, constants::MAX_VOLUME);
        self.surface.set_volume(volume).await;

        self.state.update(|s| {
            s.media_source = Some(source);
            s.is_muted = false;
            s.volume_level = volume;
            s.position_seconds = 0.0;
            s.duration_seconds = 0.0;
        });
        // Playback restarts once the surface reports the new metadata
        self.set_playing(false);
    }

    async fn metadata_loaded(&self, duration_seconds: f64, playback_rate: f64) {
        debug!(duration_seconds, playback_rate, "media metadata loaded");
        self.state.update(|s| {
            s.duration_seconds = duration_seconds.max(0.0);
            s.playback_rate =
                playback_rate.clamp(constants::MIN_PLAYBACK_RATE, constants::MAX_PLAYBACK_RATE);
            s.position_seconds = s.position_seconds.clamp(0.0, s.duration_seconds);
        });

        match self.surface.play().await {
            Ok(()) => self.set_playing(true),
            Err(e) => {
                warn!("autoplay attempt rejected: {}", e);
                self.set_playing(false);
            }
        }
    }

    /// Record the playing flag and keep the visibility policy in step:
    /// playing restarts the inactivity countdown, paused/stopped forces the
    /// controls visible and cancels any countdown.
    fn set_playing(&self, playing: bool) {
        self.state.update(|s| {
            s.is_playing = playing;
            if !playing {
                s.controls_visible = true;
            }
        });
        if playing {
            self.hide_timer.restart(&self.state, self.config.hide_delay());
        } else {
            self.hide_timer.cancel();
        }
    }

    /// Show trigger: pointer movement or a panel opening.
    fn poke_controls(&self) {
        self.state.update(|s| s.controls_visible = true);
        if self.state.is_playing() {
            self.hide_timer.restart(&self.state, self.config.hide_delay());
        }
    }

    /// Explicit click-toggle. Hiding is only honored during playback;
    /// controls stay visible while paused.
    fn toggle_controls(&self) {
        let s = self.state.snapshot();
        if s.controls_visible && s.is_playing {
            self.hide_timer.cancel();
            self.state.update(|s| s.controls_visible = false);
        } else {
            self.poke_controls();
        }
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        // Timer teardown happens in HideTimer::drop; the ephemeral handle
        // still needs its one revocation.
        if let Ok(mut slot) = self.source.lock() {
            slot.release(self.surface.as_ref());
        }
    }
}

/// Cloneable handle distributed to views: the full operation set plus
/// read-only access to session snapshots. Views cannot mutate the session
/// except through these operations.
#[derive(Clone)]
pub struct PlayerHandle {
    inner: Arc<SessionController>,
}

impl PlayerHandle {
    /// Build the single controller for a player and push the initial
    /// session onto the surface.
    pub async fn new(config: PlayerConfig, surface: Arc<dyn PlaybackSurface>) -> Self {
        let handle = Self {
            inner: Arc::new(SessionController::new(config, surface)),
        };
        handle.inner.start().await;
        handle
    }

    /// Current session snapshot.
    pub fn snapshot(&self) -> PlaybackSession {
        self.inner.state.snapshot()
    }

    /// Watch the session; the receiver holds the latest snapshot at all
    /// times.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackSession> {
        self.inner.state.subscribe()
    }

    /// Route an input event from the surface or the UI shell.
    pub async fn handle_event(&self, event: SurfaceEvent) {
        self.inner.handle_event(event).await;
    }

    pub async fn toggle_play(&self) {
        self.inner.toggle_play().await;
    }

    pub async fn seek_to(&self, position_seconds: f64) {
        self.inner.seek_to(position_seconds).await;
    }

    pub async fn set_volume(&self, volume: f64) {
        self.inner.set_volume(volume).await;
    }

    pub async fn toggle_mute(&self) {
        self.inner.toggle_mute().await;
    }

    pub async fn change_playback_rate(&self, delta: f64) {
        self.inner.change_playback_rate(delta).await;
    }

    pub async fn toggle_full_screen(&self) {
        fullscreen::toggle(self.inner.surface.as_ref(), &self.inner.state);
    }

    pub fn set_aspect_mode(&self, mode: AspectMode) {
        self.inner.set_aspect_mode(mode);
    }

    pub fn change_zoom(&self, delta: f64) {
        self.inner.change_zoom(delta);
    }

    pub fn select_subtitle_track(&self, track: Option<String>) {
        self.inner.select_subtitle_track(track);
    }

    pub fn select_audio_track(&self, index: usize) {
        self.inner.select_audio_track(index);
    }

    pub fn open_file_picker(&self) {
        self.inner.surface.open_file_picker();
    }

    pub fn open_folder_picker(&self) {
        self.inner.surface.open_folder_picker();
    }

    pub async fn exit_session(&self) {
        self.inner.exit_session().await;
    }
}
