use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use once_cell::sync::Lazy;

use nova_player::{EphemeralHandle, LocalFile, MediaSource, PlaybackSurface, SurfaceError};

static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "nova_player=debug".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Recording playback surface shared by the integration tests. Every
/// command is logged, ephemeral handles are tracked from mint to revoke,
/// and play/fullscreen can be scripted to fail the way a host would.
pub struct RecordingSurface {
    commands: Mutex<Vec<String>>,
    play_blocked: AtomicBool,
    container_missing: AtomicBool,
    fullscreen: AtomicBool,
    next_handle: AtomicU64,
    live: Mutex<Vec<String>>,
    revokes: Mutex<HashMap<String, usize>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        init_tracing();
        Self {
            commands: Mutex::new(Vec::new()),
            play_blocked: AtomicBool::new(false),
            container_missing: AtomicBool::new(false),
            fullscreen: AtomicBool::new(false),
            next_handle: AtomicU64::new(1),
            live: Mutex::new(Vec::new()),
            revokes: Mutex::new(HashMap::new()),
        }
    }

    pub fn set_play_blocked(&self, blocked: bool) {
        self.play_blocked.store(blocked, Ordering::SeqCst);
    }

    pub fn set_container_missing(&self, missing: bool) {
        self.container_missing.store(missing, Ordering::SeqCst);
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    pub fn live_ephemerals(&self) -> Vec<String> {
        self.live.lock().unwrap().clone()
    }

    pub fn revoke_count(&self, uri: &str) -> usize {
        self.revokes.lock().unwrap().get(uri).copied().unwrap_or(0)
    }

    fn record(&self, command: impl Into<String>) {
        self.commands.lock().unwrap().push(command.into());
    }
}

#[async_trait]
impl PlaybackSurface for RecordingSurface {
    async fn load(&self, source: &MediaSource) {
        self.record(format!("load {}", source.uri()));
    }

    async fn play(&self) -> Result<(), SurfaceError> {
        if self.play_blocked.load(Ordering::SeqCst) {
            return Err(SurfaceError::AutoplayBlocked);
        }
        self.record("play");
        Ok(())
    }

    async fn pause(&self) {
        self.record("pause");
    }

    async fn seek(&self, position_seconds: f64) {
        self.record(format!("seek {}", position_seconds));
    }

    async fn set_volume(&self, volume: f64) {
        self.record(format!("volume {}", volume));
    }

    async fn set_muted(&self, muted: bool) {
        self.record(format!("muted {}", muted));
    }

    async fn set_rate(&self, rate: f64) {
        self.record(format!("rate {}", rate));
    }

    async fn clear(&self) {
        self.record("clear");
    }

    fn fullscreen_active(&self) -> bool {
        self.fullscreen.load(Ordering::SeqCst)
    }

    fn request_fullscreen(&self) -> Result<(), SurfaceError> {
        if self.container_missing.load(Ordering::SeqCst) {
            return Err(SurfaceError::NoContainer);
        }
        self.fullscreen.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn exit_fullscreen(&self) -> Result<(), SurfaceError> {
        if self.container_missing.load(Ordering::SeqCst) {
            return Err(SurfaceError::NoContainer);
        }
        self.fullscreen.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn mint_ephemeral(&self, file: &LocalFile) -> EphemeralHandle {
        let id = self.next_handle.fetch_add(1, Ordering::SeqCst);
        let uri = format!("blob:test/{}-{}", id, file.name);
        self.live.lock().unwrap().push(uri.clone());
        EphemeralHandle::new(uri)
    }

    fn revoke_ephemeral(&self, handle: &EphemeralHandle) {
        self.live.lock().unwrap().retain(|uri| uri != handle.uri());
        *self
            .revokes
            .lock()
            .unwrap()
            .entry(handle.uri().to_string())
            .or_insert(0) += 1;
    }

    fn open_file_picker(&self) {
        self.record("open_file_picker");
    }

    fn open_folder_picker(&self) {
        self.record("open_folder_picker");
    }
}

/// Let spawned timer tasks run after a paused-clock advance.
pub async fn run_pending() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
