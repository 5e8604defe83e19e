use async_trait::async_trait;
use thiserror::Error;

use crate::models::{EphemeralHandle, LocalFile, MediaSource};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// The host environment refused a programmatic playback start.
    #[error("playback start rejected by host autoplay policy")]
    AutoplayBlocked,
    /// The playback container does not exist yet.
    #[error("playback container is not available")]
    NoContainer,
    #[error("surface failure: {0}")]
    Failed(String),
}

/// The host-provided media element/engine that decodes and renders the
/// media. The controller commands it and mirrors its reports; it never
/// inspects media data itself.
///
/// Pause cannot be rejected, so the fallible operations are the ones the
/// host may refuse: starting playback (autoplay policy) and fullscreen
/// requests (no container yet).
#[async_trait]
pub trait PlaybackSurface: Send + Sync {
    /// Point the surface at a new media source.
    async fn load(&self, source: &MediaSource);

    /// Request playback start. May be rejected by host autoplay policy.
    async fn play(&self) -> Result<(), SurfaceError>;

    async fn pause(&self);

    async fn seek(&self, position_seconds: f64);

    async fn set_volume(&self, volume: f64);

    async fn set_muted(&self, muted: bool);

    async fn set_rate(&self, rate: f64);

    /// Detach any media source from the surface.
    async fn clear(&self);

    /// The host environment's actual fullscreen status.
    fn fullscreen_active(&self) -> bool;

    fn request_fullscreen(&self) -> Result<(), SurfaceError>;

    fn exit_fullscreen(&self) -> Result<(), SurfaceError>;

    /// Mint an ephemeral handle for a user-selected file.
    fn mint_ephemeral(&self, file: &LocalFile) -> EphemeralHandle;

    /// Release an ephemeral handle. Called exactly once per live handle.
    fn revoke_ephemeral(&self, handle: &EphemeralHandle);

    fn open_file_picker(&self);

    fn open_folder_picker(&self);
}
