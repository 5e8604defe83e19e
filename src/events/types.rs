use crate::models::LocalFile;

/// Input events routed into the controller from the playback surface and
/// the UI shell. The shell translates raw host events into these and feeds
/// them to [`PlayerHandle::handle_event`](crate::player::PlayerHandle).
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The user picked a local file; an ephemeral source replaces the
    /// current one.
    FileSelected(LocalFile),
    /// Pointer moved over the playback container.
    PointerMoved,
    /// A side panel (playlist, equalizer, media info) opened.
    PanelOpened,
    /// Single click on the playback container.
    ContainerClicked,
    /// Double click on the playback container.
    ContainerDoubleClicked,
    /// The surface reported playback progress.
    TimeUpdate { position_seconds: f64 },
    /// The surface finished probing the loaded media.
    MetadataLoaded {
        duration_seconds: f64,
        playback_rate: f64,
    },
    /// Playback reached the end of the media.
    PlaybackEnded,
    /// The host environment's fullscreen state changed, through any path.
    FullscreenChanged { active: bool },
}
