// Playback session controller for an embedded video player shell.
//
// The controller owns transport state, the controls auto-hide timer,
// fullscreen synchronization with the host environment, and the lifecycle
// of ephemeral local-file handles. Everything visual is an external
// collaborator: views subscribe to session snapshots and issue commands
// through a PlayerHandle.

pub mod config;
pub mod constants;
pub mod events;
pub mod models;
pub mod player;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use config::PlayerConfig;
pub use events::SurfaceEvent;
pub use models::{AspectMode, EphemeralHandle, LocalFile, MediaSource, SessionId};
pub use player::{PlaybackSurface, PlayerHandle, SurfaceError};
pub use state::PlaybackSession;
