pub mod controller;
mod fullscreen;
mod source;
pub mod traits;
mod visibility;

pub use controller::PlayerHandle;
pub use traits::{PlaybackSurface, SurfaceError};
