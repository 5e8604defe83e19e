pub mod types;

pub use types::SurfaceEvent;
