pub mod session;

pub use session::{PlaybackSession, SessionState};
