// Playback tuning constants - all transport clamp bounds and timing
// defaults in one place

// === Transport clamps ===
pub const MIN_PLAYBACK_RATE: f64 = 0.25;
pub const MAX_PLAYBACK_RATE: f64 = 4.0;

pub const MIN_ZOOM_LEVEL: f64 = 1.0;
pub const MAX_ZOOM_LEVEL: f64 = 3.0;

pub const MIN_VOLUME: f64 = 0.0;
pub const MAX_VOLUME: f64 = 1.0;

// === Controls visibility ===
/// Inactivity window before on-screen controls hide during playback.
pub const CONTROLS_HIDE_DELAY_MS: u64 = 3000;

// === Playback defaults ===
pub const DEFAULT_VOLUME: f64 = 1.0;
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

/// Volume restored when unmuting while the level sits at zero.
pub const UNMUTE_RESTORE_VOLUME: f64 = 1.0;
