use tracing::debug;

use crate::state::SessionState;

use super::traits::PlaybackSurface;

/// Toggle fullscreen against the host's actual reported state. The flag is
/// set optimistically; the host confirms or corrects it through the next
/// fullscreen-change notification (see [`reconcile`]).
pub(crate) fn toggle(surface: &dyn PlaybackSurface, state: &SessionState) {
    if !surface.fullscreen_active() {
        match surface.request_fullscreen() {
            Ok(()) => state.update(|s| s.is_fullscreen = true),
            Err(e) => debug!("fullscreen request ignored: {}", e),
        }
    } else {
        match surface.exit_fullscreen() {
            Ok(()) => state.update(|s| s.is_fullscreen = false),
            Err(e) => debug!("fullscreen exit ignored: {}", e),
        }
    }
}

/// Align the session with the host's reported fullscreen state. The host
/// can leave fullscreen without going through the controller (escape key,
/// OS-level exit), so this runs on every host notification.
pub(crate) fn reconcile(state: &SessionState, active: bool) {
    state.update(|s| {
        if s.is_fullscreen != active {
            debug!(active, "reconciling fullscreen state with host");
            s.is_fullscreen = active;
        }
    });
}
