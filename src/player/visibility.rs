use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

use crate::state::SessionState;

/// Inactivity countdown behind the controls auto-hide policy. Every show
/// trigger cancels the running countdown and starts a fresh one; expiry
/// hides the controls only if playback is still running at that moment, so
/// a countdown that outlives a pause cannot hide anything.
pub(crate) struct HideTimer {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl HideTimer {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    /// Cancel any pending countdown and start a new one.
    pub fn restart(&self, state: &SessionState, delay: Duration) {
        self.cancel();

        let state = state.clone();
        // Anchor the countdown deadline at restart time, not at first poll
        // of the spawned task.
        let countdown = tokio::time::sleep(delay);
        let task = tokio::spawn(async move {
            countdown.await;
            state.update(|s| {
                if s.is_playing {
                    trace!("controls inactivity countdown elapsed, hiding");
                    s.controls_visible = false;
                }
            });
        });
        *self.handle.lock().unwrap() = Some(task);
    }

    /// Cancel any pending countdown.
    pub fn cancel(&self) {
        if let Some(task) = self.handle.lock().unwrap().take() {
            task.abort();
        }
    }
}

impl Drop for HideTimer {
    fn drop(&mut self) {
        // A discarded controller must not leave a timer mutating state.
        self.cancel();
    }
}
