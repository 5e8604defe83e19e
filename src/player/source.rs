use tracing::debug;

use crate::models::{LocalFile, MediaSource};

use super::traits::PlaybackSurface;

/// Arena-of-one owner of the session's media source. At most one ephemeral
/// handle is live at any time, and this slot is the only authority allowed
/// to revoke it. `release` on an empty slot is a no-op, which keeps
/// revocation idempotent.
pub(crate) struct SourceSlot {
    current: Option<MediaSource>,
}

impl SourceSlot {
    pub fn new(initial: Option<MediaSource>) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Option<&MediaSource> {
        self.current.as_ref()
    }

    /// Mint a fresh ephemeral source for `file` and install it. The prior
    /// ephemeral handle (if any) is revoked before the new one is exposed.
    pub fn install_ephemeral(
        &mut self,
        surface: &dyn PlaybackSurface,
        file: &LocalFile,
    ) -> MediaSource {
        self.release(surface);

        let handle = surface.mint_ephemeral(file);
        debug!(uri = %handle, file = %file.name, "installed ephemeral media source");
        let source = MediaSource::Ephemeral(handle);
        self.current = Some(source.clone());
        source
    }

    /// Drop the current source, revoking it if ephemeral. Persistent
    /// sources are never revoked.
    pub fn release(&mut self, surface: &dyn PlaybackSurface) {
        match self.current.take() {
            Some(MediaSource::Ephemeral(handle)) => {
                debug!(uri = %handle, "revoking ephemeral media source");
                surface.revoke_ephemeral(&handle);
            }
            Some(MediaSource::Persistent(url)) => {
                debug!(url = %url, "dropping persistent media source");
            }
            None => {}
        }
    }
}
