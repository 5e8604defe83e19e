use std::fmt;

use url::Url;
use uuid::Uuid;

/// Identifier of a live playback session, carried into log fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-selected local file, opaque to the controller. The host media
/// engine is the only party that can read its contents.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile {
    pub name: String,
    pub len: u64,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, len: u64) -> Self {
        Self {
            name: name.into(),
            len,
        }
    }
}

/// Temporary handle to locally-selected media data, minted by the playback
/// surface and valid until revoked. Revocation bookkeeping lives in the
/// source slot; handles embedded in published snapshots are inert copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EphemeralHandle {
    uri: String,
}

impl EphemeralHandle {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for EphemeralHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri)
    }
}

/// The media reference currently installed in the session.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaSource {
    /// Externally supplied URL. Never revoked by the controller.
    Persistent(Url),
    /// Handle minted from a user-selected file. Revoked exactly once when
    /// superseded or cleared.
    Ephemeral(EphemeralHandle),
}

impl MediaSource {
    pub fn uri(&self) -> &str {
        match self {
            Self::Persistent(url) => url.as_str(),
            Self::Ephemeral(handle) => handle.uri(),
        }
    }

    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Self::Ephemeral(_))
    }
}

/// How the video is fitted into the playback container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectMode {
    #[default]
    Contain,
    Cover,
    Fill,
}

impl AspectMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contain => "contain",
            Self::Cover => "cover",
            Self::Fill => "fill",
        }
    }
}

impl fmt::Display for AspectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
