//! Persisted session mirror.
//!
//! The mirror is a passive copy of the current session that survives restarts:
//! set on login/register, removed on logout, read once at startup. It holds a
//! whole serialized session or nothing, never a partial one.

use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::auth::Session;
use crate::error::StoreResult;

/// Storage seam for the persisted session mirror.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the mirrored session, if any. `Ok(None)` means no session is
    /// persisted; a parse error means the mirror exists but is unreadable.
    async fn load(&self) -> StoreResult<Option<Session>>;

    /// Overwrite the mirror with the given session.
    async fn save(&self, session: &Session) -> StoreResult<()>;

    /// Remove the mirror entirely.
    async fn clear(&self) -> StoreResult<()>;
}

/// In-memory store for tests and ephemeral runs.
///
/// Holds the serialized form rather than the session itself so tests can
/// inject unreadable payloads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RwLock<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with a raw payload, bypassing serialization.
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: RwLock::new(Some(raw.to_string())),
        }
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self) -> StoreResult<Option<Session>> {
        let slot = self.slot.read().unwrap();
        match slot.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, session: &Session) -> StoreResult<()> {
        let raw = serde_json::to_string(session)?;
        *self.slot.write().unwrap() = Some(raw);
        Ok(())
    }

    async fn clear(&self) -> StoreResult<()> {
        *self.slot.write().unwrap() = None;
        Ok(())
    }
}

/// File-backed store: one JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path. The file and its parent
    /// directory are created lazily on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionStore for JsonFileStore {
    async fn load(&self) -> StoreResult<Option<Session>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, session: &Session) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }

    async fn clear(&self) -> StoreResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
