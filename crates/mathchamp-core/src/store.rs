//! Best-effort session persistence.
//!
//! Nothing here is part of the core's correctness contract: a record that
//! cannot be read back degrades to "no saved session", and write failures
//! observed through [`StoreObserver`] are logged and dropped.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::controller::SessionObserver;
use crate::session::{Phase, Session};

/// Somewhere a session can be cached between runs.
pub trait SessionStore {
    /// The saved session, if one exists and is usable.
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Stores the session as a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read session from {}", self.path.display()))?;
        let session: Session =
            serde_json::from_str(&content).context("failed to parse session JSON")?;
        anyhow::ensure!(
            session.is_consistent(),
            "saved session in {} is inconsistent",
            self.path.display()
        );
        Ok(Some(session))
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Option<Session> {
        match self.read() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("discarding saved session: {e:#}");
                None
            }
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string_pretty(session).context("failed to serialize session")?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write session to {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), phase = %session.phase(), "session saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}

/// In-memory store, mainly for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<Session> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        *slot = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        *slot = None;
        Ok(())
    }
}

/// Saves active and complete sessions and clears the store on reset.
pub struct StoreObserver<S> {
    store: S,
}

impl<S: SessionStore> StoreObserver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: SessionStore> SessionObserver for StoreObserver<S> {
    fn on_state_change(&self, session: &Session) {
        let outcome = match session.phase() {
            Phase::Active | Phase::Complete => self.store.save(session),
            Phase::NotStarted => self.store.clear(),
        };
        if let Err(e) = outcome {
            tracing::warn!("session cache not updated: {e:#}");
        }
    }
}

impl<S: SessionStore> SessionStore for &S {
    fn load(&self) -> Option<Session> {
        (**self).load()
    }

    fn save(&self, session: &Session) -> Result<()> {
        (**self).save(session)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
