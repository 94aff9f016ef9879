use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::models::Identity;
use crate::store::Storage;

/// Storage key of the persisted identity record.
pub const SESSION_KEY: &str = "user";

/// At most one identity plus the advisory busy flag. Never persisted as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
    busy: bool,
}

impl Session {
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

pub struct SessionStore<S: Storage> {
    storage: S,
    session: Session,
}

impl<S: Storage> SessionStore<S> {
    /// Restores a persisted identity. Unreadable or malformed records start anonymous.
    pub fn load(storage: S) -> Self {
        let identity = match storage.get(SESSION_KEY) {
            Ok(Some(raw)) => {
                let decoded = decode_identity(&raw);
                if decoded.is_none() {
                    debug!("Ignoring malformed session record");
                }
                decoded
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read session record: {:#}", e);
                None
            }
        };

        if let Some(identity) = &identity {
            info!(role = %identity.role(), "Restored session for {}", identity.email);
        }

        Self {
            storage,
            session: Session {
                identity,
                busy: false,
            },
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persists first; the in-memory session only changes once the record is written.
    pub fn login(&mut self, identity: Identity) -> Result<()> {
        let raw = encode_identity(&identity)?;
        self.storage
            .set(SESSION_KEY, &raw)
            .context("Failed to persist session")?;
        info!(role = %identity.role(), "Signed in as {}", identity.email);
        self.session.identity = Some(identity);
        Ok(())
    }

    /// Clears the durable record, then memory. On storage failure nothing is cleared.
    pub fn logout(&mut self) -> Result<()> {
        self.storage
            .remove(SESSION_KEY)
            .context("Failed to clear persisted session")?;
        if let Some(identity) = self.session.identity.take() {
            info!("Signed out {}", identity.email);
        }
        self.session.busy = false;
        Ok(())
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.session.busy = busy;
    }
}

pub fn encode_identity(identity: &Identity) -> Result<String> {
    serde_json::to_string(identity).context("Failed to serialize identity")
}

/// Strict decode: all of id, email, name, role present and non-blank.
pub fn decode_identity(raw: &str) -> Option<Identity> {
    let identity: Identity = serde_json::from_str(raw).ok()?;
    identity.is_well_formed().then_some(identity)
}
