use crate::domain::model::SessionState;
use crate::domain::ports::{ConfigProvider, Storage};

/// Storage key for the persisted session flag.
pub const SESSION_KEY: &str = "admin_session";

const SESSION_FLAG: &[u8] = b"true";

/// Editorial gate in front of the pricing editor. A static shared secret
/// flips a persisted boolean; this is deliberately not access control.
pub struct SessionGate<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    state: SessionState,
}

impl<S: Storage, C: ConfigProvider> SessionGate<S, C> {
    /// Restores the gate from the persisted flag: an authenticated session
    /// survives a restart until explicit logout.
    pub async fn restore(storage: S, config: C) -> Self {
        let state = match storage.read_file(SESSION_KEY).await {
            Ok(bytes) if bytes == SESSION_FLAG => SessionState::Authenticated,
            _ => SessionState::Anonymous,
        };
        Self {
            storage,
            config,
            state,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    /// Plain comparison against the configured secret. On a match the flag
    /// is persisted and the gate opens; on a mismatch nothing changes.
    /// Retries are unlimited, there is no lockout.
    pub async fn login(&mut self, candidate: &str) -> bool {
        if candidate != self.config.admin_secret() {
            tracing::warn!("Rejected admin login attempt");
            return false;
        }
        if let Err(e) = self.storage.write_file(SESSION_KEY, SESSION_FLAG).await {
            // Session still opens for this process; it just won't survive
            // a restart.
            tracing::warn!("Could not persist session flag: {}", e);
        }
        self.state = SessionState::Authenticated;
        tracing::info!("Admin session opened");
        true
    }

    /// Unconditional: clears the flag and closes the gate.
    pub async fn logout(&mut self) {
        if let Err(e) = self.storage.remove_file(SESSION_KEY).await {
            tracing::debug!("Could not remove session flag: {}", e);
        }
        self.state = SessionState::Anonymous;
        tracing::info!("Admin session closed");
    }
}
