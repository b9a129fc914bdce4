use crate::utils::error::{CartaError, Result};
use std::sync::RwLock;

/// Connection lifecycle of an integration port. Set only through a
/// successful connect; read-only to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected {
        provider: String,
    },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }

    pub fn provider(&self) -> Option<&str> {
        match self {
            ConnectionState::Connected { provider } => Some(provider),
            ConnectionState::Disconnected => None,
        }
    }
}

/// Shared state machine for the integration ports. Transitions take the
/// write lock and reads take the read lock, so an operational call racing a
/// connect sees either the old state or the new one, never a torn mix of
/// flag and provider. The lock is never held across an await.
#[derive(Debug, Default)]
pub struct ConnectionGate {
    state: RwLock<ConnectionState>,
}

impl ConnectionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_connected(&self) -> bool {
        self.state().is_connected()
    }

    /// Records a successful connect. Idempotent: reconnecting under the same
    /// or a new provider simply replaces the state in one transition.
    pub fn mark_connected(&self, provider: impl Into<String>) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        *state = ConnectionState::Connected {
            provider: provider.into(),
        };
    }

    pub fn mark_disconnected(&self) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        *state = ConnectionState::Disconnected;
    }

    /// Gate for operational calls: NotConnected until a connect succeeded.
    pub fn require_connected(&self, port: &'static str) -> Result<()> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(CartaError::NotConnected { port })
        }
    }
}
