use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartaError {
    #[error("Infrastructure failure: {message}")]
    Infrastructure { message: String },

    #[error("Invalid argument for {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("{port} port is not connected; call connect() first")]
    NotConnected { port: &'static str },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("{operation} is not implemented; no adapter is wired in")]
    NotImplemented { operation: &'static str },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Coarse error kinds so callers can pick a recovery policy without matching
/// on variant payloads. Io/Serialization/TomlParse only occur while loading
/// local files at composition time, so they count as configuration problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Infrastructure,
    InvalidArgument,
    NotConnected,
    NotFound,
    NotImplemented,
    Config,
}

impl CartaError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        CartaError::Infrastructure {
            message: message.into(),
        }
    }

    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CartaError::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        CartaError::Config {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CartaError::Infrastructure { .. } => ErrorKind::Infrastructure,
            CartaError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            CartaError::NotConnected { .. } => ErrorKind::NotConnected,
            CartaError::NotFound { .. } => ErrorKind::NotFound,
            CartaError::NotImplemented { .. } => ErrorKind::NotImplemented,
            CartaError::Config { .. }
            | CartaError::Io(_)
            | CartaError::Serialization(_)
            | CartaError::TomlParse(_) => ErrorKind::Config,
        }
    }

    /// Safe to retry only for infrastructure faults, and even then only on
    /// idempotent read operations.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Infrastructure
    }

    /// NotConnected and NotImplemented indicate a sequencing or wiring bug in
    /// the composition layer, never a condition to handle at the call site.
    pub fn is_wiring_defect(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::NotConnected | ErrorKind::NotImplemented
        )
    }
}

pub type Result<T> = std::result::Result<T, CartaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinguishable() {
        let infra = CartaError::infrastructure("socket closed");
        let unwired = CartaError::NotImplemented {
            operation: "generate_recommendations",
        };
        assert_eq!(infra.kind(), ErrorKind::Infrastructure);
        assert_ne!(infra.kind(), unwired.kind());
        assert!(infra.is_retryable());
        assert!(!unwired.is_retryable());
        assert!(unwired.is_wiring_defect());
    }

    #[test]
    fn not_connected_is_a_defect_not_infrastructure() {
        let err = CartaError::NotConnected {
            port: "reservation",
        };
        assert!(err.is_wiring_defect());
        assert!(!err.is_retryable());
    }
}
