use crate::utils::TokenKey;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    #[error("source and destination must differ")]
    InvalidRequest,
    #[error("no route found from {from} to {to}")]
    RouteNotFound { from: TokenKey, to: TokenKey },
    #[error("chain does not reach its destination or passes through the native token")]
    UnsolvedChain,
    #[error("trading pair {0} connects a token with itself")]
    InvalidPair(String),
}

impl RoutingError {
    /// Errors the caller can not fix by retrying with the same pairs
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoutingError::InvalidRequest | RoutingError::RouteNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RoutingError::RouteNotFound { from: TokenKey::Native, to: TokenKey::Custom("secret1xyz".to_string()) };
        assert_eq!(err.to_string(), "no route found from native to secret1xyz");
        assert_eq!(RoutingError::InvalidRequest.to_string(), "source and destination must differ");
    }

    #[test]
    fn test_terminal_errors() {
        assert!(RoutingError::InvalidRequest.is_terminal());
        assert!(RoutingError::RouteNotFound { from: TokenKey::Native, to: TokenKey::Native }.is_terminal());
        assert!(!RoutingError::UnsolvedChain.is_terminal());
    }
}
