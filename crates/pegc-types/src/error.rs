use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A violated internal contract.
///
/// Raised when a documented precondition does not hold. This is a
/// compiler-internal bug, not a user diagnostic: it is never caught or
/// retried inside the core and always propagates to the caller, which decides
/// whether to abort the compilation or report it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("contract violation: {message}")]
pub struct ContractViolation {
    /// Human-readable description of the broken precondition.
    pub message: String,
}

impl ContractViolation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violation_display() {
        let err = ContractViolation::new("start rule missing");
        assert_eq!(err.to_string(), "contract violation: start rule missing");
    }

    #[test]
    fn test_contract_violation_json_serialization() {
        let err = ContractViolation::new("Invalid event type");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"message":"Invalid event type"}"#);

        let deserialized: ContractViolation = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, err);
    }

    #[test]
    fn test_error_determinism_100_iterations() {
        let first = serde_json::to_string(&ContractViolation::new("x")).unwrap();
        for i in 0..100 {
            let json = serde_json::to_string(&ContractViolation::new("x")).unwrap();
            assert_eq!(first, json, "Determinism failure at iteration {i}");
        }
    }
}
