//! Emit options supplied by the caller of the code generator.

use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, CodegenResult};

/// Default per-level indent of generated fragments.
pub const DEFAULT_INDENT_UNIT: &str = "  ";

/// Options controlling what gets emitted.
///
/// Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmitOptions {
    /// Emit rule trace instrumentation. When false, every trace fragment is
    /// empty.
    pub trace: bool,
    /// Indent string repeated once per nesting level.
    pub indent_unit: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            trace: false,
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }
}

impl EmitOptions {
    /// Default options with tracing switched on.
    pub fn traced() -> Self {
        Self {
            trace: true,
            ..Self::default()
        }
    }

    /// Parse options from JSON and validate them.
    pub fn from_json(json: &str) -> CodegenResult<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| CodegenError::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// The indent unit must be non-empty and made of spaces and tabs only.
    pub fn validate(&self) -> CodegenResult<()> {
        if self.indent_unit.is_empty() {
            return Err(CodegenError::InvalidOptions(
                "indentUnit must not be empty".to_string(),
            ));
        }
        if !self.indent_unit.chars().all(|c| c == ' ' || c == '\t') {
            return Err(CodegenError::InvalidOptions(format!(
                "indentUnit {:?} may only contain spaces and tabs",
                self.indent_unit
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EmitOptions::default();
        assert!(!options.trace);
        assert_eq!(options.indent_unit, "  ");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let options = EmitOptions::from_json(r#"{"trace": true}"#).unwrap();
        assert_eq!(options, EmitOptions::traced());
    }

    #[test]
    fn test_from_json_custom_indent() {
        let options = EmitOptions::from_json(r#"{"indentUnit": "\t"}"#).unwrap();
        assert_eq!(options.indent_unit, "\t");
        assert!(!options.trace);
    }

    #[test]
    fn test_rejects_bad_indent_unit() {
        let err = EmitOptions::from_json(r#"{"indentUnit": ""}"#).unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOptions(_)));
        let err = EmitOptions::from_json(r#"{"indentUnit": "--"}"#).unwrap_err();
        assert!(err.to_string().contains("spaces and tabs"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = EmitOptions::from_json("{trace: yes}").unwrap_err();
        assert!(matches!(err, CodegenError::InvalidOptions(_)));
    }
}
