//! Action names and declared action specifications

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized name of a tool action.
///
/// Always lower-cased and non-empty; equality is over the normalized value,
/// so `GET` and `get` name the same action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionName(String);

impl ActionName {
    /// Normalize and validate an action name.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::EmptyActionName);
        }
        Ok(Self(value.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declared specification of one tool action.
///
/// The `parameters_schema` is a JSON Schema string shown to the model as
/// documentation; the core never validates arguments against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolActionSpec {
    pub name: ActionName,
    pub summary: String,
    pub parameters_schema: String,
}

impl ToolActionSpec {
    pub fn new(
        name: ActionName,
        summary: impl Into<String>,
        parameters_schema: impl Into<String>,
    ) -> Self {
        Self {
            name,
            summary: summary.into(),
            parameters_schema: parameters_schema.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case() {
        let name = ActionName::parse("Get_Json").unwrap();
        assert_eq!(name.as_str(), "get_json");
        assert_eq!(name, ActionName::parse("GET_JSON").unwrap());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(ActionName::parse("").is_err());
        assert!(ActionName::parse("   ").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ActionName::parse("get").unwrap().to_string(), "get");
    }
}
