//! Versioned, namespaced tool identity
//!
//! A [`ToolId`] is the stable wire identity of a tool capability. Its
//! canonical string form is `domain.name@major` (e.g. `web.request@1`).
//! Equality and hashing compare the parsed parts componentwise, which for
//! parsed ids coincides with comparing the canonical form, without the
//! allocation rendering it would cost.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a tool capability, canonical form `domain.name@major`.
///
/// Parsing is strict: exactly one `@` separating a `domain.name` pair
/// (exactly one `.`) from a base-10 major version. Anything else is
/// rejected with [`DomainError::InvalidToolId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolId {
    domain: String,
    name: String,
    major: u32,
}

impl ToolId {
    /// Construct from already-validated parts.
    pub fn new(domain: impl Into<String>, name: impl Into<String>, major: u32) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            major,
        }
    }

    /// Parse the canonical `domain.name@major` form.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidToolId(value.to_string());

        let mut at_parts = value.split('@');
        let (qualified, version) = match (at_parts.next(), at_parts.next(), at_parts.next()) {
            (Some(qualified), Some(version), None) => (qualified, version),
            _ => return Err(invalid()),
        };

        let major: u32 = version.parse().map_err(|_| invalid())?;

        let mut dot_parts = qualified.split('.');
        let (domain, name) = match (dot_parts.next(), dot_parts.next(), dot_parts.next()) {
            (Some(domain), Some(name), None) => (domain, name),
            _ => return Err(invalid()),
        };

        if domain.is_empty() || name.is_empty() {
            return Err(invalid());
        }

        Ok(Self::new(domain, name, major))
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    /// Canonical string form, `domain.name@major`.
    pub fn canonical(&self) -> String {
        format!("{}.{}@{}", self.domain, self.name, self.major)
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}@{}", self.domain, self.name, self.major)
    }
}

impl std::str::FromStr for ToolId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
