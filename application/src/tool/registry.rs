//! Tool registry
//!
//! Immutable index of tools by canonical id, built once at startup and
//! shared read-only across concurrent runs. A duplicate id is a wiring
//! mistake, so construction fails fast instead of shadowing a tool at
//! runtime.

use crate::ports::tool::Tool;
use relay_domain::ToolId;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while building a [`ToolRegistry`]
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Duplicate tool id '{0}'. Each tool must have a unique ToolId.")]
    DuplicateToolId(String),
}

/// Immutable index of tools by canonical id.
///
/// `all()` preserves registration order, which fixes the tool catalogue
/// rendering; `resolve()` never fails, absence is a normal outcome the
/// agent reports as `ToolNotFound`.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    // canonical id (lower-cased) -> index into `tools`
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Build the registry from the full set of available tools.
    ///
    /// Fails on two tools sharing a canonical id (case-insensitive).
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(tools.len());

        for (position, tool) in tools.iter().enumerate() {
            let key = tool.id().canonical().to_lowercase();
            if index.insert(key.clone(), position).is_some() {
                return Err(RegistryError::DuplicateToolId(tool.id().canonical()));
            }
            tracing::info!(
                tool_id = %tool.id(),
                actions = tool.actions().len(),
                "Registered tool"
            );
        }

        Ok(Self { tools, index })
    }

    /// Every registered tool, in registration order.
    pub fn all(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    /// Look up a tool by id. Absence is a normal outcome.
    pub fn resolve(&self, id: &ToolId) -> Option<&Arc<dyn Tool>> {
        let key = id.canonical().to_lowercase();
        self.index.get(&key).map(|&position| &self.tools[position])
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
