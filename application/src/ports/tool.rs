//! Tool capability port
//!
//! A tool is a named, versioned unit of external action with declared
//! sub-actions. The agent loop depends only on this surface; the declared
//! parameter schemas are documentation for the model, never enforced here.

use async_trait::async_trait;
use relay_domain::{ActionName, ToolActionSpec, ToolId, ToolResult};
use tokio_util::sync::CancellationToken;

/// An external capability the agent can invoke.
///
/// Implementations must fold expected failure modes (validation, policy,
/// timeouts, upstream faults) into [`ToolResult::failure`] rather than
/// panicking or returning transport errors to the agent loop.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Stable versioned identity, canonical form `domain.name@major`
    fn id(&self) -> &ToolId;

    /// Display name for the tool catalogue
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Declared actions, in catalogue order
    fn actions(&self) -> &[ToolActionSpec];

    /// Execute one action with opaque JSON arguments.
    async fn execute(
        &self,
        action: &ActionName,
        arguments: &serde_json::Value,
        cancel: &CancellationToken,
    ) -> ToolResult;
}
