//! Tool execution outcomes
//!
//! Every tool execution produces a [`ToolResult`]: either success with an
//! optional payload (bytes plus MIME type), or failure carrying a structured
//! [`ToolError`]. Tools fold their own faults into the error; they never
//! panic or surface transport exceptions to the agent loop.

use serde::{Deserialize, Serialize};

/// Classification of a tool failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolErrorCode {
    /// The call's arguments were missing or malformed
    ValidationFailed,
    /// Denied by policy (e.g. host not on the allow-list)
    AccessDenied,
    /// The operation timed out or was cancelled
    Timeout,
    /// The upstream service answered, but unusably
    UpstreamError,
    /// Unexpected fault inside the tool
    InternalError,
    /// The requested action is not offered by this tool
    Unsupported,
}

impl std::fmt::Display for ToolErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ToolErrorCode::ValidationFailed => "ValidationFailed",
            ToolErrorCode::AccessDenied => "AccessDenied",
            ToolErrorCode::Timeout => "Timeout",
            ToolErrorCode::UpstreamError => "UpstreamError",
            ToolErrorCode::InternalError => "InternalError",
            ToolErrorCode::Unsupported => "Unsupported",
        };
        f.write_str(s)
    }
}

/// Error that occurred during tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolError {
    pub code: ToolErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Whether a later identical call might succeed
    pub retryable: bool,
}

impl ToolError {
    pub fn new(code: ToolErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }

    // Common error constructors
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ToolErrorCode::ValidationFailed, message)
    }

    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::new(ToolErrorCode::AccessDenied, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ToolErrorCode::Timeout, message)
    }

    pub fn upstream_error(message: impl Into<String>) -> Self {
        Self::new(ToolErrorCode::UpstreamError, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ToolErrorCode::InternalError, message)
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ToolErrorCode::Unsupported, message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool execution, carrying payload or error information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Whether the execution was successful
    pub success: bool,
    /// MIME type of the payload, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Raw payload bytes (for successful execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<u8>>,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
}

impl ToolResult {
    /// Create a successful result carrying a payload
    pub fn success(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            success: true,
            mime_type: Some(mime_type.into()),
            data: Some(data),
            error: None,
        }
    }

    /// Create a failed result
    pub fn failure(error: ToolError) -> Self {
        Self {
            success: false,
            mime_type: None,
            data: None,
            error: Some(error),
        }
    }

    /// Create a failed result that still carries the upstream payload
    pub fn failure_with_payload(
        error: ToolError,
        mime_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            success: false,
            mime_type: Some(mime_type.into()),
            data: Some(data),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }
}
