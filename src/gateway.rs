// 🌐 API Gateway - the seam between the view model and the transport
// The controller only ever talks to this trait; HTTP lives on the other side

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::api::ApiRequest;

/// Failure modes of a gateway call.
///
/// Degenerate success (an empty list) is success, not an error. Timeouts,
/// cancellation and retry policy belong to the gateway implementation; this
/// crate never retries.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, server unreachable.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a 4xx/5xx status.
    #[error("server responded with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected DTO shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        ApiError::Status {
            status,
            message: message.into(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if (400..500).contains(status))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if (500..600).contains(status))
    }
}

/// Executes resource-oriented calls against the journal API.
///
/// Implementations own the actual transport (HTTP client, in-memory fixture,
/// scripted test double). Responses come back as raw JSON; the caller
/// deserializes into the DTO it expects. Endpoints without a response body
/// resolve to `Value::Null`.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

#[async_trait]
impl<G: ApiGateway + ?Sized> ApiGateway for std::sync::Arc<G> {
    async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        (**self).execute(request).await
    }
}

// ============================================================================
// TESTS
// ============================================================================
