//! Order cancellation.
//!
//! VTEX answers a successful cancellation request with `200 OK` or
//! `204 No Content`. Failures carry a JSON body shaped either as
//! `{"error": {"message": ...}}` or `{"message": ...}`.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, instrument, warn};
use vtex_orders_core::OrderId;

use crate::error::InvokeError;
use crate::host::{TemplateContext, TemplateInvoker, TemplateName, TemplateResponse};

/// Message used when neither the body nor the error says anything useful.
pub const UNKNOWN_CANCELLATION_ERROR: &str = "unknown cancellation error";

/// Result of a cancellation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// VTEX accepted the cancellation.
    Success,
    /// The cancellation was rejected or could not be sent.
    Failure {
        /// Human-readable reason.
        message: String,
    },
}

impl CancelOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Failure message, `None` on success.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure { message } => Some(message),
        }
    }
}

/// Sends cancellation requests through the `cancelOrder` template.
#[derive(Clone)]
pub struct CancellationGateway {
    invoker: Arc<dyn TemplateInvoker>,
}

impl std::fmt::Debug for CancellationGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancellationGateway")
            .finish_non_exhaustive()
    }
}

impl CancellationGateway {
    /// Create a gateway over the given invoker.
    #[must_use]
    pub fn new(invoker: Arc<dyn TemplateInvoker>) -> Self {
        Self { invoker }
    }

    /// Cancel an order. Never fails; every path resolves to a [`CancelOutcome`].
    #[instrument(skip(self, reason), fields(order_id = %order_id))]
    pub async fn cancel(&self, order_id: &OrderId, reason: &str) -> CancelOutcome {
        let context = TemplateContext::Cancel {
            order_id: order_id.clone(),
            reason: reason.to_owned(),
        };

        match self.invoker.invoke(TemplateName::CancelOrder, &context).await {
            Ok(response) if matches!(response.status, Some(200 | 204)) => {
                info!("Order cancelled");
                CancelOutcome::Success
            }
            Ok(response) => CancelOutcome::Failure {
                message: format!("API: {}", rejection_message(&response)),
            },
            Err(e) => {
                error!(error = %e, "Failed to invoke cancelOrder");
                CancelOutcome::Failure {
                    message: format!("Error al cancelar la orden: {}", invoke_error_message(&e)),
                }
            }
        }
    }
}

/// Pull `error.message`, then `message`, out of a JSON error body.
fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .pointer("/error/message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .or_else(|| {
            value
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
        })
        .map(str::to_owned)
}

fn rejection_message(response: &TemplateResponse) -> String {
    extract_message(&response.response).unwrap_or_else(|| {
        warn!(body = %response.response, "Could not parse cancellation error body");
        let status = response
            .status
            .map_or_else(|| "?".to_owned(), |s| s.to_string());
        let status_text = response
            .status_text
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Error desconocido");
        format!("HTTP {status}: {status_text}")
    })
}

fn invoke_error_message(err: &InvokeError) -> String {
    if let Some(message) = err.response().and_then(extract_message) {
        return message;
    }
    let own = err.to_string();
    if own.is_empty() {
        UNKNOWN_CANCELLATION_ERROR.to_owned()
    } else {
        own
    }
}
