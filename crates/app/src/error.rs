//! Error types for template invocation and order fetching.
//!
//! None of these escape the gateways' public contract: `list_orders`,
//! `get_order_detail` and `cancel` convert them into empty / absent / failure
//! results. They are surfaced by the `try_*` variants so callers that need to
//! tell "no orders" apart from "fetch failed" can.

use thiserror::Error;

use crate::host::TemplateName;

/// Errors raised by a [`TemplateInvoker`](crate::host::TemplateInvoker).
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The host rejected the invocation. May carry the upstream body.
    #[error("{message}")]
    Host {
        /// Host-provided description.
        message: String,
        /// Raw upstream response body, when the host forwarded one.
        response: Option<String>,
    },

    /// HTTP transport failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The context object does not fit the template.
    #[error("context does not match template {0}")]
    ContextMismatch(TemplateName),

    /// The configured base URL cannot carry a path.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl InvokeError {
    /// Build a host error without a response body.
    #[must_use]
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
            response: None,
        }
    }

    /// Response body carried by the error, if any.
    #[must_use]
    pub fn response(&self) -> Option<&str> {
        match self {
            Self::Host { response, .. } => response.as_deref(),
            _ => None,
        }
    }
}

/// Errors from listing orders or fetching one order's detail.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The template invocation itself failed.
    #[error(transparent)]
    Invoke(#[from] InvokeError),

    /// VTEX answered with a non-success status.
    #[error("VTEX returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The body is not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
