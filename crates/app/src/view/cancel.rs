//! Inline cancellation form.
//!
//! The agent types a reason and confirms; the form shows a message box with
//! the outcome underneath.

use core::fmt;

use serde::Serialize;
use thiserror::Error;
use vtex_orders_core::OrderId;

use crate::gateway::CancellationGateway;

/// Errors that can occur when validating a [`CancelReason`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CancelFormError {
    /// The reason is empty after trimming.
    #[error("La razón de cancelación es obligatoria.")]
    ReasonRequired,
}

/// A non-empty, trimmed cancellation reason.
///
/// ```
/// use vtex_orders_app::view::CancelReason;
///
/// assert_eq!(CancelReason::parse("  Cliente desiste ").unwrap().as_str(), "Cliente desiste");
/// assert!(CancelReason::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelReason(String);

impl CancelReason {
    /// Parse a reason from the textarea contents.
    ///
    /// # Errors
    ///
    /// Returns `CancelFormError::ReasonRequired` if the input is blank.
    pub fn parse(s: &str) -> Result<Self, CancelFormError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CancelFormError::ReasonRequired);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Success,
    Error,
}

/// Feedback shown under the cancellation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBox {
    pub kind: MessageKind,
    pub text: String,
}

impl MessageBox {
    fn success(text: String) -> Self {
        Self {
            kind: MessageKind::Success,
            text,
        }
    }

    fn error(text: String) -> Self {
        Self {
            kind: MessageKind::Error,
            text,
        }
    }

    /// CSS class of the message box element.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.kind {
            MessageKind::Success => "message-box success",
            MessageKind::Error => "message-box error",
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, MessageKind::Error)
    }
}

/// Validate the reason, send the cancellation and describe the outcome.
///
/// A blank reason never reaches the gateway.
pub async fn confirm_cancellation(
    gateway: &CancellationGateway,
    order_id: &OrderId,
    reason: &str,
) -> MessageBox {
    let reason = match CancelReason::parse(reason) {
        Ok(reason) => reason,
        Err(e) => return MessageBox::error(e.to_string()),
    };

    let outcome = gateway.cancel(order_id, reason.as_str()).await;
    match outcome.message() {
        None => MessageBox::success(format!("Orden {order_id} cancelada exitosamente.")),
        Some(message) if !message.is_empty() => MessageBox::error(message.to_owned()),
        Some(_) => MessageBox::error(format!("Error al cancelar la orden {order_id}.")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_is_trimmed() {
        let reason = CancelReason::parse("\n Producto sin stock \t").unwrap();
        assert_eq!(reason.to_string(), "Producto sin stock");
    }

    #[test]
    fn test_blank_reason_rejected() {
        assert_eq!(
            CancelReason::parse(""),
            Err(CancelFormError::ReasonRequired)
        );
        assert_eq!(
            CancelFormError::ReasonRequired.to_string(),
            "La razón de cancelación es obligatoria."
        );
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(
            MessageBox::success(String::new()).css_class(),
            "message-box success"
        );
        assert_eq!(
            MessageBox::error(String::new()).css_class(),
            "message-box error"
        );
    }
}
