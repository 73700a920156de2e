//! Host template-invocation seam.
//!
//! The support desk forwards outbound calls through pre-configured request
//! templates: the app names a template and hands over a context object, the
//! host fills in credentials and URLs and returns the raw response. This
//! module models that primitive so the gateways can run against the real
//! host, the direct VTEX client in [`crate::vtex`], or a test double.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vtex_orders_core::{CustomerRut, OrderId};

use crate::error::InvokeError;

/// The three templates the widget invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateName {
    #[serde(rename = "getOrders")]
    GetOrders,
    #[serde(rename = "getOrderDetails")]
    GetOrderDetails,
    #[serde(rename = "cancelOrder")]
    CancelOrder,
}

impl TemplateName {
    /// Name as registered with the host.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetOrders => "getOrders",
            Self::GetOrderDetails => "getOrderDetails",
            Self::CancelOrder => "cancelOrder",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context object passed with an invocation.
///
/// Serializes to the flat objects the templates expect: `{rut}`,
/// `{orderId}` and `{orderId, reason}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TemplateContext {
    Customer {
        rut: CustomerRut,
    },
    Order {
        #[serde(rename = "orderId")]
        order_id: OrderId,
    },
    Cancel {
        #[serde(rename = "orderId")]
        order_id: OrderId,
        reason: String,
    },
}

/// Raw response of an invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateResponse {
    /// HTTP status, when the host reports one.
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub status_text: Option<String>,
    /// Response body as text.
    #[serde(default)]
    pub response: String,
}

impl TemplateResponse {
    /// Whether the status is absent or in the 2xx range.
    ///
    /// Hosts that only forward successful calls omit the status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_none_or(|s| (200..300).contains(&s))
    }
}

/// The host's "invoke template" primitive.
#[async_trait]
pub trait TemplateInvoker: Send + Sync {
    /// Invoke `template` with `context` and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns `InvokeError` when no response could be obtained. A response
    /// with a non-2xx status is *not* an error at this layer.
    async fn invoke(
        &self,
        template: TemplateName,
        context: &TemplateContext,
    ) -> Result<TemplateResponse, InvokeError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_context_serialization() {
        let customer = TemplateContext::Customer {
            rut: CustomerRut::new("262030067"),
        };
        assert_eq!(
            serde_json::to_value(&customer).unwrap(),
            json!({ "rut": "262030067" })
        );

        let cancel = TemplateContext::Cancel {
            order_id: OrderId::new("O1"),
            reason: "Cliente desiste".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&cancel).unwrap(),
            json!({ "orderId": "O1", "reason": "Cliente desiste" })
        );
    }

    #[test]
    fn test_template_names() {
        assert_eq!(TemplateName::GetOrders.to_string(), "getOrders");
        assert_eq!(TemplateName::GetOrderDetails.as_str(), "getOrderDetails");
        assert_eq!(
            serde_json::to_string(&TemplateName::CancelOrder).unwrap(),
            "\"cancelOrder\""
        );
    }

    #[test]
    fn test_response_from_host_json() {
        let response: TemplateResponse = serde_json::from_value(json!({
            "status": 422,
            "statusText": "Unprocessable Entity",
            "response": "{}"
        }))
        .unwrap();
        assert_eq!(response.status, Some(422));
        assert!(!response.is_success());
    }

    #[test]
    fn test_missing_status_counts_as_success() {
        let response = TemplateResponse {
            response: "{}".to_string(),
            ..TemplateResponse::default()
        };
        assert!(response.is_success());
    }
}
