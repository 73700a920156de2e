//! VTEX OMS REST client.
//!
//! Implements the host template primitive directly against the VTEX Order
//! Management API, for running outside the support-desk host (CLI, local
//! testing). Each template maps to one endpoint:
//!
//! | Template          | Request                                        |
//! |-------------------|------------------------------------------------|
//! | `getOrders`       | `GET  /api/oms/pvt/orders?q={rut}`             |
//! | `getOrderDetails` | `GET  /api/oms/pvt/orders/{orderId}`           |
//! | `cancelOrder`     | `POST /api/oms/pvt/orders/{orderId}/cancel`    |

use async_trait::async_trait;
use reqwest::{Client, Method};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::{debug, instrument};
use url::Url;

use crate::config::VtexConfig;
use crate::error::InvokeError;
use crate::host::{TemplateContext, TemplateInvoker, TemplateName, TemplateResponse};

const ORDERS_PATH: [&str; 4] = ["api", "oms", "pvt", "orders"];

/// VTEX OMS API client.
#[derive(Clone)]
pub struct VtexClient {
    client: Client,
    base_url: Url,
    app_key: String,
    app_token: SecretString,
}

impl std::fmt::Debug for VtexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VtexClient")
            .field("base_url", &self.base_url.as_str())
            .field("app_key", &self.app_key)
            .field("app_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// A resolved HTTP request for one template invocation.
#[derive(Debug, PartialEq)]
struct Request {
    method: Method,
    url: Url,
    body: Option<serde_json::Value>,
}

impl VtexClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &VtexConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            app_key: config.app_key.clone(),
            app_token: config.app_token.clone(),
        })
    }

    fn orders_url<'a>(
        &self,
        extra: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, InvokeError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| InvokeError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(ORDERS_PATH)
            .extend(extra);
        Ok(url)
    }

    fn build_request(
        &self,
        template: TemplateName,
        context: &TemplateContext,
    ) -> Result<Request, InvokeError> {
        match (template, context) {
            (TemplateName::GetOrders, TemplateContext::Customer { rut }) => {
                let mut url = self.orders_url(std::iter::empty())?;
                url.query_pairs_mut().append_pair("q", rut.as_str());
                Ok(Request {
                    method: Method::GET,
                    url,
                    body: None,
                })
            }
            (TemplateName::GetOrderDetails, TemplateContext::Order { order_id }) => Ok(Request {
                method: Method::GET,
                url: self.orders_url([order_id.as_str()])?,
                body: None,
            }),
            (TemplateName::CancelOrder, TemplateContext::Cancel { order_id, reason }) => {
                Ok(Request {
                    method: Method::POST,
                    url: self.orders_url([order_id.as_str(), "cancel"])?,
                    body: Some(json!({ "reason": reason })),
                })
            }
            (template, _) => Err(InvokeError::ContextMismatch(template)),
        }
    }
}

#[async_trait]
impl TemplateInvoker for VtexClient {
    #[instrument(skip(self, context), fields(template = %template))]
    async fn invoke(
        &self,
        template: TemplateName,
        context: &TemplateContext,
    ) -> Result<TemplateResponse, InvokeError> {
        let request = self.build_request(template, context)?;
        debug!(method = %request.method, url = %request.url, "Sending VTEX request");

        let mut builder = self
            .client
            .request(request.method, request.url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("X-VTEX-API-AppKey", &self.app_key)
            .header("X-VTEX-API-AppToken", self.app_token.expose_secret());
        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(status = status.as_u16(), "VTEX response received");

        Ok(TemplateResponse {
            status: Some(status.as_u16()),
            status_text: status.canonical_reason().map(str::to_owned),
            response: body,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::HashMap;

    use vtex_orders_core::{CustomerRut, OrderId};

    use super::*;
    use crate::config::AppConfig;

    const TOKEN: &str = "QXKJHGWZMTNBVPLRDSYCFEUAIO1928374650qwertzuiop";

    fn client(base_url: Option<&str>) -> VtexClient {
        let mut vars: HashMap<String, String> = [
            ("VTEX_ACCOUNT", "mystore"),
            ("VTEX_APP_KEY", "vtexappkey-mystore-ABCDEF"),
            ("VTEX_APP_TOKEN", TOKEN),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        if let Some(url) = base_url {
            vars.insert("VTEX_BASE_URL".to_string(), url.to_string());
        }
        let config = AppConfig::from_vars(&vars).unwrap();
        VtexClient::new(&config.vtex).unwrap()
    }

    #[test]
    fn test_list_request() {
        let request = client(None)
            .build_request(
                TemplateName::GetOrders,
                &TemplateContext::Customer {
                    rut: CustomerRut::new("26.203.006-7"),
                },
            )
            .unwrap();

        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.url.as_str(),
            "https://mystore.vtexcommercestable.com.br/api/oms/pvt/orders?q=26.203.006-7"
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_detail_request_escapes_id() {
        let request = client(Some("http://localhost:8080/proxy/"))
            .build_request(
                TemplateName::GetOrderDetails,
                &TemplateContext::Order {
                    order_id: OrderId::new("a/b"),
                },
            )
            .unwrap();

        assert_eq!(
            request.url.as_str(),
            "http://localhost:8080/proxy/api/oms/pvt/orders/a%2Fb"
        );
    }

    #[test]
    fn test_cancel_request() {
        let request = client(None)
            .build_request(
                TemplateName::CancelOrder,
                &TemplateContext::Cancel {
                    order_id: OrderId::new("1335140525044-01"),
                    reason: "Cliente desiste".to_string(),
                },
            )
            .unwrap();

        assert_eq!(request.method, Method::POST);
        let path = request.url.path();
        assert!(path.ends_with("/orders/1335140525044-01/cancel"));
        assert_eq!(request.body, Some(json!({ "reason": "Cliente desiste" })));
    }

    #[test]
    fn test_context_mismatch() {
        let err = client(None)
            .build_request(
                TemplateName::CancelOrder,
                &TemplateContext::Order {
                    order_id: OrderId::new("O1"),
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            InvokeError::ContextMismatch(TemplateName::CancelOrder)
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", client(None));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("QXKJ"));
    }
}
