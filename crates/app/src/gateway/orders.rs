//! Order list and order detail fetching.

use std::sync::Arc;

use tracing::{debug, error, instrument, warn};
use vtex_orders_core::{
    CustomerRut, OrderId, OrderListResponse, VendorOrderDetail, VendorOrderSummary,
};

use crate::error::FetchError;
use crate::host::{TemplateContext, TemplateInvoker, TemplateName, TemplateResponse};

/// Fetches order summaries and details through the host templates.
///
/// The infallible methods ([`list_orders`](Self::list_orders),
/// [`get_order_detail`](Self::get_order_detail)) log and swallow failures so
/// rendering code never branches on errors. The `try_*` methods expose the
/// underlying [`FetchError`].
#[derive(Clone)]
pub struct OrderGateway {
    invoker: Arc<dyn TemplateInvoker>,
}

impl std::fmt::Debug for OrderGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderGateway").finish_non_exhaustive()
    }
}

impl OrderGateway {
    /// Create a gateway over the given invoker.
    #[must_use]
    pub fn new(invoker: Arc<dyn TemplateInvoker>) -> Self {
        Self { invoker }
    }

    /// List the orders of a customer.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Invoke` if the template call fails,
    /// `FetchError::Status` on a non-2xx response and `FetchError::Parse` if
    /// the body is not JSON. A JSON body without `list` yields `Ok(vec![])`.
    #[instrument(skip(self), fields(rut = %rut))]
    pub async fn try_list_orders(
        &self,
        rut: &CustomerRut,
    ) -> Result<Vec<VendorOrderSummary>, FetchError> {
        let context = TemplateContext::Customer { rut: rut.clone() };
        let response = self
            .invoker
            .invoke(TemplateName::GetOrders, &context)
            .await?;
        check_status(&response)?;

        let body: OrderListResponse = serde_json::from_str(&response.response)?;
        debug!(count = body.list.len(), "Orders listed");
        Ok(body.list)
    }

    /// List the orders of a customer, empty on any failure.
    pub async fn list_orders(&self, rut: &CustomerRut) -> Vec<VendorOrderSummary> {
        match self.try_list_orders(rut).await {
            Ok(list) => list,
            Err(e) => {
                error!(rut = %rut, error = %e, "Failed to invoke getOrders");
                Vec::new()
            }
        }
    }

    /// Fetch the full detail of one order.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Invoke` if the template call fails,
    /// `FetchError::Status` on a non-2xx response and `FetchError::Parse` if
    /// the body is not a JSON object.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn try_get_order_detail(
        &self,
        order_id: &OrderId,
    ) -> Result<VendorOrderDetail, FetchError> {
        let context = TemplateContext::Order {
            order_id: order_id.clone(),
        };
        let response = self
            .invoker
            .invoke(TemplateName::GetOrderDetails, &context)
            .await?;
        check_status(&response)?;

        Ok(serde_json::from_str(&response.response)?)
    }

    /// Fetch the full detail of one order, `None` on any failure.
    pub async fn get_order_detail(&self, order_id: &OrderId) -> Option<VendorOrderDetail> {
        match self.try_get_order_detail(order_id).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                error!(order_id = %order_id, error = %e, "Failed to invoke getOrderDetails");
                None
            }
        }
    }
}

fn check_status(response: &TemplateResponse) -> Result<(), FetchError> {
    match response.status {
        Some(status) if !response.is_success() => {
            warn!(status, body = %response.response, "Non-success template response");
            Err(FetchError::Status { status })
        }
        _ => Ok(()),
    }
}
