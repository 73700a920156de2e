//! Order list cards.
//!
//! One card per VTEX order summary, built from the list response alone (no
//! detail fetch): title, status pill, total and the summary dates.

use futures::future::join_all;
use serde::Serialize;
use tracing::info;
use vtex_orders_core::{CustomerRut, LocalOrder, OrderId, OrderStatus, VendorOrderSummary};

use super::detail::open_order_detail;
use super::format::{NOT_AVAILABLE, format_clp, format_date_for_display};
use crate::gateway::OrderGateway;

/// Colored status badge of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusPill {
    pub label: &'static str,
    /// CSS class(es) of the badge.
    pub class: &'static str,
}

impl From<OrderStatus> for StatusPill {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Delivered => Self {
                label: "Pagado/Entregado",
                class: "success-pill",
            },
            OrderStatus::Processing => Self {
                label: "En Preparación",
                class: "warning-pill",
            },
            OrderStatus::Shipped => Self {
                label: "Enviado",
                class: "info-pill success-pill",
            },
        }
    }
}

/// A rendered order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderCard {
    pub order_id: Option<OrderId>,
    /// `Orden {orderId} - {clientName}`
    pub title: String,
    pub pill: StatusPill,
    /// Total formatted as CLP.
    pub total: String,
    pub created: String,
    pub estimated_shipping: String,
    pub origin: Option<String>,
    /// VTEX's own wording of the status, shown verbatim.
    pub status_description: Option<String>,
}

impl OrderCard {
    #[must_use]
    pub fn from_summary(summary: &VendorOrderSummary) -> Self {
        let order_id = summary
            .order_id
            .as_ref()
            .map(OrderId::as_str)
            .unwrap_or_default();
        let client_name = summary.client_name.as_deref().unwrap_or_default();
        let status = OrderStatus::classify(summary.status.as_deref().unwrap_or_default());

        Self {
            order_id: summary.order_id.clone(),
            title: format!("Orden {order_id} - {client_name}"),
            pill: status.into(),
            total: summary
                .total_value
                .map_or_else(|| NOT_AVAILABLE.to_owned(), |v| format_clp(v.to_major())),
            created: format_date_for_display(summary.creation_date.as_deref()),
            estimated_shipping: format_date_for_display(
                summary.shipping_estimated_date_max.as_deref(),
            ),
            origin: summary.origin.clone(),
            status_description: summary.status_description.clone(),
        }
    }
}

/// What the order list container shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderListing {
    /// No orders (or the list could not be fetched).
    Empty {
        message: String,
    },
    Orders(Vec<OrderCard>),
}

impl OrderListing {
    /// Fetch the customer's orders and build the cards.
    pub async fn load(gateway: &OrderGateway, rut: &CustomerRut) -> Self {
        let summaries = gateway.list_orders(rut).await;
        if summaries.is_empty() {
            return Self::Empty {
                message: format!("No se encontraron órdenes para el RUT {rut}."),
            };
        }

        info!(rut = %rut, count = summaries.len(), "Order list loaded");
        Self::Orders(summaries.iter().map(OrderCard::from_summary).collect())
    }
}

/// List a customer's orders and remap the detail of each one.
///
/// Detail requests are issued concurrently; orders whose detail cannot be
/// fetched are skipped. Results keep the list order.
pub async fn load_order_details(gateway: &OrderGateway, rut: &CustomerRut) -> Vec<LocalOrder> {
    let summaries = gateway.list_orders(rut).await;
    let details = summaries
        .iter()
        .filter_map(|s| s.order_id.as_ref())
        .map(|id| open_order_detail(gateway, id));

    join_all(details).await.into_iter().flatten().collect()
}
