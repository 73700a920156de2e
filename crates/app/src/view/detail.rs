//! Order detail window.

use tracing::warn;
use vtex_orders_core::{LocalOrder, OrderId, remap_order};

use crate::gateway::OrderGateway;

/// Fetch one order and remap it for the detail window.
///
/// Returns `None` when the detail could not be fetched.
pub async fn open_order_detail(gateway: &OrderGateway, order_id: &OrderId) -> Option<LocalOrder> {
    let Some(detail) = gateway.get_order_detail(order_id).await else {
        warn!(order_id = %order_id, "Order detail unavailable");
        return None;
    };
    Some(remap_order(&detail))
}
