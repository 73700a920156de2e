//! Gateways over the host template primitive.
//!
//! - [`OrderGateway`] - `getOrders` and `getOrderDetails`
//! - [`CancellationGateway`] - `cancelOrder`
//!
//! Both hold the invoker as an explicit capability; there is no global
//! client handle.

mod cancel;
mod orders;

pub use cancel::{CancelOutcome, CancellationGateway, UNKNOWN_CANCELLATION_ERROR};
pub use orders::OrderGateway;
