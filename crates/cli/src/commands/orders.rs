//! Order commands.
//!
//! # Usage
//!
//! ```bash
//! # List a customer's orders as cards
//! vo-cli orders list --rut 262030067
//!
//! # List with the full remapped detail of every order
//! vo-cli orders list --rut 262030067 --details
//!
//! # Show one order in the local schema
//! vo-cli orders show 1335140525044-01
//!
//! # Cancel an order
//! vo-cli orders cancel 1335140525044-01 --reason "Cliente desiste"
//! ```
//!
//! # Environment Variables
//!
//! - `VTEX_ACCOUNT`, `VTEX_APP_KEY`, `VTEX_APP_TOKEN` - VTEX credentials
//! - `VTEX_BASE_URL` - Optional API base URL override

use std::io::Write;

use vtex_orders_app::Session;
use vtex_orders_app::view::{OrderListing, confirm_cancellation, open_order_detail};
use vtex_orders_core::OrderId;

use super::{CliError, write_json, write_line};

/// List the orders of the session's contact.
pub async fn list(
    session: &Session,
    details: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let rut = session.contact_rut().ok_or(CliError::MissingContactRut)?;
    tracing::info!("Listing orders for RUT {rut}");

    if details {
        let orders = session.contact_order_details().await.unwrap_or_default();
        return write_json(out, &orders);
    }

    match session.contact_order_listing().await {
        Some(OrderListing::Orders(cards)) => write_json(out, &cards),
        Some(OrderListing::Empty { message }) => write_line(out, &message),
        None => Err(CliError::MissingContactRut),
    }
}

/// Show one order remapped to the local schema.
pub async fn show(
    session: &Session,
    order_id: OrderId,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let order = open_order_detail(&session.orders(), &order_id)
        .await
        .ok_or(CliError::OrderUnavailable(order_id))?;
    write_json(out, &order)
}

/// Cancel an order and print the outcome.
///
/// The message text is printed on failure too; an error box still fails
/// the command.
pub async fn cancel(
    session: &Session,
    order_id: &OrderId,
    reason: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    tracing::info!("Cancelling order {order_id}");
    let message = confirm_cancellation(&session.cancellations(), order_id, reason).await;
    write_line(out, &message.text)?;

    if message.is_error() {
        return Err(CliError::CancelFailed(order_id.clone()));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use vtex_orders_app::TemplateContext;
    use vtex_orders_app::TemplateName::{CancelOrder, GetOrders};
    use vtex_orders_core::CustomerRut;
    use vtex_orders_integration_tests::{FakeHost, session_for};

    use super::*;

    fn cancel_context(reason: &str) -> TemplateContext {
        TemplateContext::Cancel {
            order_id: OrderId::new("O1"),
            reason: reason.to_owned(),
        }
    }

    async fn run_cancel(host: FakeHost, reason: &str) -> (Result<(), CliError>, String) {
        let session = session_for(&Arc::new(host));
        let mut out = Vec::new();
        let result = cancel(&session, &OrderId::new("O1"), reason, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_cancel_prints_success() {
        let host = FakeHost::new().respond(CancelOrder, &cancel_context("x"), Some(204), "");
        let (result, out) = run_cancel(host, "x").await;

        assert!(result.is_ok());
        assert_eq!(out, "Orden O1 cancelada exitosamente.\n");
    }

    #[tokio::test]
    async fn test_cancel_prints_rejection_text() {
        let host = FakeHost::new().respond(
            CancelOrder,
            &cancel_context("x"),
            Some(422),
            r#"{"error":{"message":"Order already invoiced"}}"#,
        );
        let (result, out) = run_cancel(host, "x").await;

        assert!(matches!(result, Err(CliError::CancelFailed(_))));
        assert_eq!(out, "API: Order already invoiced\n");
    }

    #[tokio::test]
    async fn test_cancel_prints_host_failure_text() {
        let host = FakeHost::new().fail(
            CancelOrder,
            &cancel_context("x"),
            "connection refused",
            None,
        );
        let (result, out) = run_cancel(host, "x").await;

        assert!(result.is_err());
        assert_eq!(out, "Error al cancelar la orden: connection refused\n");
    }

    #[tokio::test]
    async fn test_cancel_prints_blank_reason_text() {
        let (result, out) = run_cancel(FakeHost::new(), "  ").await;

        assert!(result.is_err());
        assert_eq!(out, "La razón de cancelación es obligatoria.\n");
    }

    #[tokio::test]
    async fn test_list_uses_contact_rut() {
        let rut = CustomerRut::new("26.203.006-7");
        let host = Arc::new(FakeHost::new().respond(
            GetOrders,
            &TemplateContext::Customer { rut: rut.clone() },
            Some(200),
            r#"{"list":[]}"#,
        ));
        let session = session_for(&host).with_contact_rut(rut);
        let mut out = Vec::new();
        list(&session, false, &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No se encontraron órdenes para el RUT 26.203.006-7.\n"
        );
        assert_eq!(host.call_count(GetOrders), 1);
    }

    #[tokio::test]
    async fn test_list_without_contact_rut() {
        let host = Arc::new(FakeHost::new());
        let mut out = Vec::new();
        let result = list(&session_for(&host), false, &mut out).await;

        assert!(matches!(result, Err(CliError::MissingContactRut)));
        assert!(host.calls().is_empty());
    }
}
