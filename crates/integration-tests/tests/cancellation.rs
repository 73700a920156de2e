//! Integration tests for the cancellation form.
//!
//! These tests verify the messages shown to the agent for each outcome of a
//! `cancelOrder` invocation.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use serde_json::json;
use vtex_orders_app::TemplateName::CancelOrder;
use vtex_orders_app::view::{MessageBox, MessageKind, confirm_cancellation};
use vtex_orders_app::{TemplateContext, TemplateResponse};
use vtex_orders_core::OrderId;
use vtex_orders_integration_tests::{FakeHost, session_for};

const ORDER: &str = "1335140525044-01";

fn cancel(reason: &str) -> TemplateContext {
    TemplateContext::Cancel {
        order_id: OrderId::new(ORDER),
        reason: reason.to_owned(),
    }
}

async fn confirm(host: &Arc<FakeHost>, reason: &str) -> MessageBox {
    let gateway = session_for(host).cancellations();
    confirm_cancellation(&gateway, &OrderId::new(ORDER), reason).await
}

#[tokio::test]
async fn test_no_content_shows_success() {
    let host = FakeHost::new().respond(CancelOrder, &cancel("Cliente desiste"), Some(204), "");
    let host = Arc::new(host);
    let message = confirm(&host, "Cliente desiste").await;

    assert_eq!(message.kind, MessageKind::Success);
    assert_eq!(
        message.text,
        format!("Orden {ORDER} cancelada exitosamente.")
    );
    assert_eq!(message.css_class(), "message-box success");
}

#[tokio::test]
async fn test_reason_is_trimmed_before_sending() {
    let host = FakeHost::new().respond(CancelOrder, &cancel("Sin stock"), Some(200), "{}");
    let host = Arc::new(host);
    let message = confirm(&host, "  Sin stock \n").await;

    assert!(!message.is_error());
    assert_eq!(
        serde_json::to_value(&host.calls()[0].1).unwrap(),
        json!({ "orderId": ORDER, "reason": "Sin stock" })
    );
}

#[tokio::test]
async fn test_blank_reason_never_invokes_host() {
    let host = Arc::new(FakeHost::new());
    let message = confirm(&host, "   ").await;

    assert!(message.is_error());
    assert_eq!(message.text, "La razón de cancelación es obligatoria.");
    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn test_rejection_shows_api_message() {
    let host = Arc::new(FakeHost::new().respond(
        CancelOrder,
        &cancel("Cliente desiste"),
        Some(422),
        r#"{"error":{"message":"Order already invoiced"}}"#,
    ));
    let message = confirm(&host, "Cliente desiste").await;

    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(message.text, "API: Order already invoiced");
    assert_eq!(message.css_class(), "message-box error");
}

#[tokio::test]
async fn test_rejection_without_body_shows_status() {
    let host = Arc::new(FakeHost::new().respond_with(
        CancelOrder,
        &cancel("Cliente desiste"),
        TemplateResponse {
            status: Some(403),
            status_text: Some("Forbidden".to_owned()),
            response: String::new(),
        },
    ));
    let message = confirm(&host, "Cliente desiste").await;

    assert_eq!(message.text, "API: HTTP 403: Forbidden");
}

#[tokio::test]
async fn test_host_failure_prefers_forwarded_body() {
    let host = Arc::new(FakeHost::new().fail(
        CancelOrder,
        &cancel("Cliente desiste"),
        "Bad Request",
        Some(r#"{"message":"Invalid reason"}"#),
    ));
    let message = confirm(&host, "Cliente desiste").await;

    assert_eq!(message.text, "Error al cancelar la orden: Invalid reason");
}

#[tokio::test]
async fn test_host_failure_falls_back_to_error_text() {
    let host = FakeHost::new().fail(CancelOrder, &cancel("Cliente desiste"), "timeout", None);
    let host = Arc::new(host);
    let outcome = session_for(&host)
        .cancellations()
        .cancel(&OrderId::new(ORDER), "Cliente desiste")
        .await;

    assert_eq!(
        outcome.message(),
        Some("Error al cancelar la orden: timeout")
    );
}
