//! Coarse order status shown in the widget.
//!
//! VTEX has a long list of workflow states (`payment-pending`,
//! `window-to-cancel`, `ready-for-handling`, `invoiced`, ...). The widget only
//! distinguishes three buckets.

use serde::{Deserialize, Serialize};

/// Coarse display status of an order.
///
/// Serializes to the Spanish labels the detail window expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Invoiced or delivered.
    #[serde(rename = "Entregado")]
    Delivered,
    /// Being prepared in the warehouse.
    #[serde(rename = "Procesando")]
    Processing,
    /// Every other VTEX state.
    #[default]
    #[serde(rename = "Enviado")]
    Shipped,
}

impl OrderStatus {
    /// Classify a raw VTEX status code.
    ///
    /// Total: unknown and empty codes fall into [`OrderStatus::Shipped`].
    ///
    /// ```
    /// use vtex_orders_core::OrderStatus;
    ///
    /// assert_eq!(OrderStatus::classify("invoiced"), OrderStatus::Delivered);
    /// assert_eq!(OrderStatus::classify("handling"), OrderStatus::Processing);
    /// assert_eq!(OrderStatus::classify("unknown-xyz"), OrderStatus::Shipped);
    /// ```
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        match raw {
            "invoiced" | "delivered" => Self::Delivered,
            "handling" | "ready-for-handling" => Self::Processing,
            _ => Self::Shipped,
        }
    }

    /// Label stored in the local order schema.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delivered => "Entregado",
            Self::Processing => "Procesando",
            Self::Shipped => "Enviado",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
