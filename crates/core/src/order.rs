//! Local display schema for an order.
//!
//! This is the shape the detail window consumes. Field names on the wire are
//! the Spanish keys the window reads (`cliente`, `estado`, `contactDetails`,
//! ...); amounts are in major units.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, OrderStatus};

/// City shown when the address has neither a city nor a neighborhood.
pub const CITY_NOT_AVAILABLE: &str = "No disponible";

/// A VTEX order normalized for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalOrder {
    pub id: Option<OrderId>,
    /// Trimmed `first last`; empty when the profile has no name.
    #[serde(rename = "cliente")]
    pub customer: String,
    /// Creation timestamp exactly as VTEX sent it.
    #[serde(rename = "fecha")]
    pub date: Option<String>,
    /// Total in major units.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub total: Option<Decimal>,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    pub items: Vec<LocalOrderItem>,
    pub contact_details: ContactDetails,
    pub shipping_details: ShippingDetails,
}

/// An ordered item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalOrderItem {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "cantidad")]
    pub quantity: Option<i64>,
    /// Unit price in major units.
    #[serde(rename = "precio", with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Email with the VTEX tenant suffix removed.
    pub email: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "documento")]
    pub document: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    /// City, else neighborhood, else [`CITY_NOT_AVAILABLE`].
    #[serde(rename = "ciudad")]
    pub city: String,
    /// `"{street}, {number}"`, trimmed.
    #[serde(rename = "calle")]
    pub street: String,
    #[serde(rename = "codigoPostal")]
    pub postal_code: Option<String>,
}
