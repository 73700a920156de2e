//! VTEX Order Management System payloads.
//!
//! Read-only mirrors of the JSON returned by the list and detail endpoints.
//! Only the fields the widget consumes are declared; VTEX sends many more and
//! they are ignored. Every field tolerates absence and explicit `null`; a
//! value of the wrong JSON type reads as missing instead of failing the
//! whole order.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::types::{MinorUnits, OrderId};

/// Any JSON value, kept when it has the expected shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(#[allow(dead_code)] IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Other(_) => None,
        }
    }
}

/// A JSON scalar. VTEX is inconsistent about quoting numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Other(#[allow(dead_code)] IgnoredAny),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            Self::Integer(n) => Some(n.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Other(_) => None,
        }
    }

    fn into_integer(self) -> Option<i64> {
        match self {
            Self::Text(s) => s.trim().parse().ok(),
            Self::Integer(n) => Some(n),
            #[allow(clippy::cast_possible_truncation)] // whole and in range
            Self::Float(f) if f.fract().abs() < f64::EPSILON && f.abs() < 9.0e18 => {
                Some(f as i64)
            }
            Self::Float(_) | Self::Other(_) => None,
        }
    }
}

/// Deserialize a nested object, `None` when absent, `null` or not an object.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<Lenient<T>>::deserialize(deserializer)?;
    Ok(value.and_then(Lenient::into_option))
}

/// Deserialize an array, dropping elements of the wrong shape.
///
/// `null` and non-array values yield an empty vector.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let elements: Option<Vec<Lenient<T>>> = lenient(deserializer)?;
    Ok(elements
        .unwrap_or_default()
        .into_iter()
        .filter_map(Lenient::into_option)
        .collect())
}

/// Deserialize a string field, accepting numbers as their decimal text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.and_then(Scalar::into_text))
}

/// Deserialize an integer field, accepting numeric strings.
fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.and_then(Scalar::into_integer))
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<MinorUnits>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_integer(deserializer)?.map(MinorUnits::new))
}

fn lenient_order_id<'de, D>(deserializer: D) -> Result<Option<OrderId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.map(OrderId::new))
}

/// Body of the `getOrders` template: `{ "list": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderListResponse {
    /// Order summaries, empty when the field is missing.
    #[serde(default, deserialize_with = "lenient_vec")]
    pub list: Vec<VendorOrderSummary>,
}

/// One row of the VTEX order list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorOrderSummary {
    #[serde(default, deserialize_with = "lenient_order_id")]
    pub order_id: Option<OrderId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub client_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status_description: Option<String>,
    /// Order total in minor units.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_value: Option<MinorUnits>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub creation_date: Option<String>,
    /// VTEX capitalizes this one field.
    #[serde(default, deserialize_with = "lenient_text", rename = "ShippingEstimatedDateMax")]
    pub shipping_estimated_date_max: Option<String>,
    /// `Marketplace` or `Fulfillment`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub origin: Option<String>,
}

/// Full order as returned by `GET /api/oms/pvt/orders/{orderId}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorOrderDetail {
    #[serde(default, deserialize_with = "lenient_order_id")]
    pub order_id: Option<OrderId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub creation_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status_description: Option<String>,
    /// Order total in minor units.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub value: Option<MinorUnits>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub items: Vec<VendorOrderItem>,
    #[serde(default, deserialize_with = "lenient")]
    pub client_profile_data: Option<ClientProfileData>,
    #[serde(default, deserialize_with = "lenient")]
    pub shipping_data: Option<ShippingData>,
}

/// An ordered SKU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VendorOrderItem {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub quantity: Option<i64>,
    /// Unit price in minor units.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub price: Option<MinorUnits>,
}

/// Buyer profile attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfileData {
    #[serde(default, deserialize_with = "lenient_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_name: Option<String>,
    /// Masked address with a tenant suffix on the domain.
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    /// National id (RUT in Chile).
    #[serde(default, deserialize_with = "lenient_text")]
    pub document: Option<String>,
}

/// Logistics block of an order; only the address is consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShippingData {
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<ShippingAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default, deserialize_with = "lenient_text")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub neighborhood: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub postal_code: Option<String>,
}
