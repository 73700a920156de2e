//! VTEX → local order conversion.

use crate::order::{
    CITY_NOT_AVAILABLE, ContactDetails, LocalOrder, LocalOrderItem, ShippingDetails,
};
use crate::types::{OrderStatus, normalize_vendor_email};
use crate::vtex::{ClientProfileData, ShippingAddress, VendorOrderDetail, VendorOrderItem};

/// Treat empty strings like missing values.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Normalize a VTEX order detail into the local display schema.
///
/// Never fails: missing nested objects are treated as empty and missing
/// scalars are passed through as `None`. The status is classified from the
/// raw `status` code; `statusDescription` is never consulted.
#[must_use]
pub fn remap_order(detail: &VendorOrderDetail) -> LocalOrder {
    let empty_profile = ClientProfileData::default();
    let profile = detail
        .client_profile_data
        .as_ref()
        .unwrap_or(&empty_profile);

    let empty_address = ShippingAddress::default();
    let address = detail
        .shipping_data
        .as_ref()
        .and_then(|s| s.address.as_ref())
        .unwrap_or(&empty_address);

    LocalOrder {
        id: detail.order_id.clone(),
        customer: customer_name(profile),
        date: detail.creation_date.clone(),
        total: detail.value.map(|v| v.to_major()),
        status: OrderStatus::classify(detail.status.as_deref().unwrap_or_default()),
        items: detail.items.iter().map(convert_item).collect(),
        contact_details: ContactDetails {
            email: normalize_vendor_email(profile.email.as_deref()),
            phone: profile.phone.clone(),
            document: profile.document.clone(),
        },
        shipping_details: convert_address(address),
    }
}

impl From<&VendorOrderDetail> for LocalOrder {
    fn from(detail: &VendorOrderDetail) -> Self {
        remap_order(detail)
    }
}

fn customer_name(profile: &ClientProfileData) -> String {
    let first = non_empty(profile.first_name.as_ref()).unwrap_or_default();
    let last = non_empty(profile.last_name.as_ref()).unwrap_or_default();
    format!("{first} {last}").trim().to_owned()
}

fn convert_item(item: &VendorOrderItem) -> LocalOrderItem {
    LocalOrderItem {
        name: item.name.clone(),
        quantity: item.quantity,
        price: item.price.map(|p| p.to_major()),
    }
}

fn convert_address(address: &ShippingAddress) -> ShippingDetails {
    let city = non_empty(address.city.as_ref())
        .or_else(|| non_empty(address.neighborhood.as_ref()))
        .unwrap_or(CITY_NOT_AVAILABLE)
        .to_owned();

    let street = non_empty(address.street.as_ref()).unwrap_or_default();
    let number = non_empty(address.number.as_ref()).unwrap_or_default();

    ShippingDetails {
        city,
        // The separator survives even when both parts are missing.
        street: format!("{street}, {number}").trim().to_owned(),
        postal_code: address.postal_code.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;
    use crate::types::OrderId;

    fn detail(value: serde_json::Value) -> VendorOrderDetail {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_remap_full_order() {
        let order = remap_order(&detail(json!({
            "orderId": "O1",
            "creationDate": "2024-05-10T10:30:00Z",
            "value": 4_550_000,
            "status": "delivered",
            "statusDescription": "Delivered to customer",
            "items": [{ "name": "Mouse", "quantity": 1, "price": 2_500_000 }],
            "clientProfileData": {
                "firstName": "Ana",
                "lastName": "Martinez",
                "email": "ana@mail.com-cl",
                "phone": "+56987654321",
                "document": "12.345.678-9"
            },
            "shippingData": {
                "address": {
                    "city": "Providencia",
                    "street": "Av Siempre Viva",
                    "number": "742",
                    "postalCode": "7500000"
                }
            }
        })));

        assert_eq!(order.id, Some(OrderId::new("O1")));
        assert_eq!(order.customer, "Ana Martinez");
        assert_eq!(order.date.as_deref(), Some("2024-05-10T10:30:00Z"));
        assert_eq!(order.total, Some(Decimal::from(45_500)));
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(
            order.items,
            vec![LocalOrderItem {
                name: Some("Mouse".to_owned()),
                quantity: Some(1),
                price: Some(Decimal::from(25_000)),
            }]
        );
        assert_eq!(
            order.contact_details,
            ContactDetails {
                email: Some("ana@mail.com".to_owned()),
                phone: Some("+56987654321".to_owned()),
                document: Some("12.345.678-9".to_owned()),
            }
        );
        assert_eq!(
            order.shipping_details,
            ShippingDetails {
                city: "Providencia".to_owned(),
                street: "Av Siempre Viva, 742".to_owned(),
                postal_code: Some("7500000".to_owned()),
            }
        );
    }

    #[test]
    fn test_remap_empty_detail() {
        let order = remap_order(&detail(json!({})));

        assert_eq!(order.id, None);
        assert_eq!(order.customer, "");
        assert_eq!(order.total, None);
        assert_eq!(order.status, OrderStatus::Shipped);
        assert!(order.items.is_empty());
        assert_eq!(order.contact_details, ContactDetails::default());
        assert_eq!(order.shipping_details.city, CITY_NOT_AVAILABLE);
        assert_eq!(order.shipping_details.street, ",");
        assert_eq!(order.shipping_details.postal_code, None);
    }

    #[test]
    fn test_status_ignores_description() {
        let order = remap_order(&detail(json!({
            "status": "handling",
            "statusDescription": "Entregado"
        })));
        assert_eq!(order.status, OrderStatus::Processing);

        let order = remap_order(&detail(json!({
            "status": "payment-pending",
            "statusDescription": "invoiced"
        })));
        assert_eq!(order.status, OrderStatus::Shipped);
    }

    #[test]
    fn test_status_matches_classifier() {
        for raw in [
            "invoiced",
            "delivered",
            "handling",
            "ready-for-handling",
            "canceled",
            "",
        ] {
            let order = remap_order(&detail(json!({ "status": raw })));
            assert_eq!(order.status, OrderStatus::classify(raw), "{raw}");
        }
    }

    #[test]
    fn test_city_falls_back_to_neighborhood() {
        let order = remap_order(&detail(json!({
            "shippingData": { "address": { "city": "", "neighborhood": "Ñuñoa" } }
        })));
        assert_eq!(order.shipping_details.city, "Ñuñoa");
    }

    #[test]
    fn test_single_name_part_is_trimmed() {
        let order = remap_order(&detail(json!({
            "clientProfileData": { "lastName": "Martinez" }
        })));
        assert_eq!(order.customer, "Martinez");

        let order = remap_order(&detail(json!({
            "clientProfileData": { "firstName": "Ana", "lastName": null }
        })));
        assert_eq!(order.customer, "Ana");
    }

    #[test]
    fn test_street_without_number() {
        let order = remap_order(&detail(json!({
            "shippingData": { "address": { "street": "Paseo Ahumada" } }
        })));
        assert_eq!(order.shipping_details.street, "Paseo Ahumada,");
    }

    #[test]
    fn test_item_prices_converted() {
        let order = remap_order(&detail(json!({
            "items": [
                { "name": "Cable HDMI", "quantity": 2, "price": 1_245_000 },
                { "name": "Regalo", "quantity": 1, "price": null }
            ]
        })));

        let prices: Vec<_> = order.items.iter().map(|i| i.price).collect();
        assert_eq!(prices, vec![Some(Decimal::from(12_450)), None]);
    }

    #[test]
    fn test_serialized_shape() {
        let order = remap_order(&detail(json!({
            "orderId": "O1",
            "value": 4_550_000,
            "status": "invoiced",
            "items": [{ "name": "Mouse", "quantity": 1, "price": 2_500_000 }],
            "shippingData": { "address": { "city": "Providencia", "postalCode": "7500000" } }
        })));

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["id"], "O1");
        assert_eq!(value["estado"], "Entregado");
        assert_eq!(value["total"], 45_500.0);
        assert_eq!(value["items"][0]["precio"], 25_000.0);
        assert_eq!(value["shippingDetails"]["ciudad"], "Providencia");
        assert_eq!(value["shippingDetails"]["codigoPostal"], "7500000");
        assert!(value["contactDetails"]["email"].is_null());
    }
}
