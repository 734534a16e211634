use super::*;

// =============================================================
// Helpers
// =============================================================

fn dated_order(id: u64, date: Option<&str>) -> OrderSummary {
    OrderSummary {
        id,
        status: "PLACED".to_owned(),
        total_price: 10.0,
        order_date: date.map(str::to_owned),
        restaurant: None,
        order_items: Vec::new(),
    }
}

fn order_json() -> &'static str {
    r#"{
        "id": 42,
        "status": "OUT_FOR_DELIVERY",
        "totalPrice": 280.0,
        "orderDate": "2026-08-10T12:30:00",
        "restaurant": { "id": 3, "name": "Dosa Palace" },
        "orderItems": [
            { "quantity": 2, "price": 120.0, "menuItem": { "name": "Masala Dosa" } },
            { "quantity": 1, "price": 40.0, "menuItem": { "name": "Filter Coffee" } }
        ]
    }"#
}

// =============================================================
// Order decoding
// =============================================================

#[test]
fn an_order_decodes_from_backend_json() {
    let order: OrderSummary = serde_json::from_str(order_json()).unwrap();
    assert_eq!(order.id, 42);
    assert_eq!(order.status, "OUT_FOR_DELIVERY");
    assert_eq!(order.order_items.len(), 2);
}

#[test]
fn the_canonical_status_comes_from_the_raw_string() {
    let order: OrderSummary = serde_json::from_str(order_json()).unwrap();
    assert_eq!(order.status(), Some(OrderStatus::OutForDelivery));
}

#[test]
fn an_unknown_status_parses_to_none() {
    let raw = r#"{"id":1,"status":"MISLAID","totalPrice":10.0}"#;
    let order: OrderSummary = serde_json::from_str(raw).unwrap();
    assert_eq!(order.status(), None);
}

#[test]
fn missing_associations_decode_as_defaults() {
    let raw = r#"{"id":1,"status":"PLACED","totalPrice":10.0}"#;
    let order: OrderSummary = serde_json::from_str(raw).unwrap();
    assert_eq!(order.restaurant, None);
    assert!(order.order_items.is_empty());
    assert_eq!(order.order_date, None);
}

#[test]
fn restaurant_name_falls_back_when_the_restaurant_is_gone() {
    let raw = r#"{"id":1,"status":"PLACED","totalPrice":10.0,"restaurant":null}"#;
    let order: OrderSummary = serde_json::from_str(raw).unwrap();
    assert_eq!(order.restaurant_name(), "Restaurant");
}

// =============================================================
// Order lines
// =============================================================

#[test]
fn a_line_labels_itself_with_the_item_name() {
    let order: OrderSummary = serde_json::from_str(order_json()).unwrap();
    assert_eq!(order.order_items[0].label(), "Masala Dosa");
}

#[test]
fn a_line_with_a_deleted_item_gets_the_fallback_label() {
    let raw = r#"{"quantity":1,"menuItem":null}"#;
    let line: OrderLine = serde_json::from_str(raw).unwrap();
    assert_eq!(line.label(), "Item Not Found");
    assert_eq!(line.price, None);
}

// =============================================================
// Order sorting
// =============================================================

#[test]
fn orders_sort_newest_first_by_date() {
    let mut orders = vec![
        dated_order(1, Some("2026-08-01T09:00:00")),
        dated_order(2, Some("2026-08-10T12:30:00")),
        dated_order(3, Some("2026-08-05T20:15:00")),
    ];
    sort_newest_first(&mut orders);
    let ids: Vec<u64> = orders.iter().map(|order| order.id).collect();
    assert_eq!(ids, [2, 3, 1]);
}

#[test]
fn undated_orders_sort_last_by_descending_id() {
    let mut orders = vec![
        dated_order(7, None),
        dated_order(9, Some("2026-08-10T12:30:00")),
        dated_order(8, None),
    ];
    sort_newest_first(&mut orders);
    let ids: Vec<u64> = orders.iter().map(|order| order.id).collect();
    assert_eq!(ids, [9, 8, 7]);
}

// =============================================================
// Partner payloads
// =============================================================

#[test]
fn a_partner_profile_decodes() {
    let raw = r#"{"id":5,"available":true}"#;
    let profile: PartnerProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.id, 5);
    assert_eq!(profile.available, Some(true));
}

#[test]
fn an_assignment_decodes_with_nullable_fields() {
    let raw = r#"{
        "orderId": 42,
        "orderStatus": "PICKED_UP",
        "customerName": "Asha Rao",
        "customerAddress": null,
        "restaurantName": "Dosa Palace",
        "restaurantAddress": "12 MG Road"
    }"#;
    let assignment: Assignment = serde_json::from_str(raw).unwrap();
    assert_eq!(assignment.order_id, 42);
    assert_eq!(assignment.status(), Some(OrderStatus::PickedUp));
    assert_eq!(assignment.customer_address, None);
}

#[test]
fn a_location_update_serializes_camel_case() {
    let update = LocationUpdate {
        latitude: 12.93,
        longitude: 77.62,
    };
    let raw = serde_json::to_string(&update).unwrap();
    assert_eq!(raw, r#"{"latitude":12.93,"longitude":77.62}"#);
}
