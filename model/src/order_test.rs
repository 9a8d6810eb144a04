use super::*;

#[test]
fn mock_orders_ids_are_unique() {
    let orders = mock_orders();
    let mut ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), orders.len());
}

#[test]
fn mock_orders_quantities_positive_prices_non_negative() {
    for order in mock_orders() {
        assert!(order.quantity > 0, "order {} has zero quantity", order.id);
        assert!(order.price >= 0.0, "order {} has negative price", order.id);
    }
}

#[test]
fn mock_orders_contains_restaurante_gourmet() {
    let orders = mock_orders();
    let order = orders.iter().find(|o| o.id == "104").expect("order 104");
    assert_eq!(order.client, "Restaurante Gourmet");
    assert_eq!(order.status, OrderStatus::Tomorrow);
}

#[test]
fn order_status_serializes_to_wire_strings() {
    assert_eq!(
        serde_json::to_value(OrderStatus::Production).unwrap(),
        serde_json::json!("production")
    );
    assert_eq!(
        serde_json::to_value(OrderStatus::Tomorrow).unwrap(),
        serde_json::json!("tomorrow")
    );
    assert_eq!(
        serde_json::to_value(OrderStatus::NextSevenDays).unwrap(),
        serde_json::json!("next_7_days")
    );
}

#[test]
fn order_roundtrips_without_priority() {
    let json = serde_json::json!({
        "id": "900",
        "client": "Cliente Teste",
        "product": "Flyers",
        "quantity": 100,
        "status": "production",
        "due_date": "2023-12-01",
        "price": 99.9
    });
    let order: Order = serde_json::from_value(json).unwrap();
    assert!(order.priority.is_none());
    let back = serde_json::to_value(&order).unwrap();
    assert!(back.get("priority").is_none());
}
