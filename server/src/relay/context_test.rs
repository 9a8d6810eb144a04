use super::*;

#[test]
fn context_embeds_the_order_book() {
    let prompt = business_context();
    assert!(prompt.contains(r#""id":"101""#));
    assert!(prompt.contains(r#""id":"104""#));
    assert!(prompt.contains("Restaurante Gourmet"));
}

#[test]
fn context_embeds_operational_snapshots() {
    let prompt = business_context();
    assert!(prompt.contains("Funil de produção"));
    assert!(prompt.contains("Setor Offset"));
    assert!(prompt.contains("Tinta Ciano (Offset)"));
    assert!(prompt.contains("R$ 89.2k"));
}

#[test]
fn context_carries_the_behavioral_directives() {
    let prompt = business_context();
    assert!(prompt.contains("português"));
    assert!(prompt.contains("some-os quando necessário"));
    assert!(prompt.contains("riscos proativamente"));
}

#[test]
fn context_datasets_are_valid_json_lines() {
    let prompt = business_context();
    let orders_line = prompt
        .lines()
        .find(|l| l.starts_with("Pedidos: "))
        .expect("orders line");
    let json = orders_line.trim_start_matches("Pedidos: ");
    let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 7);
}
