use super::*;

#[test]
fn sector_load_above_eighty_is_critical() {
    let sectors = mock_sector_load();
    let offset = sectors.iter().find(|s| s.name == "Setor Offset").unwrap();
    assert!(offset.is_critical());

    let digital = sectors.iter().find(|s| s.name == "Impressão Digital").unwrap();
    assert!(!digital.is_critical());
}

#[test]
fn inventory_has_non_ok_items_for_alerts() {
    let alerts: Vec<_> = mock_inventory()
        .into_iter()
        .filter(|i| i.status != StockStatus::Ok)
        .collect();
    assert_eq!(alerts.len(), 2);
    assert!(alerts.iter().any(|i| i.status == StockStatus::Critico));
}

#[test]
fn stock_status_serializes_with_display_labels() {
    assert_eq!(serde_json::to_value(StockStatus::Ok).unwrap(), serde_json::json!("OK"));
    assert_eq!(
        serde_json::to_value(StockStatus::Critico).unwrap(),
        serde_json::json!("Crítico")
    );
}

#[test]
fn production_flow_stage_counts_descend() {
    let flow = mock_production_flow();
    assert_eq!(flow.len(), 4);
    for pair in flow.windows(2) {
        assert!(pair[0].count >= pair[1].count);
    }
}

#[test]
fn kpis_cover_the_four_tiles() {
    let labels: Vec<String> = mock_kpis().into_iter().map(|k| k.label).collect();
    assert_eq!(labels, ["Fila Total", "Eficiência", "Materiais", "Ticket"]);
}
