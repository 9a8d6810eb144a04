//! Operational snapshots shown on the dashboard and fed into the AI context.
//!
//! Mirrors the shop's monitoring board: production funnel, machine load per
//! sector, critical stock, headline KPIs, and the monthly finance card.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "ops_test.rs"]
mod ops_test;

/// One stage of the production funnel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageLoad {
    pub stage: String,
    /// Jobs currently sitting in this stage.
    pub count: u32,
    /// Fill percentage for the funnel bar.
    pub percent: u8,
}

/// Qualitative load rating for a sector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectorStatus {
    #[serde(rename = "Crítico")]
    Critico,
    #[serde(rename = "Alerta")]
    Alerta,
    #[serde(rename = "Estável")]
    Estavel,
    #[serde(rename = "Ocioso")]
    Ocioso,
}

/// Machine utilization for one production sector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectorLoad {
    pub name: String,
    /// Utilization percentage, 0–100.
    pub load: u8,
    pub status: SectorStatus,
}

impl SectorLoad {
    /// Loads above 80% render in the critical color band.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.load > 80
    }
}

/// Stock level rating for a consumable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Baixo")]
    Baixo,
    #[serde(rename = "Crítico")]
    Critico,
}

/// A consumable tracked by the stock monitor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub item: String,
    /// Human-readable remaining quantity ("200 fls", "2 Latas").
    pub quantity: String,
    pub status: StockStatus,
}

/// Headline KPI tile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    pub sub: String,
}

/// Monthly revenue card figures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinanceSnapshot {
    /// Projected revenue for the month, display string ("R$ 89.2k").
    pub monthly_revenue: String,
    /// Month-over-month growth, in percent.
    pub growth_percent: i8,
    pub daily_revenue: String,
    pub weekly_revenue: String,
}

#[must_use]
pub fn mock_production_flow() -> Vec<StageLoad> {
    let stage = |stage: &str, count: u32, percent: u8| StageLoad {
        stage: stage.to_owned(),
        count,
        percent,
    };
    vec![
        stage("Pré-Impressão", 12, 85),
        stage("Produção (Fila)", 8, 60),
        stage("Acabamento", 5, 40),
        stage("Expedição", 3, 20),
    ]
}

#[must_use]
pub fn mock_sector_load() -> Vec<SectorLoad> {
    let sector = |name: &str, load: u8, status: SectorStatus| SectorLoad {
        name: name.to_owned(),
        load,
        status,
    };
    vec![
        sector("Setor Offset", 88, SectorStatus::Critico),
        sector("Impressão Digital", 45, SectorStatus::Estavel),
        sector("Comunicação Visual", 72, SectorStatus::Alerta),
        sector("Corte e Vinco", 15, SectorStatus::Ocioso),
    ]
}

#[must_use]
pub fn mock_inventory() -> Vec<InventoryItem> {
    let item = |item: &str, quantity: &str, status: StockStatus| InventoryItem {
        item: item.to_owned(),
        quantity: quantity.to_owned(),
        status,
    };
    vec![
        item("Papel Couché 150g", "5000 fls", StockStatus::Ok),
        item("Papel Supremo 300g", "200 fls", StockStatus::Baixo),
        item("Tinta Ciano (Offset)", "2 Latas", StockStatus::Critico),
        item("Lona Vinílica", "3 Rolos", StockStatus::Ok),
    ]
}

#[must_use]
pub fn mock_kpis() -> Vec<Kpi> {
    let kpi = |label: &str, value: &str, sub: &str| Kpi {
        label: label.to_owned(),
        value: value.to_owned(),
        sub: sub.to_owned(),
    };
    vec![
        kpi("Fila Total", "28", "Pedidos"),
        kpi("Eficiência", "94%", "No Prazo"),
        kpi("Materiais", "62%", "Estoque"),
        kpi("Ticket", "R$ 480", "Média"),
    ]
}

#[must_use]
pub fn mock_finance() -> FinanceSnapshot {
    FinanceSnapshot {
        monthly_revenue: "R$ 89.2k".to_owned(),
        growth_percent: 12,
        daily_revenue: "R$ 3.4k".to_owned(),
        weekly_revenue: "R$ 21.8k".to_owned(),
    }
}
