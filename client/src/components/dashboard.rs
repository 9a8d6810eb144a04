//! Insights view: KPI strip, production funnel, sector load, stock and
//! finance cards, all fed from the operational snapshot.

use leptos::prelude::*;

use model::ops::{
    SectorStatus, StockStatus, mock_finance, mock_inventory, mock_kpis, mock_production_flow,
    mock_sector_load,
};

fn sector_label(status: SectorStatus) -> &'static str {
    match status {
        SectorStatus::Critico => "Crítico",
        SectorStatus::Alerta => "Alerta",
        SectorStatus::Estavel => "Estável",
        SectorStatus::Ocioso => "Ocioso",
    }
}

fn stock_label(status: StockStatus) -> &'static str {
    match status {
        StockStatus::Ok => "OK",
        StockStatus::Baixo => "Baixo",
        StockStatus::Critico => "Crítico",
    }
}

/// Home view with the operational overview cards.
#[component]
pub fn Dashboard() -> impl IntoView {
    let kpis = mock_kpis();
    let flow = mock_production_flow();
    let sectors = mock_sector_load();
    let inventory = mock_inventory();
    let finance = mock_finance();

    let growth = if finance.growth_percent >= 0 {
        format!("+{}% vs. mês anterior", finance.growth_percent)
    } else {
        format!("{}% vs. mês anterior", finance.growth_percent)
    };

    view! {
        <div class="dashboard">
            <div class="dashboard__kpis">
                {kpis
                    .into_iter()
                    .map(|kpi| {
                        view! {
                            <div class="kpi-tile">
                                <span class="kpi-tile__label">{kpi.label}</span>
                                <span class="kpi-tile__value">{kpi.value}</span>
                                <span class="kpi-tile__sub">{kpi.sub}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="dashboard__grid">
                <section class="card">
                    <h3 class="card__title">"Fluxo de Produção"</h3>
                    {flow
                        .into_iter()
                        .map(|stage| {
                            let width = format!("{}%", stage.percent);
                            view! {
                                <div class="funnel__row">
                                    <span class="funnel__stage">{stage.stage}</span>
                                    <div class="funnel__track">
                                        <div class="funnel__fill" style:width=width></div>
                                    </div>
                                    <span class="funnel__count">{stage.count}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </section>

                <section class="card">
                    <h3 class="card__title">"Carga por Setor"</h3>
                    {sectors
                        .into_iter()
                        .map(|sector| {
                            let critical = sector.is_critical();
                            let width = format!("{}%", sector.load);
                            let badge = sector_label(sector.status);
                            view! {
                                <div class="sector__row">
                                    <span class="sector__name">{sector.name}</span>
                                    <div class="sector__track">
                                        <div
                                            class="sector__fill"
                                            class:sector__fill--critical=critical
                                            style:width=width
                                        ></div>
                                    </div>
                                    <span class="sector__load">{format!("{}%", sector.load)}</span>
                                    <span class="badge" class:badge--critical=critical>{badge}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </section>

                <section class="card">
                    <h3 class="card__title">"Monitor de Estoque"</h3>
                    {inventory
                        .into_iter()
                        .map(|entry| {
                            let alert = entry.status != StockStatus::Ok;
                            let badge = stock_label(entry.status);
                            view! {
                                <div class="stock__row" class:stock__row--alert=alert>
                                    <span class="stock__item">{entry.item}</span>
                                    <span class="stock__quantity">{entry.quantity}</span>
                                    <span class="badge" class:badge--critical=alert>{badge}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </section>

                <section class="card card--finance">
                    <h3 class="card__title">"Financeiro do Mês"</h3>
                    <div class="finance__headline">
                        <span class="finance__revenue">{finance.monthly_revenue}</span>
                        <span class="finance__growth">{growth}</span>
                    </div>
                    <div class="finance__breakdown">
                        <div class="finance__cell">
                            <span class="finance__cell-label">"Hoje"</span>
                            <span class="finance__cell-value">{finance.daily_revenue}</span>
                        </div>
                        <div class="finance__cell">
                            <span class="finance__cell-label">"Semana"</span>
                            <span class="finance__cell-value">{finance.weekly_revenue}</span>
                        </div>
                    </div>
                </section>
            </div>
        </div>
    }
}
