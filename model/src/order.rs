//! Order entity and the static order book.
//!
//! Orders are read-only at runtime: the dataset below stands in for the
//! production database while the panel runs against mock state.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

/// Scheduling bucket for an order, as shown in the queue view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Currently on the production floor.
    Production,
    /// Due tomorrow, the urgent lane.
    Tomorrow,
    /// Due within the next seven days.
    #[serde(rename = "next_7_days")]
    NextSevenDays,
}

/// Commercial priority attached to an order by the front desk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
    High,
    Urgent,
}

/// A single print job in the shop's queue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier (registro).
    pub id: String,
    /// Client display name.
    pub client: String,
    /// Product description as quoted.
    pub product: String,
    /// Number of units in the run.
    pub quantity: u32,
    /// Scheduling bucket.
    pub status: OrderStatus,
    /// Promised ship date, ISO-8601 calendar date.
    pub due_date: String,
    /// Quoted price in BRL.
    pub price: f64,
    /// Commercial priority, when the front desk set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// The mock order book backing the queue view and the AI business context.
#[must_use]
pub fn mock_orders() -> Vec<Order> {
    let row = |id: &str,
               client: &str,
               product: &str,
               quantity: u32,
               status: OrderStatus,
               due_date: &str,
               price: f64,
               priority: Option<Priority>| Order {
        id: id.to_owned(),
        client: client.to_owned(),
        product: product.to_owned(),
        quantity,
        status,
        due_date: due_date.to_owned(),
        price,
        priority,
    };

    vec![
        row(
            "101",
            "Padaria Silva",
            "Panfletos 5000un",
            5000,
            OrderStatus::Production,
            "2023-10-27",
            450.00,
            Some(Priority::Normal),
        ),
        row(
            "102",
            "Tech Solutions",
            "Cartões de Visita Verniz Localizado",
            1000,
            OrderStatus::Production,
            "2023-10-27",
            180.00,
            Some(Priority::High),
        ),
        row(
            "103",
            "Dra. Ana Paula",
            "Receituários 10 blocos",
            500,
            OrderStatus::Tomorrow,
            "2023-10-28",
            120.00,
            Some(Priority::Normal),
        ),
        row(
            "104",
            "Restaurante Gourmet",
            "Cardápios PVC",
            20,
            OrderStatus::Tomorrow,
            "2023-10-28",
            850.00,
            Some(Priority::High),
        ),
        row(
            "105",
            "Evento Rock In Rio",
            "Banners Lona 2x1m",
            5,
            OrderStatus::NextSevenDays,
            "2023-11-02",
            1200.00,
            Some(Priority::Urgent),
        ),
        row(
            "106",
            "Loja de Roupas Chic",
            "Sacolas Personalizadas",
            200,
            OrderStatus::NextSevenDays,
            "2023-11-04",
            600.00,
            None,
        ),
        row(
            "107",
            "Escola ABC",
            "Apostilas encadernadas",
            50,
            OrderStatus::Production,
            "2023-10-27",
            320.00,
            None,
        ),
    ]
}
