//! Shared domain model for the gráfica admin panel.
//!
//! This crate owns the types used by both `server` and `client`: the order
//! dataset, the operational snapshots shown on the dashboard, and the chat
//! wire contract spoken between the UI and the relay backend.

pub mod chat;
pub mod ops;
pub mod order;
