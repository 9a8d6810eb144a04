pub mod chat_panel;
pub mod dashboard;
pub mod order_card;
pub mod order_modal;
pub mod order_queue;
pub mod sidebar;
