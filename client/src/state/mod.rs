//! Shared client-side state modules.
//!
//! State is split by domain (`view`, `chat`, `resize`) so individual
//! components can depend on small focused models. Fields are plain values;
//! components wrap whole structs in `RwSignal` contexts.

pub mod chat;
pub mod resize;
pub mod view;
