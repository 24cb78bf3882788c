//! # Beltkit Orders
//!
//! Order history persistence and order identity.
//! The history is one JSON document on disk, read and written whole:
//! there is no row-level access, so each mutation re-reads the current
//! state immediately before writing (last-writer-wins, no locking). A
//! corrupt or unreadable history degrades to an empty list instead of
//! blocking new orders.

mod numbering;
mod store;

pub use numbering::{format_order_date, generate_order_number, new_order_id};
pub use store::{OrderStore, StoreError, MAX_ORDERS};
