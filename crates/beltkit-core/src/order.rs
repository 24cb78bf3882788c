//! Order records
//!
//! A [`BeltOrder`] is a snapshot taken when the customer commits: the
//! design, the customer details, and the derived totals. Once created it
//! is never mutated; the order history store appends and deletes whole
//! records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::design::BeltDesign;

/// Customer contact details entered with an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Free-form special requests, printed on the order summary.
    pub notes: String,
}

/// One committed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeltOrder {
    pub id: Uuid,
    /// Human-facing order number, e.g. `BLT-260805-4821`.
    pub order_number: String,
    /// Order date as displayed, e.g. `August 5, 2026`.
    pub date: String,
    pub design: BeltDesign,
    pub customer: CustomerDetails,
    /// Total strap length in inches, derived from the design.
    pub total_length: f64,
    /// Quoted price; `None` when pricing is disabled.
    pub price: Option<f64>,
}
