//! Order history store
//!
//! A JSON file holding the most recent orders, newest first, capped at
//! [`MAX_ORDERS`]. The storage medium gives no transactional guarantee,
//! so `save` and `delete` re-read the file immediately before writing.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use beltkit_core::BeltOrder;

/// Orders kept in the history, newest first.
pub const MAX_ORDERS: usize = 100;

/// Store error type
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the history file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the history failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// File-backed order history.
#[derive(Debug, Clone)]
pub struct OrderStore {
    path: PathBuf,
}

impl OrderStore {
    /// Store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default history location in the platform data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("beltkit")
            .join("orders.json")
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the history, newest first. A missing, unreadable, or corrupt
    /// file is an empty history, never an error: a broken history must not
    /// block new-order creation.
    pub fn load(&self) -> Vec<BeltOrder> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %self.path.display(), %err, "order history unreadable, starting empty");
                }
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(orders) => orders,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "order history corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Prepend an order and truncate to [`MAX_ORDERS`]. Re-reads current
    /// state before writing.
    pub fn save(&self, order: &BeltOrder) -> Result<()> {
        let mut orders = self.load();
        orders.insert(0, order.clone());
        orders.truncate(MAX_ORDERS);
        self.write(&orders)
    }

    /// Remove an order by id. Returns whether anything was removed.
    pub fn delete(&self, id: &Uuid) -> Result<bool> {
        let mut orders = self.load();
        let before = orders.len();
        orders.retain(|o| o.id != *id);
        let removed = orders.len() != before;
        if removed {
            self.write(&orders)?;
        }
        Ok(removed)
    }

    fn write(&self, orders: &[BeltOrder]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(orders)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beltkit_core::{BeltDesign, CustomerDetails};

    fn order(number: &str) -> BeltOrder {
        BeltOrder {
            id: Uuid::new_v4(),
            order_number: number.to_string(),
            date: "August 5, 2026".to_string(),
            design: BeltDesign::default(),
            customer: CustomerDetails::default(),
            total_length: 45.0,
            price: None,
        }
    }

    fn temp_store() -> (tempfile::TempDir, OrderStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = OrderStore::new(dir.path().join("orders.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let (_dir, store) = temp_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_prepends() {
        let (_dir, store) = temp_store();
        store.save(&order("BLT-1")).unwrap();
        store.save(&order("BLT-2")).unwrap();
        let orders = store.load();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_number, "BLT-2");
        assert_eq!(orders[1].order_number, "BLT-1");
    }

    #[test]
    fn test_history_is_capped() {
        let (_dir, store) = temp_store();
        for i in 0..(MAX_ORDERS + 5) {
            store.save(&order(&format!("BLT-{i}"))).unwrap();
        }
        let orders = store.load();
        assert_eq!(orders.len(), MAX_ORDERS);
        // Newest survives, oldest five fell off.
        assert_eq!(orders[0].order_number, format!("BLT-{}", MAX_ORDERS + 4));
    }

    #[test]
    fn test_delete_by_id() {
        let (_dir, store) = temp_store();
        let keep = order("BLT-keep");
        let drop = order("BLT-drop");
        store.save(&keep).unwrap();
        store.save(&drop).unwrap();

        assert!(store.delete(&drop.id).unwrap());
        assert!(!store.delete(&drop.id).unwrap());
        let orders = store.load();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_number, "BLT-keep");
    }

    #[test]
    fn test_corrupt_history_degrades_to_empty() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "not json {").unwrap();
        assert!(store.load().is_empty());
        // And saving over it works.
        store.save(&order("BLT-1")).unwrap();
        assert_eq!(store.load().len(), 1);
    }
}
