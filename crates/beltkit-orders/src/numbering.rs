//! Order identity
//!
//! Order numbers are human-facing (`BLT-YYMMDD-NNNN`); record ids are
//! UUIDs. The 4-digit tail is taken from UUID randomness so the module
//! needs no second randomness source.

use chrono::{DateTime, Local};
use uuid::Uuid;

/// New record id.
pub fn new_order_id() -> Uuid {
    Uuid::new_v4()
}

/// Human-facing order number for the given moment, e.g. `BLT-260805-4821`.
pub fn generate_order_number(now: DateTime<Local>) -> String {
    let id = Uuid::new_v4();
    let bytes = id.as_bytes();
    let seq = 1000 + u16::from_be_bytes([bytes[0], bytes[1]]) % 9000;
    format!("BLT-{}-{}", now.format("%y%m%d"), seq)
}

/// Long order date for paperwork, e.g. `August 5, 2026`.
pub fn format_order_date(now: DateTime<Local>) -> String {
    now.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_moment() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 5, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_order_number_shape() {
        let number = generate_order_number(fixed_moment());
        assert!(number.starts_with("BLT-260805-"));
        let seq: u16 = number.rsplit('-').next().unwrap().parse().unwrap();
        assert!((1000..=9999).contains(&seq));
    }

    #[test]
    fn test_order_date_format() {
        assert_eq!(format_order_date(fixed_moment()), "August 5, 2026");
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(new_order_id(), new_order_id());
    }
}
