//! # Warranty Lookup
//!
//! Serial normalization, exact-match lookup against the static warranty
//! dataset, and ticket id generation. A lookup is a plain two-outcome
//! query; it never navigates.

use chrono::{Datelike, NaiveDate};
use log::{debug, info};

use crate::core::catalog::{WARRANTIES, WarrantyRecord};

/// Trims surrounding whitespace and uppercases, matching how serials are keyed.
pub fn normalize_serial(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Finds the warranty record for a user-entered serial.
pub fn lookup(input: &str) -> Option<&'static WarrantyRecord> {
    let serial = normalize_serial(input);
    if serial.is_empty() {
        return None;
    }
    let found = WARRANTIES.iter().find(|w| w.serial == serial);
    match found {
        Some(record) => info!("Warranty lookup hit: {} ({})", serial, record.model),
        None => info!("Warranty lookup miss: {}", serial),
    }
    found
}

/// Generates a support ticket id of the form `TK-NNNNN` (10000..=99999).
pub fn new_ticket_id() -> String {
    let bits = uuid::Uuid::new_v4().as_u128();
    let number = 10_000 + (bits % 90_000) as u32;
    let id = format!("TK-{number}");
    debug!("Generated ticket id {id}");
    id
}

/// Time left on a warranty, for display on the result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    Years(u32),
    Months(u32),
    Expired,
}

impl Remaining {
    pub fn label(self) -> String {
        match self {
            Remaining::Years(n) => format!("Còn {n} năm"),
            Remaining::Months(n) => format!("Còn {n} tháng"),
            Remaining::Expired => "Đã hết hạn".to_string(),
        }
    }
}

impl WarrantyRecord {
    /// Whole years (or months, under a year) left as of `today`.
    pub fn remaining(&self, today: NaiveDate) -> Remaining {
        if today >= self.expiry_date {
            return Remaining::Expired;
        }
        let mut months = (self.expiry_date.year() - today.year()) * 12
            + self.expiry_date.month() as i32
            - today.month() as i32;
        if self.expiry_date.day() < today.day() {
            months -= 1;
        }
        let months = months.max(0) as u32;
        if months >= 12 {
            Remaining::Years(months / 12)
        } else {
            Remaining::Months(months)
        }
    }
}
