//! Vendor catalog and matching
//!
//! The catalog is static in-memory mock data standing in for a remote
//! vendor directory. Matching is a filter over event kind and budget with a
//! rating sort - deliberately simple, no scoring model.

pub mod catalog;

use serde::Serialize;

use crate::event::types::EventKind;

pub use catalog::builtin_vendors;

/// What a vendor provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Venue,
    Catering,
    Photography,
    Music,
    Flowers,
    Rentals,
}

/// One vendor listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vendor {
    pub name: String,
    pub service: ServiceKind,
    /// Typical engagement price in cents
    pub price_cents: i64,
    /// Rating on a 0-50 scale (tenths of a star) to keep ordering integral
    pub rating_tenths: u8,
    /// Event kinds this vendor works
    pub kinds: Vec<EventKind>,
}

/// Vendors available for an event kind within budget, best-rated first
///
/// The sort is stable so equally rated vendors keep catalog order.
pub fn match_vendors(kind: EventKind, budget_cents: i64) -> Vec<Vendor> {
    let mut matches: Vec<Vendor> = builtin_vendors()
        .into_iter()
        .filter(|vendor| vendor.kinds.contains(&kind) && vendor.price_cents <= budget_cents)
        .collect();
    matches.sort_by(|a, b| b.rating_tenths.cmp(&a.rating_tenths));
    matches
}

#[cfg(test)]
#[path = "vendor_tests.rs"]
mod vendor_tests;
