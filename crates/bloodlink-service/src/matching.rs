//! Matching requests to donors and bank stock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bloodlink_core::types::id::{BankId, RequestId};
use bloodlink_entity::bank::BloodBank;
use bloodlink_entity::donor::Donor;
use bloodlink_entity::BloodType;

use crate::compatibility::is_compatible;
use crate::eligibility::EligibilityPolicy;

/// Compatible stock held by a bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMatch {
    /// Bank holding the stock.
    pub bank_id: BankId,
    /// Bank name.
    pub bank_name: String,
    /// Bank contact number.
    pub contact_number: String,
    /// Type of the stock.
    pub blood_type: BloodType,
    /// Units on hand.
    pub units_available: u32,
    /// Expiry date of the stock.
    pub expiry_date: DateTime<Utc>,
}

/// Who can serve a request right now.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// The request being matched.
    pub request_id: RequestId,
    /// Type needed.
    pub blood_type: BloodType,
    /// Compatible, available, currently eligible donors.
    pub donors: Vec<Donor>,
    /// Compatible stock with units on hand.
    pub stock: Vec<StockMatch>,
}

impl MatchReport {
    /// Total compatible units across all banks.
    pub fn stock_units(&self) -> u64 {
        self.stock.iter().map(|s| u64::from(s.units_available)).sum()
    }
}

/// Donors compatible with `recipient` who are available and eligible at `now`.
pub fn matching_donors<'a>(
    recipient: BloodType,
    donors: impl IntoIterator<Item = &'a Donor>,
    policy: &EligibilityPolicy,
    now: DateTime<Utc>,
) -> Vec<Donor> {
    donors
        .into_iter()
        .filter(|d| d.available)
        .filter(|d| is_compatible(d.blood_type, recipient))
        .filter(|d| policy.evaluate(d, now).eligible)
        .cloned()
        .collect()
}

/// Stock entries of compatible types with at least one unit.
pub fn matching_stock<'a>(
    recipient: BloodType,
    banks: impl IntoIterator<Item = &'a BloodBank>,
) -> Vec<StockMatch> {
    banks
        .into_iter()
        .flat_map(|bank| {
            bank.inventory
                .iter()
                .filter(|e| e.units_available > 0)
                .filter(|e| is_compatible(e.blood_type, recipient))
                .map(move |e| StockMatch {
                    bank_id: bank.id,
                    bank_name: bank.name.clone(),
                    contact_number: bank.contact_number.clone(),
                    blood_type: e.blood_type,
                    units_available: e.units_available,
                    expiry_date: e.expiry_date,
                })
        })
        .collect()
}
