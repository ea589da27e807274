//! Settlement ledger: per-person paid/consumed/net balances.
//!
//! A pure function over a snapshot of the roster and the receipt collection.
//! It never mutates its inputs and holds no state of its own, so concurrent
//! callers only need to hand in their own immutable snapshots.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::receipt::{PersonBalance, Receipt};

/// Compute each roster member's total paid, total consumed, and net balance
/// across all receipts.
///
/// Payers and participants that are not on the roster are silently ignored.
/// An item's effective total is its stored total, else quantity x price, else
/// the item is skipped; a zero (or negative) effective total still divides
/// evenly among its participants. Results are rounded to 2 decimals and
/// sorted case-insensitively by name.
pub fn summarize(people: &[String], receipts: &[Receipt]) -> Vec<PersonBalance> {
    let mut paid: HashMap<&str, Decimal> = HashMap::new();
    let mut consumed: HashMap<&str, Decimal> = HashMap::new();
    for name in people {
        paid.insert(name, Decimal::ZERO);
        consumed.insert(name, Decimal::ZERO);
    }

    for receipt in receipts {
        if let Some(payer) = receipt.paid_by.as_deref() {
            if let Some(total_paid) = paid.get_mut(payer) {
                *total_paid += receipt.total_amount;
            }
        }

        for item in &receipt.items {
            if item.participants.is_empty() {
                continue;
            }
            let Some(total) = item.effective_total() else {
                continue;
            };
            let share = total / Decimal::from(item.participants.len());
            for person in &item.participants {
                if let Some(total_consumed) = consumed.get_mut(person.as_str()) {
                    *total_consumed += share;
                }
            }
        }
    }

    let mut summary: Vec<PersonBalance> = people
        .iter()
        .map(|name| {
            let paid = paid[name.as_str()];
            let consumed = consumed[name.as_str()];
            PersonBalance {
                name: name.clone(),
                paid: paid.round_dp(2),
                consumed: consumed.round_dp(2),
                net: (paid - consumed).round_dp(2),
            }
        })
        .collect();
    summary.sort_by_key(|balance| balance.name.to_lowercase());
    summary
}
