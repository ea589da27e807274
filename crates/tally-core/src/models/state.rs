//! Persisted application state: the roster plus the receipt collection.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TallyError};
use crate::invoice::strip_and_collapse;
use crate::models::receipt::{new_receipt_id, Invoice, Receipt};

/// Roster seeded into every fresh state file, in display order.
pub const DEFAULT_PEOPLE: &[&str] = &[
    "Yiannos", "Ntinos", "Ari", "Eva", "Athanasia", "Spiros", "Rozina", "Anna",
];

/// Bulk participant assignment mode across a whole receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAssign {
    /// Attach the full roster to every item.
    All,
    /// Clear every item's participants.
    None,
}

/// The full mutable application state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    /// Roster of person names, in display order.
    #[serde(default)]
    pub people: Vec<String>,

    /// All stored receipts, in submission order.
    #[serde(default)]
    pub receipts: Vec<Receipt>,
}

impl AppState {
    /// Ensure the default roster is seeded and names are cleaned and
    /// de-duplicated, preserving order. Applied to every loaded state.
    pub fn normalize(&mut self) {
        let mut people = Vec::new();
        let mut add = |name: &str| {
            if let Some(cleaned) = strip_and_collapse(name) {
                if !people.contains(&cleaned) {
                    people.push(cleaned);
                }
            }
        };
        for name in DEFAULT_PEOPLE {
            add(name);
        }
        for name in &self.people {
            add(name);
        }
        self.people = people;
    }

    /// Add a person to the roster. Returns false when the cleaned name is
    /// empty or already present.
    pub fn add_person(&mut self, name: &str) -> bool {
        match strip_and_collapse(name) {
            Some(cleaned) if !self.people.contains(&cleaned) => {
                self.people.push(cleaned);
                true
            }
            _ => false,
        }
    }

    /// Wrap an assembled invoice into a stored receipt and append it.
    ///
    /// The payer defaults to the first roster name; the title falls back to
    /// the invoice number, then to a dated placeholder.
    pub fn add_receipt(
        &mut self,
        invoice: Invoice,
        paid_by: Option<&str>,
        title: Option<&str>,
        notes: Option<&str>,
    ) -> &Receipt {
        let paid_by = paid_by
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| self.people.first().cloned());

        let title = title
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| invoice.invoice_number.clone())
            .unwrap_or_else(|| format!("Receipt {}", Utc::now().date_naive()));

        let receipt = Receipt {
            id: new_receipt_id(),
            title,
            supplier: invoice.supplier_name,
            paid_by,
            currency: invoice.currency,
            total_amount: invoice.declared_total.unwrap_or_default(),
            items: invoice.items,
            payment_method: invoice.payment_method,
            notes: notes.map(str::trim).unwrap_or_default().to_string(),
            dialect: invoice.dialect,
            created_at: Utc::now(),
        };
        debug!(id = %receipt.id, items = receipt.items.len(), "stored receipt");
        self.receipts.push(receipt);
        self.receipts.last().expect("just pushed")
    }

    fn receipt_mut(&mut self, receipt_id: &str) -> Result<&mut Receipt> {
        self.receipts
            .iter_mut()
            .find(|r| r.id == receipt_id)
            .ok_or_else(|| TallyError::ReceiptNotFound(receipt_id.to_string()))
    }

    /// Replace an item's participant set. Names not on the roster are
    /// silently filtered out, not rejected.
    pub fn set_participants(
        &mut self,
        receipt_id: &str,
        item_id: &str,
        participants: &[String],
    ) -> Result<()> {
        let people = self.people.clone();
        let receipt = self.receipt_mut(receipt_id)?;
        let item = receipt
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| TallyError::ItemNotFound(item_id.to_string()))?;
        item.participants = participants
            .iter()
            .filter(|p| people.contains(p))
            .cloned()
            .collect();
        Ok(())
    }

    /// Change who paid for a receipt. Names not on the roster are ignored.
    pub fn set_paid_by(&mut self, receipt_id: &str, paid_by: &str) -> Result<()> {
        let known = self.people.iter().any(|p| p == paid_by.trim());
        let receipt = self.receipt_mut(receipt_id)?;
        if known && !paid_by.trim().is_empty() {
            receipt.paid_by = Some(paid_by.trim().to_string());
        }
        Ok(())
    }

    /// Assign the full roster to, or clear, every item on a receipt.
    pub fn bulk_participants(&mut self, receipt_id: &str, mode: BulkAssign) -> Result<()> {
        let people = self.people.clone();
        let receipt = self.receipt_mut(receipt_id)?;
        for item in &mut receipt.items {
            item.participants = match mode {
                BulkAssign::All => people.clone(),
                BulkAssign::None => Vec::new(),
            };
        }
        Ok(())
    }

    /// Remove a receipt by id.
    pub fn delete_receipt(&mut self, receipt_id: &str) -> Result<()> {
        let before = self.receipts.len();
        self.receipts.retain(|r| r.id != receipt_id);
        if self.receipts.len() == before {
            return Err(TallyError::ReceiptNotFound(receipt_id.to_string()));
        }
        Ok(())
    }
}
