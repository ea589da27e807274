//! Canonical invoice and receipt data models.
//!
//! Field names in the serialized form match the state files written by earlier
//! deployments (`price` for the unit price, `parser` for the dialect,
//! `supplier_vat` for the tax id), so existing `state.json` files keep loading.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::invoice::Dialect;

/// A canonical invoice produced by the assembler, independent of the source
/// dialect. Every field is best-effort; absent data stays `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Supplier legal name.
    pub supplier_name: Option<String>,

    /// Supplier tax identification number.
    #[serde(rename = "supplier_vat")]
    pub supplier_tax_id: Option<String>,

    /// Invoice series/number as printed on the document.
    pub invoice_number: Option<String>,

    /// Issue date as printed on the document. Dialects disagree too much on
    /// date formats to normalize reliably, so this stays a string.
    pub invoice_date: Option<String>,

    /// Currency code (default: EUR).
    pub currency: String,

    /// Declared gross total. Filled from the sum of line totals when the
    /// document does not state one.
    #[serde(rename = "total_amount")]
    pub declared_total: Option<Decimal>,

    /// Payment method as printed on the document.
    pub payment_method: Option<String>,

    /// Which dialect extractor produced this record.
    #[serde(rename = "parser")]
    pub dialect: Dialect,

    /// Line items in document order.
    pub items: Vec<LineItem>,
}

/// A single purchased line on an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque id, unique within the invoice, stable for external reference.
    pub id: String,

    /// Product/service description. Never empty; falls back to "Item".
    pub description: String,

    /// Quantity, when the document provided a parseable one.
    pub quantity: Option<Decimal>,

    /// Unit price, when the document provided a parseable one.
    #[serde(rename = "price")]
    pub unit_price: Option<Decimal>,

    /// Line total. Either declared by the document or computed as
    /// quantity x unit price rounded to 2 decimals.
    pub total: Option<Decimal>,

    /// Names of the people who consumed this line. Assigned after the fact.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl LineItem {
    /// Effective total used for settlement: the stored total, or quantity x
    /// price when both are known, or nothing.
    pub fn effective_total(&self) -> Option<Decimal> {
        self.total
            .or_else(|| self.quantity.zip(self.unit_price).map(|(q, p)| q * p))
    }
}

/// Generate a fresh line-item id.
pub(crate) fn new_item_id() -> String {
    Uuid::new_v4().simple().to_string()[..10].to_string()
}

/// Generate a fresh receipt id.
pub(crate) fn new_receipt_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// A stored receipt: an assembled invoice plus the sharing metadata attached
/// when it was submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Opaque receipt id.
    pub id: String,

    /// Display title (explicit, else invoice number, else a dated fallback).
    pub title: String,

    /// Supplier name carried over from the invoice.
    pub supplier: Option<String>,

    /// Roster name of the person who paid.
    pub paid_by: Option<String>,

    /// Currency code.
    pub currency: String,

    /// Gross total owed for this receipt.
    pub total_amount: Decimal,

    /// Line items with participant assignments.
    pub items: Vec<LineItem>,

    /// Payment method carried over from the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// Free-form notes.
    #[serde(default)]
    pub notes: String,

    /// Which dialect extractor produced the invoice.
    #[serde(rename = "parser")]
    pub dialect: Dialect,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Per-person settlement figures. Ephemeral: recomputed on every request and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonBalance {
    /// Roster name.
    pub name: String,

    /// Sum of receipt totals this person paid for.
    pub paid: Decimal,

    /// Sum of this person's item shares.
    pub consumed: Decimal,

    /// paid - consumed.
    pub net: Decimal,
}
