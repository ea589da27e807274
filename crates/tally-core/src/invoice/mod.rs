//! Invoice extraction: dialect detection, per-dialect field extractors, and
//! the assembler that turns raw markup into a canonical [`Invoice`].

mod detect;
pub mod entersoft;
pub mod mymarket;
pub mod normalize;
pub mod patterns;

pub use detect::Dialect;
pub use normalize::{parse_amount, strip_and_collapse};

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::receipt::{new_item_id, Invoice, LineItem};

/// Best-effort extraction output of a single dialect. Every field that the
/// document did not yield stays `None`; extractors never fail.
#[derive(Debug, Clone, Default)]
pub struct PartialInvoice {
    pub supplier_name: Option<String>,
    pub supplier_tax_id: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<String>,
    pub currency: Option<String>,
    pub declared_total: Option<Decimal>,
    pub payment_method: Option<String>,
    pub items: Vec<ExtractedItem>,
}

/// A line item as pulled out of the document, before ids are assigned.
#[derive(Debug, Clone)]
pub struct ExtractedItem {
    pub description: String,
    pub quantity: Option<Decimal>,
    pub unit_price: Option<Decimal>,
    pub total: Option<Decimal>,
}

/// Contract shared by all dialect extractors: a pure function over the
/// document text. Missing fields propagate as `None`, never as errors.
pub trait DialectExtractor {
    fn extract(&self, html: &str) -> PartialInvoice;
}

impl Dialect {
    /// The extractor implementation for this dialect.
    pub fn extractor(&self) -> &'static dyn DialectExtractor {
        match self {
            Dialect::MyMarket => &mymarket::MyMarketExtractor,
            Dialect::Entersoft => &entersoft::EntersoftExtractor,
        }
    }
}

/// Assemble a canonical invoice from raw markup.
///
/// Detects the dialect, runs its extractor, fills a missing declared total
/// from the rounded sum of line totals (absent item totals count as zero),
/// defaults the currency to EUR, and stamps each item with a fresh id.
///
/// This is a total function: arbitrary input, including empty or binary
/// garbage, yields an invoice (worst case with every field empty and no
/// items), because callers must always get a record back for a submitted
/// document.
pub fn assemble(html: &str) -> Invoice {
    let dialect = Dialect::detect(html);
    let partial = dialect.extractor().extract(html);
    debug!(
        ?dialect,
        items = partial.items.len(),
        total = ?partial.declared_total,
        "extracted invoice"
    );

    let declared_total = partial.declared_total.unwrap_or_else(|| {
        partial
            .items
            .iter()
            .filter_map(|item| item.total)
            .sum::<Decimal>()
            .round_dp(2)
    });

    Invoice {
        supplier_name: partial.supplier_name,
        supplier_tax_id: partial.supplier_tax_id,
        invoice_number: partial.invoice_number,
        invoice_date: partial.invoice_date,
        currency: partial.currency.unwrap_or_else(|| "EUR".to_string()),
        declared_total: Some(declared_total),
        payment_method: partial.payment_method,
        dialect,
        items: partial
            .items
            .into_iter()
            .map(|item| LineItem {
                id: new_item_id(),
                description: item.description,
                quantity: item.quantity,
                unit_price: item.unit_price,
                total: item.total,
                participants: Vec::new(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_assemble_never_fails_on_garbage() {
        for input in ["", "\u{0}\u{1}\u{2}binary", "<html></html>", "plain text"] {
            let invoice = assemble(input);
            assert!(invoice.items.is_empty());
            assert_eq!(invoice.currency, "EUR");
            assert_eq!(invoice.declared_total, Some(Decimal::ZERO));
        }
    }

    #[test]
    fn test_assemble_sums_missing_total() {
        let html = r#"
            <table>
              <tr>
                <span class="field field-Description1"><span class="value">Bread</span></span>
                <span class="field field-Quantity"><span class="value">1</span></span>
                <span class="field field-UnitPrice"><span class="value">12,50</span></span>
              </tr>
              <tr>
                <span class="field field-Description1"><span class="value">Cheese</span></span>
                <span class="field field-Quantity"><span class="value">2</span></span>
                <span class="field field-UnitPrice"><span class="value">3,50</span></span>
              </tr>
              <tr>
                <span class="field field-Description1"><span class="value">Gum</span></span>
                <span class="field field-Quantity"><span class="value">1</span></span>
                <span class="field field-UnitPrice"><span class="value">0,50</span></span>
              </tr>
            </table>
        "#;
        let invoice = assemble(html);
        assert_eq!(invoice.items.len(), 3);
        assert_eq!(invoice.declared_total, Some(dec("20.00")));
    }

    #[test]
    fn test_assemble_assigns_unique_item_ids() {
        let html = r#"
            <tr>
              <span class="field field-Description1"><span class="value">A</span></span>
              <span class="field field-Quantity"><span class="value">1</span></span>
              <span class="field field-UnitPrice"><span class="value">1,00</span></span>
            </tr>
            <tr>
              <span class="field field-Description1"><span class="value">B</span></span>
              <span class="field field-Quantity"><span class="value">1</span></span>
              <span class="field field-UnitPrice"><span class="value">1,00</span></span>
            </tr>
        "#;
        let invoice = assemble(html);
        assert_eq!(invoice.items.len(), 2);
        assert_ne!(invoice.items[0].id, invoice.items[1].id);
        assert_eq!(invoice.dialect, Dialect::MyMarket);
    }
}
