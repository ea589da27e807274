//! Extractor for Entersoft-hosted e-invoices (Sklavenitis and others).
//!
//! The header block carries the supplier name in a styled heading and the
//! invoice number, issue date, tax id, and payment method behind fixed Greek
//! labels. Items are rows inside the first table body, with cells keyed by a
//! `data-title` attribute. Rows here are reliably structured, so a row counts
//! if any of description/quantity/price is present; a missing description
//! falls back to "Item".

use super::normalize::{parse_amount, strip_and_collapse};
use super::patterns::*;
use super::{DialectExtractor, ExtractedItem, PartialInvoice};

pub struct EntersoftExtractor;

impl DialectExtractor for EntersoftExtractor {
    fn extract(&self, html: &str) -> PartialInvoice {
        let supplier_name = ES_HEADER
            .captures_iter(html)
            .find_map(|caps| strip_and_collapse(&caps[1]));

        let invoice_number = ES_NUMBER
            .captures(html)
            .and_then(|caps| strip_and_collapse(&caps[1]));
        let invoice_date = ES_DATE
            .captures(html)
            .and_then(|caps| strip_and_collapse(&caps[1]));
        let supplier_tax_id = ES_TAX_ID
            .captures(html)
            .and_then(|caps| strip_and_collapse(&caps[1]));
        let payment_method = ES_PAYMENT
            .captures(html)
            .or_else(|| ES_PAYMENT_UNLABELED.captures(html))
            .and_then(|caps| strip_and_collapse(&caps[1]));

        let body = ES_TBODY
            .captures(html)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default();

        let mut items = Vec::new();
        for row in ES_ROW.captures_iter(&body) {
            let row = &row[1];
            let description = ES_CELL_DESC
                .captures(row)
                .and_then(|caps| strip_and_collapse(&caps[1]));
            let quantity = ES_CELL_QTY
                .captures(row)
                .and_then(|caps| strip_and_collapse(&caps[1]))
                .and_then(|s| parse_amount(&s));
            let unit_price = ES_CELL_PRICE
                .captures(row)
                .and_then(|caps| strip_and_collapse(&caps[1]))
                .and_then(|s| parse_amount(&s));
            let total = ES_CELL_TOTAL
                .captures(row)
                .and_then(|caps| strip_and_collapse(&caps[1]))
                .and_then(|s| parse_amount(&s));

            // Loose row policy: one populated cell is enough.
            if description.is_none() && quantity.is_none() && unit_price.is_none() {
                continue;
            }

            items.push(ExtractedItem {
                description: description.unwrap_or_else(|| "Item".to_string()),
                quantity,
                unit_price,
                total,
            });
        }

        // The declared total is the payment amount when stated; otherwise the
        // assembler derives it from the item totals.
        let declared_total = ES_PAID_AMOUNT
            .captures(html)
            .and_then(|caps| parse_amount(&caps[1]));

        let currency = if html.to_lowercase().contains("eur") {
            Some("EUR".to_string())
        } else {
            None
        };

        PartialInvoice {
            supplier_name,
            supplier_tax_id,
            invoice_number,
            invoice_date,
            currency,
            declared_total,
            payment_method,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const SAMPLE: &str = r#"
        <div class="BoldBlueHeader SomeOther">ΕΛΛΗΝΙΚΕΣ ΥΠΕΡΑΓΟΡΕΣ ΣΚΛΑΒΕΝΙΤΗΣ Α.Ε.Ε.</div>
        <div>Αρ. Παραστατικού: ΑΛΠ-123456</div>
        <div>Ημ/νία έκδοσης: 14/08/2025 21:03</div>
        <div>Α.Φ.Μ: 999080536</div>
        <div>Τρόπος πληρωμής:</div><div class="val"> Μετρητά </div>
        <table>
          <tbody>
            <tr>
              <td data-title="Περιγραφή">ΦΕΤΑ ΠΟΠ 400ΓΡ</td>
              <td data-title="Ποσότητα">1,00</td>
              <td data-title="Τιμή Μονάδας">4,58</td>
              <td data-title="Συνολική Αξία">4,58</td>
            </tr>
            <tr>
              <td data-title="Περιγραφή"></td>
              <td data-title="Ποσότητα">2,00</td>
              <td data-title="Τιμή Μονάδας">1,10</td>
              <td data-title="Συνολική Αξία">2,20</td>
            </tr>
            <tr>
              <td data-title="Περιγραφή"></td>
              <td data-title="Ποσότητα"></td>
              <td data-title="Τιμή Μονάδας"></td>
              <td data-title="Συνολική Αξία"></td>
            </tr>
          </tbody>
        </table>
        <div>Ποσό Πληρωμής</div><div class="val">6,78 EUR</div>
    "#;

    #[test]
    fn test_extract_header_fields() {
        let partial = EntersoftExtractor.extract(SAMPLE);
        assert_eq!(
            partial.supplier_name.as_deref(),
            Some("ΕΛΛΗΝΙΚΕΣ ΥΠΕΡΑΓΟΡΕΣ ΣΚΛΑΒΕΝΙΤΗΣ Α.Ε.Ε.")
        );
        assert_eq!(partial.invoice_number.as_deref(), Some("ΑΛΠ-123456"));
        assert_eq!(partial.invoice_date.as_deref(), Some("14/08/2025 21:03"));
        assert_eq!(partial.supplier_tax_id.as_deref(), Some("999080536"));
        assert_eq!(partial.payment_method.as_deref(), Some("Μετρητά"));
        assert_eq!(partial.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_row_counts_with_any_field() {
        let partial = EntersoftExtractor.extract(SAMPLE);
        // Empty third row dropped; second row kept despite missing description.
        assert_eq!(partial.items.len(), 2);
        assert_eq!(partial.items[0].description, "ΦΕΤΑ ΠΟΠ 400ΓΡ");
        assert_eq!(partial.items[0].total, Some(dec("4.58")));
        assert_eq!(partial.items[1].description, "Item");
        assert_eq!(partial.items[1].quantity, Some(dec("2.00")));
        assert_eq!(partial.items[1].total, Some(dec("2.20")));
    }

    #[test]
    fn test_declared_total_from_payment_amount() {
        let partial = EntersoftExtractor.extract(SAMPLE);
        assert_eq!(partial.declared_total, Some(dec("6.78")));
    }

    #[test]
    fn test_items_require_tbody() {
        let html = r#"
            <table>
              <tr><td data-title="Περιγραφή">Stray row</td></tr>
            </table>
        "#;
        let partial = EntersoftExtractor.extract(html);
        assert!(partial.items.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let partial = EntersoftExtractor.extract("");
        assert!(partial.items.is_empty());
        assert_eq!(partial.supplier_name, None);
        assert_eq!(partial.declared_total, None);
        assert_eq!(partial.currency, None);
    }
}
