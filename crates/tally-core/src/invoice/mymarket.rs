//! Extractor for the MyMarket POS dialect.
//!
//! Fields are rendered as labeled span pairs
//! (`<span class="field field-Name">…<span class="value">VALUE</span>`), items
//! as table rows carrying `Description1`/`Quantity`/`UnitPrice` spans. A row
//! contributes an item only when all three spans are present; partially
//! populated rows are dropped rather than emitted half-empty.

use regex::Regex;

use super::normalize::{parse_amount, strip_and_collapse};
use super::patterns::*;
use super::{DialectExtractor, ExtractedItem, PartialInvoice};

pub struct MyMarketExtractor;

fn field(html: &str, pattern: &Regex) -> Option<String> {
    pattern
        .captures(html)
        .and_then(|caps| strip_and_collapse(&caps[1]))
}

impl DialectExtractor for MyMarketExtractor {
    fn extract(&self, html: &str) -> PartialInvoice {
        let mut items = Vec::new();

        for row in MM_ROW.find_iter(html) {
            let row = row.as_str();
            let desc = MM_ITEM_DESC.captures(row);
            let qty = MM_ITEM_QTY.captures(row);
            let price = MM_ITEM_PRICE.captures(row);

            // Strict row policy: description, quantity, and price spans must
            // all be present for the row to count.
            let (Some(desc), Some(qty), Some(price)) = (desc, qty, price) else {
                continue;
            };

            let quantity = strip_and_collapse(&qty[1]).and_then(|s| parse_amount(&s));
            let unit_price = strip_and_collapse(&price[1]).and_then(|s| parse_amount(&s));
            let total = quantity
                .zip(unit_price)
                .map(|(q, p)| (q * p).round_dp(2));

            items.push(ExtractedItem {
                description: strip_and_collapse(&desc[1]).unwrap_or_else(|| "Item".to_string()),
                quantity,
                unit_price,
                total,
            });
        }

        PartialInvoice {
            supplier_name: field(html, &MM_SUPPLIER),
            supplier_tax_id: field(html, &MM_TAX_ID),
            invoice_number: field(html, &MM_NUMBER),
            invoice_date: field(html, &MM_DATE),
            currency: field(html, &MM_CURRENCY),
            declared_total: field(html, &MM_TOTAL).and_then(|s| parse_amount(&s)),
            payment_method: field(html, &MM_PAYMENT),
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
        <div class="invoice">
          <span class="field field-RegisteredName"><span class="label">Name</span><span class="value">MY MARKET A.E.</span></span>
          <span class="field field-Vat"><span class="value">094123456</span></span>
          <span class="field field-IssuerFormatedInvoiceSeriesNumber"><span class="value">ΑΛΠ 0042</span></span>
          <span class="field field-DateIssued"><span class="value">12/08/2025</span></span>
          <span class="field field-CurrencyCode"><span class="value">EUR</span></span>
          <span class="field field-TotalGrossValue"><span class="value">15,70</span></span>
          <span class="field field-PaymentMethodType"><span class="value">Μετρητά</span></span>
          <table>
            <tr>
              <td><span class="field field-Description1"><span class="value">ΓΑΛΑ 1.5L</span></span></td>
              <td><span class="field field-Quantity"><span class="value">2</span></span></td>
              <td><span class="field field-UnitPrice"><span class="value">1,85</span></span></td>
            </tr>
            <tr>
              <td><span class="field field-Description1"><span class="value">ΨΩΜΙ</span></span></td>
              <td><span class="field field-UnitPrice"><span class="value">1,20</span></span></td>
            </tr>
          </table>
        </div>
    "#;

    #[test]
    fn test_extract_header_fields() {
        let partial = MyMarketExtractor.extract(SAMPLE);
        assert_eq!(partial.supplier_name.as_deref(), Some("MY MARKET A.E."));
        assert_eq!(partial.supplier_tax_id.as_deref(), Some("094123456"));
        assert_eq!(partial.invoice_number.as_deref(), Some("ΑΛΠ 0042"));
        assert_eq!(partial.invoice_date.as_deref(), Some("12/08/2025"));
        assert_eq!(partial.currency.as_deref(), Some("EUR"));
        assert_eq!(partial.declared_total, Some(dec("15.70")));
        assert_eq!(partial.payment_method.as_deref(), Some("Μετρητά"));
    }

    #[test]
    fn test_incomplete_row_is_dropped() {
        // Second row has no quantity span, so only the complete row survives.
        let partial = MyMarketExtractor.extract(SAMPLE);
        assert_eq!(partial.items.len(), 1);
        let item = &partial.items[0];
        assert_eq!(item.description, "ΓΑΛΑ 1.5L");
        assert_eq!(item.quantity, Some(dec("2")));
        assert_eq!(item.unit_price, Some(dec("1.85")));
        assert_eq!(item.total, Some(dec("3.70")));
    }

    #[test]
    fn test_unparseable_numbers_stay_none() {
        let html = r#"
            <tr>
              <span class="field field-Description1"><span class="value">Mystery</span></span>
              <span class="field field-Quantity"><span class="value">n/a</span></span>
              <span class="field field-UnitPrice"><span class="value">1,00</span></span>
            </tr>
        "#;
        let partial = MyMarketExtractor.extract(html);
        // All three spans exist, so the row counts even though the quantity
        // does not parse.
        assert_eq!(partial.items.len(), 1);
        assert_eq!(partial.items[0].quantity, None);
        assert_eq!(partial.items[0].total, None);
    }

    #[test]
    fn test_empty_document() {
        let partial = MyMarketExtractor.extract("");
        assert!(partial.items.is_empty());
        assert_eq!(partial.supplier_name, None);
        assert_eq!(partial.declared_total, None);
    }
}
