//! Regex patterns for the supported invoice markup dialects.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Markup normalization
    pub static ref TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    // MyMarket dialect: labeled spans
    // <span class="field field-Name">...<span class="value">VALUE</span>
    pub static ref MM_SUPPLIER: Regex = mm_field("RegisteredName");
    pub static ref MM_TAX_ID: Regex = mm_field("Vat");
    pub static ref MM_NUMBER: Regex = mm_field("IssuerFormatedInvoiceSeriesNumber");
    pub static ref MM_DATE: Regex = mm_field("DateIssued");
    pub static ref MM_CURRENCY: Regex = mm_field("CurrencyCode");
    pub static ref MM_TOTAL: Regex = mm_field("TotalGrossValue");
    pub static ref MM_PAYMENT: Regex = mm_field("PaymentMethodType");

    pub static ref MM_ROW: Regex = Regex::new(r"(?i)<tr>[\s\S]*?</tr>").unwrap();
    pub static ref MM_ITEM_DESC: Regex = mm_cell("Description1");
    pub static ref MM_ITEM_QTY: Regex = mm_cell("Quantity");
    pub static ref MM_ITEM_PRICE: Regex = mm_cell("UnitPrice");

    // Entersoft dialect: styled header plus Greek-labeled fields
    pub static ref ES_HEADER: Regex =
        Regex::new(r"(?i)BoldBlueHeader[^>]*>([^<]+)</div>").unwrap();
    pub static ref ES_NUMBER: Regex =
        Regex::new(r"(?i)Αρ\.?\s*Παραστατικού:\s*([^<]+)").unwrap();
    pub static ref ES_DATE: Regex =
        Regex::new(r"(?i)Ημ/νία\s*έκδοσης:\s*([^<]+)").unwrap();
    pub static ref ES_TAX_ID: Regex =
        Regex::new(r"(?i)Α\.?Φ\.?Μ:\s*([0-9]+)").unwrap();
    pub static ref ES_PAYMENT: Regex =
        Regex::new(r"(?i)Τρόπος\s+πληρωμής:[\s\S]*?<div[^>]*>\s*([^<]+)\s*</div>").unwrap();
    pub static ref ES_PAYMENT_UNLABELED: Regex =
        Regex::new(r"(?i)Τρόπος\s+Πληρωμής[\s\S]*?<div[^>]*>\s*([^<]+)\s*</div>").unwrap();
    pub static ref ES_PAID_AMOUNT: Regex =
        Regex::new(r"(?i)Ποσ[όο]\s+Πληρωμής[\s\S]*?<div[^>]*>\s*([0-9.,]+)\s*EUR").unwrap();

    // Entersoft item table: rows in the first tbody, cells keyed by data-title
    pub static ref ES_TBODY: Regex =
        Regex::new(r"(?i)<tbody[^>]*>([\s\S]*?)</tbody>").unwrap();
    pub static ref ES_ROW: Regex = Regex::new(r"(?i)<tr[^>]*>([\s\S]*?)</tr>").unwrap();
    pub static ref ES_CELL_DESC: Regex = es_cell("Περιγραφή");
    pub static ref ES_CELL_QTY: Regex = es_cell("Ποσότητα");
    pub static ref ES_CELL_PRICE: Regex = es_cell(r#"Τιμή[^"]*"#);
    pub static ref ES_CELL_TOTAL: Regex = es_cell("Συνολική Αξία");
}

fn mm_field(name: &str) -> Regex {
    Regex::new(&format!(
        r#"(?i)<span class="field field-{name}[\s\S]*?<span class="value">([\s\S]*?)</span>"#
    ))
    .unwrap()
}

fn mm_cell(name: &str) -> Regex {
    Regex::new(&format!(
        r#"(?i)field-{name}[\s\S]*?<span class="value">([\s\S]*?)</span>"#
    ))
    .unwrap()
}

fn es_cell(title: &str) -> Regex {
    Regex::new(&format!(r#"(?i)data-title="{title}"[^>]*>([\s\S]*?)</td>"#)).unwrap()
}
