//! Source dialect detection.

use serde::{Deserialize, Serialize};

/// A known invoice markup dialect. Each variant maps to exactly one extractor;
/// adding a source means adding a variant here and an extractor module, the
/// detection loop itself never changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// MyMarket POS receipts: labeled `field-*`/`value` span pairs.
    #[default]
    MyMarket,
    /// Entersoft-hosted e-invoices: Greek-labeled header, `data-title` table.
    Entersoft,
}

/// Ordered marker table; the first matching marker wins.
const MARKERS: &[(&str, Dialect)] = &[
    ("entersoft", Dialect::Entersoft),
    ("e-invoicing.gr", Dialect::Entersoft),
    ("sklavenitis", Dialect::Entersoft),
    ("field-registeredname", Dialect::MyMarket),
    ("field-totalgrossvalue", Dialect::MyMarket),
];

impl Dialect {
    /// Classify a raw document by case-insensitive marker scan. Detection
    /// never fails closed: unknown input falls back to the default dialect so
    /// that assembly can still proceed.
    pub fn detect(html: &str) -> Dialect {
        let lower = html.to_lowercase();
        MARKERS
            .iter()
            .find(|(marker, _)| lower.contains(marker))
            .map(|&(_, dialect)| dialect)
            .unwrap_or_default()
    }
}
