//! Core library for shared receipt settlement.
//!
//! This crate provides:
//! - Invoice extraction from e-invoicing HTML (dialect detection + per-dialect
//!   field extractors)
//! - A settlement ledger computing per-person paid/consumed/net balances
//! - Receipt state persistence (roster, receipts, participant assignments)

pub mod error;
pub mod invoice;
pub mod ledger;
pub mod models;
pub mod store;

pub use error::{Result, TallyError};
pub use invoice::{assemble, Dialect, DialectExtractor, PartialInvoice};
pub use ledger::summarize;
pub use models::receipt::{Invoice, LineItem, PersonBalance, Receipt};
pub use models::state::{AppState, BulkAssign};
pub use store::Store;
