//! Data models for receipts, balances, and persisted state.

pub mod receipt;
pub mod state;

pub use receipt::{Invoice, LineItem, PersonBalance, Receipt};
pub use state::{AppState, BulkAssign};
