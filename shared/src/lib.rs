// Data models shared by the codec library and its consumers.
pub mod models;

pub use models::{MonetaryAmount, Transaction, TransactionSummary};
