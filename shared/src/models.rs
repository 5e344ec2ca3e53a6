use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Monetary value in major units (e.g. `1234.56` reais), never scaled to cents.
pub type MonetaryAmount = f64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    /// Positive for income, negative for expenses.
    pub amount: MonetaryAmount,
    pub category: Option<String>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub income: MonetaryAmount,
    /// Sum of expenses as a positive number.
    pub expenses: MonetaryAmount,
    pub balance: MonetaryAmount,
    pub count: usize,
}

impl TransactionSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut summary = Self::default();
        for tx in transactions {
            if tx.is_expense() {
                summary.expenses += -tx.amount;
            } else {
                summary.income += tx.amount;
            }
            summary.count += 1;
        }
        summary.balance = summary.income - summary.expenses;
        summary
    }
}
