//! Finance Transaction Model

use serde::{Deserialize, Serialize};

/// Ledger entry direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// Finance ledger entry
///
/// `amount` is a positive whole-Rupiah integer (no minor currency unit).
/// `date` is an ISO 8601 `YYYY-MM-DD` string, store-validated, and the
/// newest-first sort key for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceTransaction {
    pub id: String,
    pub title: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub description: String,
    pub date: String,
    pub created_by: String,
    pub created_at: i64,
}

/// Create transaction payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceCreate {
    pub title: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub description: String,
    pub date: String,
    pub created_by: String,
}

/// Update transaction payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceUpdate {
    pub title: Option<String>,
    pub amount: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}

/// Income/expense/balance rollup over a transaction set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub total_income: i64,
    pub total_expense: i64,
    pub balance: i64,
}

/// Net amount for one category (incomes minus expenses, exact-match
/// category grouping)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub net_amount: i64,
}
