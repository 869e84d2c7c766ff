//! Finance Repository
//!
//! Ledger CRUD plus the on-demand rollups behind the finance screens:
//! overall income/expense/balance, per-category nets, and the monthly
//! report filter. Amounts are whole Rupiah; no floating point anywhere.

use chrono::NaiveDate;
use shared::models::{
    CategoryTotal, FinanceCreate, FinanceSummary, FinanceTransaction, FinanceUpdate,
    TransactionType,
};
use shared::util::{now_millis, record_token};

use crate::collection::{Collection, DatedRecord, Record};
use crate::core::error::{StoreError, StoreResult};
use crate::storage::RecordStore;

const COLLECTION: &str = "finance_transactions";

impl Record for FinanceTransaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl DatedRecord for FinanceTransaction {
    type SortKey = String;

    fn sort_key(&self) -> String {
        self.date.clone()
    }
}

fn validate_date(date: &str) -> StoreResult<()> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        StoreError::Validation(format!("transaction date '{date}' is not an ISO date (YYYY-MM-DD)"))
    })?;
    Ok(())
}

fn signed_amount(tx: &FinanceTransaction) -> i64 {
    match tx.kind {
        TransactionType::Income => tx.amount,
        TransactionType::Expense => -tx.amount,
    }
}

fn summarize<'a>(transactions: impl Iterator<Item = &'a FinanceTransaction>) -> FinanceSummary {
    let mut summary = FinanceSummary {
        total_income: 0,
        total_expense: 0,
        balance: 0,
    };
    for tx in transactions {
        match tx.kind {
            TransactionType::Income => summary.total_income += tx.amount,
            TransactionType::Expense => summary.total_expense += tx.amount,
        }
    }
    summary.balance = summary.total_income - summary.total_expense;
    summary
}

#[derive(Clone)]
pub struct FinanceRepository {
    coll: Collection<FinanceTransaction>,
}

impl FinanceRepository {
    pub fn new(store: RecordStore) -> Self {
        Self {
            coll: Collection::new(store, COLLECTION),
        }
    }

    pub fn with_seed(store: RecordStore, seed: Vec<FinanceTransaction>) -> Self {
        Self {
            coll: Collection::with_seed(store, COLLECTION, seed),
        }
    }

    /// Ledger entries newest-first by transaction date
    pub fn list(&self) -> StoreResult<Vec<FinanceTransaction>> {
        self.coll.list()
    }

    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<FinanceTransaction>> {
        self.coll.get_by_id(id)
    }

    pub async fn create(&self, data: FinanceCreate) -> StoreResult<FinanceTransaction> {
        if data.title.trim().is_empty() {
            return Err(StoreError::Validation("transaction title is required".into()));
        }
        if data.amount <= 0 {
            return Err(StoreError::Validation(
                "transaction amount must be positive".into(),
            ));
        }
        validate_date(&data.date)?;

        self.coll
            .insert(FinanceTransaction {
                id: record_token(),
                title: data.title,
                amount: data.amount,
                kind: data.kind,
                category: data.category,
                description: data.description,
                date: data.date,
                created_by: data.created_by,
                created_at: now_millis(),
            })
            .await
    }

    pub async fn update(&self, id: &str, data: FinanceUpdate) -> StoreResult<FinanceTransaction> {
        if let Some(title) = &data.title
            && title.trim().is_empty()
        {
            return Err(StoreError::Validation("transaction title is required".into()));
        }
        if let Some(amount) = data.amount
            && amount <= 0
        {
            return Err(StoreError::Validation(
                "transaction amount must be positive".into(),
            ));
        }
        if let Some(date) = &data.date {
            validate_date(date)?;
        }

        self.coll
            .update_with(id, |tx| {
                if let Some(title) = data.title {
                    tx.title = title;
                }
                if let Some(amount) = data.amount {
                    tx.amount = amount;
                }
                if let Some(kind) = data.kind {
                    tx.kind = kind;
                }
                if let Some(category) = data.category {
                    tx.category = category;
                }
                if let Some(description) = data.description {
                    tx.description = description;
                }
                if let Some(date) = data.date {
                    tx.date = date;
                }
                Ok(())
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.coll.remove(id).await?;
        Ok(())
    }

    /// Income/expense/balance over the whole ledger, single pass
    pub fn summary(&self) -> StoreResult<FinanceSummary> {
        Ok(summarize(self.coll.all()?.iter()))
    }

    /// Net amount per category (incomes minus expenses), grouped by exact
    /// string match. Categories appear in first-transaction order; there
    /// is no zero-padding for unused categories.
    pub fn by_category(&self) -> StoreResult<Vec<CategoryTotal>> {
        let transactions = self.coll.all()?;
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for tx in &transactions {
            let signed = signed_amount(tx);
            match totals.iter_mut().find(|t| t.category == tx.category) {
                Some(total) => total.net_amount += signed,
                None => totals.push(CategoryTotal {
                    category: tx.category.clone(),
                    net_amount: signed,
                }),
            }
        }
        Ok(totals)
    }

    /// Summary restricted to one calendar month of transaction dates
    pub fn monthly_report(&self, year: i32, month: u32) -> StoreResult<FinanceSummary> {
        if !(1..=12).contains(&month) {
            return Err(StoreError::Validation(format!("month {month} outside 1..=12")));
        }
        let prefix = format!("{year:04}-{month:02}-");
        let transactions = self.coll.all()?;
        Ok(summarize(
            transactions.iter().filter(|tx| tx.date.starts_with(&prefix)),
        ))
    }
}
