use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use erpdesk_core::{DomainError, DomainResult, Entity, RecordId};

/// How an expense (or a sale) was paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    BankTransfer,
    #[serde(other)]
    Other,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::BankTransfer => "Bank transfer",
            PaymentMethod::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: RecordId,
    pub category_id: Option<RecordId>,
    pub category_name: Option<String>,
    pub amount: f64,
    pub expense_date: Option<NaiveDate>,
    pub reference_no: Option<String>,
    pub payment_method: PaymentMethod,
    pub note: Option<String>,
}

impl Entity for Expense {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseInput {
    pub category_id: Option<RecordId>,
    pub amount: f64,
    pub expense_date: Option<NaiveDate>,
    pub reference_no: Option<String>,
    pub payment_method: PaymentMethod,
    pub note: Option<String>,
}

impl ExpenseInput {
    pub fn validate(&self) -> DomainResult<()> {
        if !(self.amount > 0.0) {
            return Err(DomainError::validation("expense amount must be positive"));
        }
        Ok(())
    }
}

/// Sum of amounts, as shown in the expenses table footer.
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}
