use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use erpdesk_accounting::{Expense, ExpenseInput, PaymentMethod};
use erpdesk_core::{RecordId, de};

#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseWire {
    pub id: RecordId,
    pub category_id: Option<RecordId>,
    expense_category_id: Option<RecordId>,
    pub category_name: Option<String>,
    pub category: Option<NamedRef>,
    #[serde(deserialize_with = "de::decimal")]
    pub amount: f64,
    #[serde(default, deserialize_with = "de::opt_date")]
    pub expense_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de::opt_date")]
    date: Option<NaiveDate>,
    pub reference_no: Option<String>,
    reference: Option<String>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    pub note: Option<String>,
    notes: Option<String>,
    description: Option<String>,
}

impl From<ExpenseWire> for Expense {
    fn from(w: ExpenseWire) -> Self {
        Self {
            id: w.id,
            category_id: w.category_id.or(w.expense_category_id),
            category_name: w.category_name.or(w.category.and_then(|c| c.name)),
            amount: w.amount,
            expense_date: w.expense_date.or(w.date),
            reference_no: w.reference_no.or(w.reference),
            payment_method: w.payment_method.unwrap_or_default(),
            note: w.note.or(w.notes).or(w.description),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpensePayload {
    #[serde(rename = "expense_category_id")]
    pub category_id: Option<RecordId>,
    pub amount: f64,
    #[serde(rename = "date")]
    pub expense_date: Option<NaiveDate>,
    pub reference_no: Option<String>,
    pub payment_method: PaymentMethod,
    pub note: Option<String>,
}

impl From<&ExpenseInput> for ExpensePayload {
    fn from(i: &ExpenseInput) -> Self {
        Self {
            category_id: i.category_id.clone(),
            amount: i.amount,
            expense_date: i.expense_date,
            reference_no: i.reference_no.clone(),
            payment_method: i.payment_method,
            note: i.note.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expense_reads_category_and_date_aliases() {
        let wire: ExpenseWire = serde_json::from_value(json!({
            "id": 4,
            "expense_category_id": 2,
            "category": {"id": 2, "name": "Utilities"},
            "amount": "120.40",
            "date": "2024-02-29",
            "payment_method": "bank_transfer",
            "description": "Electricity"
        }))
        .unwrap();
        let expense = Expense::from(wire);
        assert_eq!(expense.category_name.as_deref(), Some("Utilities"));
        assert_eq!(expense.amount, 120.4);
        assert_eq!(expense.expense_date, NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(expense.payment_method, PaymentMethod::BankTransfer);
        assert_eq!(expense.note.as_deref(), Some("Electricity"));

        let front = serde_json::to_value(&expense).unwrap();
        assert_eq!(front["categoryId"], "2");
        assert_eq!(front["expenseDate"], "2024-02-29");
    }

    #[test]
    fn note_and_description_on_one_row() {
        let wire: ExpenseWire = serde_json::from_value(json!({
            "id": 9,
            "category_id": 3,
            "expense_category_id": 3,
            "amount": 10,
            "note": "Paid in advance",
            "description": "Rent"
        }))
        .unwrap();
        let expense = Expense::from(wire);
        assert_eq!(expense.note.as_deref(), Some("Paid in advance"));
        assert_eq!(expense.category_id, Some(RecordId::from(3u64)));
    }

    #[test]
    fn payment_method_defaults_to_cash() {
        let wire: ExpenseWire = serde_json::from_value(json!({"id": 1, "amount": 5})).unwrap();
        assert_eq!(Expense::from(wire).payment_method, PaymentMethod::Cash);
    }
}
