//! Expense records.

pub mod expense;

pub use expense::{Expense, ExpenseInput, PaymentMethod, total};
