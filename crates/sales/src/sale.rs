use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use erpdesk_accounting::PaymentMethod;
use erpdesk_core::{DomainError, DomainResult, Entity, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Partial,
    Unpaid,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Partial => "Partially paid",
            PaymentStatus::Unpaid => "Unpaid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub product_id: RecordId,
    pub product_name: Option<String>,
    pub quantity: f64,
    pub unit_price: f64,
    pub discount: f64,
    pub line_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: RecordId,
    pub invoice_no: String,
    pub customer_id: Option<RecordId>,
    pub customer_name: Option<String>,
    pub warehouse_id: Option<RecordId>,
    pub sale_date: Option<DateTime<Utc>>,
    pub items: Vec<SaleItem>,
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub grand_total: f64,
    pub paid_amount: f64,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<PaymentMethod>,
}

impl Sale {
    /// `grand_total - paid_amount`. Negative when the customer overpaid.
    pub fn due_amount(&self) -> f64 {
        self.grand_total - self.paid_amount
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Entity for Sale {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemInput {
    pub product_id: RecordId,
    pub quantity: f64,
    pub unit_price: f64,
    pub discount: f64,
}

/// A POS checkout submitted to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleInput {
    pub customer_id: Option<RecordId>,
    pub warehouse_id: Option<RecordId>,
    pub items: Vec<SaleItemInput>,
    pub discount: f64,
    pub paid_amount: f64,
    pub payment_method: PaymentMethod,
    pub note: Option<String>,
}

impl SaleInput {
    pub fn validate(&self) -> DomainResult<()> {
        if self.items.is_empty() {
            return Err(DomainError::validation("cart is empty"));
        }
        if self.items.iter().any(|i| !(i.quantity > 0.0)) {
            return Err(DomainError::validation("quantities must be positive"));
        }
        if !(self.paid_amount >= 0.0 && self.discount >= 0.0) {
            return Err(DomainError::validation("amounts must not be negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(total: f64, paid: f64) -> Sale {
        Sale {
            id: RecordId::from(1u64),
            invoice_no: "INV-0001".into(),
            customer_id: None,
            customer_name: None,
            warehouse_id: None,
            sale_date: None,
            items: Vec::new(),
            subtotal: total,
            discount: 0.0,
            tax: 0.0,
            grand_total: total,
            paid_amount: paid,
            payment_status: PaymentStatus::Partial,
            payment_method: None,
        }
    }

    #[test]
    fn due_amount_is_total_minus_paid() {
        assert_eq!(sale(100.0, 40.0).due_amount(), 60.0);
        assert_eq!(sale(100.0, 120.0).due_amount(), -20.0);
    }

    #[test]
    fn empty_cart_is_rejected() {
        let input = SaleInput {
            customer_id: None,
            warehouse_id: None,
            items: Vec::new(),
            discount: 0.0,
            paid_amount: 0.0,
            payment_method: PaymentMethod::Cash,
            note: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn nan_amounts_are_rejected() {
        let line = SaleItemInput {
            product_id: RecordId::from(1u64),
            quantity: f64::NAN,
            unit_price: 2.0,
            discount: 0.0,
        };
        let mut input = SaleInput {
            customer_id: None,
            warehouse_id: None,
            items: vec![line.clone()],
            discount: 0.0,
            paid_amount: 0.0,
            payment_method: PaymentMethod::Cash,
            note: None,
        };
        assert!(input.validate().is_err());

        input.items = vec![SaleItemInput { quantity: 1.0, ..line }];
        assert!(input.validate().is_ok());
        input.paid_amount = f64::NAN;
        assert!(input.validate().is_err());
    }

    #[test]
    fn dashboard_shape_is_camel_case() {
        let json = serde_json::to_value(sale(10.0, 0.0)).unwrap();
        assert_eq!(json["invoiceNo"], "INV-0001");
        assert_eq!(json["paymentStatus"], "partial");
        assert_eq!(json["grandTotal"], 10.0);
    }
}
