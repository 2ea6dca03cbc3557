use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use erpdesk_accounting::PaymentMethod;
use erpdesk_core::{RecordId, de};
use erpdesk_sales::{PaymentStatus, Sale, SaleInput, SaleItem};

use super::expenses::NamedRef;

/// A sale line. Older rows use `price` and `subtotal`/`total`; some send
/// them next to the current names, which win.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleItemWire {
    pub product_id: RecordId,
    pub product_name: Option<String>,
    pub product: Option<NamedRef>,
    #[serde(deserialize_with = "de::decimal")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub unit_price: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    price: Option<f64>,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub discount: f64,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub line_total: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    subtotal: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    total: Option<f64>,
}

impl From<SaleItemWire> for SaleItem {
    fn from(w: SaleItemWire) -> Self {
        let unit_price = w.unit_price.or(w.price).unwrap_or(0.0);
        let line_total = w
            .line_total
            .or(w.subtotal)
            .or(w.total)
            .unwrap_or(w.quantity * unit_price - w.discount);
        Self {
            product_id: w.product_id,
            product_name: w.product_name.or(w.product.and_then(|p| p.name)),
            quantity: w.quantity,
            unit_price,
            discount: w.discount,
            line_total,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaleWire {
    pub id: RecordId,
    pub invoice_no: Option<String>,
    invoice_number: Option<String>,
    reference_no: Option<String>,
    pub customer_id: Option<RecordId>,
    pub customer: Option<NamedRef>,
    pub warehouse_id: Option<RecordId>,
    #[serde(default, deserialize_with = "de::opt_timestamp")]
    pub sale_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::opt_timestamp")]
    date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<SaleItemWire>,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub subtotal: f64,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub discount: f64,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub tax: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    tax_amount: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub grand_total: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    total: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    total_amount: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub paid_amount: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    paid: Option<f64>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_method: Option<PaymentMethod>,
}

impl From<SaleWire> for Sale {
    fn from(w: SaleWire) -> Self {
        let grand_total = w.grand_total.or(w.total).or(w.total_amount).unwrap_or(0.0);
        let paid_amount = w.paid_amount.or(w.paid).unwrap_or(0.0);

        // Older endpoints omit the status; derive it from the amounts.
        let payment_status = w.payment_status.unwrap_or(if paid_amount <= 0.0 {
            PaymentStatus::Unpaid
        } else if paid_amount < grand_total {
            PaymentStatus::Partial
        } else {
            PaymentStatus::Paid
        });

        Self {
            invoice_no: w
                .invoice_no
                .or(w.invoice_number)
                .or(w.reference_no)
                .unwrap_or_else(|| format!("INV-{}", w.id)),
            id: w.id,
            customer_id: w.customer_id,
            customer_name: w.customer.and_then(|c| c.name),
            warehouse_id: w.warehouse_id,
            sale_date: w.sale_date.or(w.date),
            items: w.items.into_iter().map(Into::into).collect(),
            subtotal: w.subtotal,
            discount: w.discount,
            tax: w.tax.or(w.tax_amount).unwrap_or(0.0),
            grand_total,
            paid_amount,
            payment_status,
            payment_method: w.payment_method,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SaleItemPayload {
    pub product_id: RecordId,
    pub quantity: f64,
    #[serde(rename = "price")]
    pub unit_price: f64,
    pub discount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalePayload {
    pub customer_id: Option<RecordId>,
    pub warehouse_id: Option<RecordId>,
    pub items: Vec<SaleItemPayload>,
    pub discount: f64,
    pub paid_amount: f64,
    pub payment_method: PaymentMethod,
    pub note: Option<String>,
}

impl From<&SaleInput> for SalePayload {
    fn from(i: &SaleInput) -> Self {
        Self {
            customer_id: i.customer_id.clone(),
            warehouse_id: i.warehouse_id.clone(),
            items: i
                .items
                .iter()
                .map(|item| SaleItemPayload {
                    product_id: item.product_id.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    discount: item.discount,
                })
                .collect(),
            discount: i.discount,
            paid_amount: i.paid_amount,
            payment_method: i.payment_method,
            note: i.note.clone(),
        }
    }
}
