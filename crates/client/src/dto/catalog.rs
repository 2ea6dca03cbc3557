use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use erpdesk_core::{RecordId, de};
use erpdesk_products::{Category, CategoryInput, Product, ProductInput};

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRef {
    pub id: RecordId,
}

/// Backend product row. Legacy columns (`code`, `cost`, `price`, `quantity`,
/// `stock`, `status`, `image`) are read alongside the current ones, which
/// win when both are present.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductWire {
    pub id: RecordId,
    pub name: String,
    pub sku: Option<String>,
    code: Option<String>,
    pub barcode: Option<String>,
    pub category_id: Option<RecordId>,
    /// Some endpoints embed the category instead of sending `category_id`.
    pub category: Option<CategoryRef>,
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub cost_price: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    cost: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub selling_price: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    price: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub stock_quantity: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    quantity: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    stock: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    pub alert_quantity: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_flag")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "de::opt_flag")]
    status: Option<bool>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    image: Option<String>,
    #[serde(default, deserialize_with = "de::opt_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ProductWire> for Product {
    fn from(w: ProductWire) -> Self {
        Self {
            id: w.id,
            name: w.name,
            sku: w.sku.or(w.code).unwrap_or_default(),
            barcode: w.barcode,
            category_id: w.category_id.or(w.category.map(|c| c.id)),
            unit: w.unit,
            cost_price: w.cost_price.or(w.cost).unwrap_or(0.0),
            selling_price: w.selling_price.or(w.price).unwrap_or(0.0),
            stock_quantity: w.stock_quantity.or(w.quantity).or(w.stock).unwrap_or(0.0),
            alert_quantity: w.alert_quantity,
            is_active: w.is_active.or(w.status).unwrap_or(true),
            description: w.description,
            image_url: w.image_url.or(w.image),
            created_at: w.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub sku: String,
    pub barcode: Option<String>,
    pub category_id: Option<RecordId>,
    pub unit: Option<String>,
    pub cost_price: f64,
    pub selling_price: f64,
    pub alert_quantity: Option<f64>,
    pub is_active: bool,
    pub description: Option<String>,
}

impl From<&ProductInput> for ProductPayload {
    fn from(i: &ProductInput) -> Self {
        Self {
            name: i.name.trim().to_string(),
            sku: i.sku.trim().to_string(),
            barcode: i.barcode.clone(),
            category_id: i.category_id.clone(),
            unit: i.unit.clone(),
            cost_price: i.cost_price,
            selling_price: i.selling_price,
            alert_quantity: i.alert_quantity,
            is_active: i.is_active,
            description: i.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryWire {
    pub id: RecordId,
    pub name: String,
    pub parent_id: Option<RecordId>,
    pub description: Option<String>,
}

impl From<CategoryWire> for Category {
    fn from(w: CategoryWire) -> Self {
        Self {
            id: w.id,
            name: w.name,
            parent_id: w.parent_id,
            description: w.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub parent_id: Option<RecordId>,
    pub description: Option<String>,
}

impl From<&CategoryInput> for CategoryPayload {
    fn from(i: &CategoryInput) -> Self {
        Self {
            name: i.name.trim().to_string(),
            parent_id: i.parent_id.clone(),
            description: i.description.clone(),
        }
    }
}
