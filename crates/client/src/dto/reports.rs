//! Report summaries. The backend computes every figure; these types only
//! decode them (snake_case in) and present them (camelCase out).
//!
//! Report endpoints have changed column names over time and some send the
//! old and new name side by side, so each summary is read through a private
//! wire shape that keeps both and prefers the current name.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use erpdesk_core::{RecordId, de};

/// A summary returned by one of the report endpoints.
pub trait Report: DeserializeOwned {
    /// Backend field names a reply must contain at least one of.
    const KEYS: &'static [&'static str];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"), from = "SalesSummaryWire")]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub total_paid: f64,
    pub total_due: f64,
    pub rows: Vec<SalesRow>,
}

impl SalesSummary {
    pub fn average_order_value(&self) -> f64 {
        if self.total_orders == 0 {
            0.0
        } else {
            self.total_revenue / self.total_orders as f64
        }
    }
}

impl Report for SalesSummary {
    const KEYS: &'static [&'static str] = &[
        "total_revenue",
        "total_sales",
        "total_orders",
        "total_sales_count",
        "count",
        "total_paid",
        "total_due",
        "rows",
        "daily",
    ];
}

#[derive(Deserialize)]
struct SalesSummaryWire {
    #[serde(default, deserialize_with = "de::opt_decimal")]
    total_revenue: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    total_sales: Option<f64>,
    total_orders: Option<u64>,
    total_sales_count: Option<u64>,
    count: Option<u64>,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    total_paid: f64,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    total_due: f64,
    rows: Option<Vec<SalesRow>>,
    daily: Option<Vec<SalesRow>>,
}

impl From<SalesSummaryWire> for SalesSummary {
    fn from(w: SalesSummaryWire) -> Self {
        Self {
            total_revenue: w.total_revenue.or(w.total_sales).unwrap_or(0.0),
            total_orders: w.total_orders.or(w.total_sales_count).or(w.count).unwrap_or(0),
            total_paid: w.total_paid,
            total_due: w.total_due,
            rows: w.rows.or(w.daily).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"), from = "SalesRowWire")]
pub struct SalesRow {
    pub date: Option<NaiveDate>,
    pub orders: u64,
    pub revenue: f64,
}

#[derive(Deserialize)]
struct SalesRowWire {
    #[serde(default, deserialize_with = "de::opt_date")]
    date: Option<NaiveDate>,
    orders: Option<u64>,
    count: Option<u64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    revenue: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    total: Option<f64>,
}

impl From<SalesRowWire> for SalesRow {
    fn from(w: SalesRowWire) -> Self {
        Self {
            date: w.date,
            orders: w.orders.or(w.count).unwrap_or(0),
            revenue: w.revenue.or(w.total).unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"), from = "ProfitSummaryWire")]
pub struct ProfitSummary {
    pub revenue: f64,
    pub cost_of_goods: f64,
    pub expenses: f64,
    pub gross_profit: f64,
    pub net_profit: f64,
}

impl Report for ProfitSummary {
    const KEYS: &'static [&'static str] = &[
        "revenue",
        "total_revenue",
        "cost_of_goods",
        "cogs",
        "expenses",
        "total_expenses",
        "gross_profit",
        "net_profit",
        "profit",
    ];
}

#[derive(Deserialize)]
struct ProfitSummaryWire {
    #[serde(default, deserialize_with = "de::opt_decimal")]
    revenue: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    total_revenue: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    cost_of_goods: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    cogs: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    expenses: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    total_expenses: Option<f64>,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    gross_profit: f64,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    net_profit: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    profit: Option<f64>,
}

impl From<ProfitSummaryWire> for ProfitSummary {
    fn from(w: ProfitSummaryWire) -> Self {
        Self {
            revenue: w.revenue.or(w.total_revenue).unwrap_or(0.0),
            cost_of_goods: w.cost_of_goods.or(w.cogs).unwrap_or(0.0),
            expenses: w.expenses.or(w.total_expenses).unwrap_or(0.0),
            gross_profit: w.gross_profit,
            net_profit: w.net_profit.or(w.profit).unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"), from = "StockSummaryWire")]
pub struct StockSummary {
    pub total_products: u64,
    pub total_quantity: f64,
    pub stock_value: f64,
    pub low_stock: Vec<LowStockRow>,
}

impl Report for StockSummary {
    const KEYS: &'static [&'static str] = &[
        "total_products",
        "total_quantity",
        "stock_value",
        "total_value",
        "low_stock",
        "low_stock_products",
    ];
}

#[derive(Deserialize)]
struct StockSummaryWire {
    #[serde(default)]
    total_products: u64,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    total_quantity: f64,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    stock_value: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    total_value: Option<f64>,
    low_stock: Option<Vec<LowStockRow>>,
    low_stock_products: Option<Vec<LowStockRow>>,
}

impl From<StockSummaryWire> for StockSummary {
    fn from(w: StockSummaryWire) -> Self {
        Self {
            total_products: w.total_products,
            total_quantity: w.total_quantity,
            stock_value: w.stock_value.or(w.total_value).unwrap_or(0.0),
            low_stock: w.low_stock.or(w.low_stock_products).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"), try_from = "LowStockRowWire")]
pub struct LowStockRow {
    pub product_id: RecordId,
    pub product_name: String,
    pub quantity: f64,
    pub alert_quantity: Option<f64>,
}

#[derive(Deserialize)]
struct LowStockRowWire {
    product_id: Option<RecordId>,
    id: Option<RecordId>,
    product_name: Option<String>,
    name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    quantity: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    stock_quantity: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_decimal")]
    alert_quantity: Option<f64>,
}

impl TryFrom<LowStockRowWire> for LowStockRow {
    type Error = String;

    fn try_from(w: LowStockRowWire) -> Result<Self, Self::Error> {
        Ok(Self {
            product_id: w
                .product_id
                .or(w.id)
                .ok_or("low stock row without `product_id`")?,
            product_name: w.product_name.or(w.name).unwrap_or_default(),
            quantity: w.quantity.or(w.stock_quantity).unwrap_or(0.0),
            alert_quantity: w.alert_quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sales_summary_reads_backend_names() {
        let summary: SalesSummary = serde_json::from_value(json!({
            "total_sales": "1500.00",
            "count": 3,
            "daily": [{"date": "2024-05-01", "count": 3, "total": "1500.00"}]
        }))
        .unwrap();
        assert_eq!(summary.total_revenue, 1500.0);
        assert_eq!(summary.average_order_value(), 500.0);
        assert_eq!(summary.rows[0].date, NaiveDate::from_ymd_opt(2024, 5, 1));

        let out = serde_json::to_value(&summary).unwrap();
        assert_eq!(out["totalRevenue"], json!(1500.0));
        assert_eq!(out["totalOrders"], json!(3));
    }

    #[test]
    fn old_and_new_column_names_side_by_side() {
        let summary: SalesSummary = serde_json::from_value(json!({
            "total_revenue": 200,
            "total_sales": 180,
            "total_orders": 4,
            "count": 9,
            "rows": [{"revenue": 50, "total": 60, "orders": 1, "count": 2}]
        }))
        .unwrap();
        assert_eq!(summary.total_revenue, 200.0);
        assert_eq!(summary.total_orders, 4);
        assert_eq!(summary.rows[0].revenue, 50.0);
        assert_eq!(summary.rows[0].orders, 1);

        let stock: StockSummary = serde_json::from_value(json!({
            "stock_value": 10,
            "total_value": 12,
            "low_stock": [{"product_id": 3, "id": 99, "name": "Tea", "quantity": 1, "stock_quantity": 2}]
        }))
        .unwrap();
        assert_eq!(stock.stock_value, 10.0);
        assert_eq!(stock.low_stock[0].product_id, RecordId::from(3u64));
        assert_eq!(stock.low_stock[0].quantity, 1.0);
    }

    #[test]
    fn low_stock_row_needs_a_product() {
        assert!(serde_json::from_value::<LowStockRow>(json!({"name": "Tea"})).is_err());
    }

    #[test]
    fn empty_report_is_zeroed() {
        assert_eq!(SalesSummary::default().average_order_value(), 0.0);
        let stock: StockSummary = serde_json::from_value(json!({})).unwrap();
        assert!(stock.low_stock.is_empty());
    }
}
