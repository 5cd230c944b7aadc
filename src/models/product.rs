use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub status: Option<String>,
    pub sequence: Option<String>,
    pub code: String,
    pub description: String,
    pub warehouse: Option<String>,
    pub reference: Option<String>,
    pub origin: Option<String>,
    pub vehicle: Option<String>,
    pub brand: Option<String>,
    /// Percentage in `[0, 100]`.
    pub discount: Decimal,
    /// Non-negative unit price.
    pub price: Decimal,
}

impl Product {
    pub fn default_description(code: &str) -> String {
        format!("Producto {code}")
    }

    /// Unit price after the product discount.
    pub fn net_price(&self) -> Decimal {
        let factor = (Decimal::ONE_HUNDRED - self.discount) / Decimal::ONE_HUNDRED;
        (self.price * factor).round_dp(2)
    }
}
