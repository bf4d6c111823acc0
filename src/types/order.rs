//! Order types and status lifecycle

use serde::{Deserialize, Serialize};

/// Line item inside an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Order fulfillment status
///
/// Serialized with the storefront's original Turkish labels for wire
/// compatibility with existing order data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Hazırlanıyor")]
    Preparing,
    #[serde(rename = "Kargoda")]
    Shipped,
    #[serde(rename = "Teslim Edildi")]
    Delivered,
    #[serde(rename = "İptal Edildi")]
    Cancelled,
    #[serde(rename = "İade Talebi")]
    ReturnRequested,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Preparing
    }
}

/// Shipping address attached to an order
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShippingAddress {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
}

/// Customer order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: u64,
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(
        rename = "shippingCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_code: Option<String>,
    #[serde(rename = "shippingAddress", default)]
    pub shipping_address: ShippingAddress,
    #[serde(rename = "paymentId", default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

/// Payload for creating an order; id, timestamp and status are assigned by
/// the store
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub total: f64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(rename = "shippingAddress", default)]
    pub shipping_address: ShippingAddress,
    #[serde(rename = "paymentId", default)]
    pub payment_id: Option<String>,
}

fn default_return_status() -> String {
    "Beklemede".to_string()
}

/// Return request recorded alongside orders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnRequest {
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub reason: String,
    #[serde(default)]
    pub details: String,
    #[serde(default = "default_return_status")]
    pub status: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: u64,
}
