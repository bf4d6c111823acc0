//! Order store - order lifecycle and return requests
//!
//! Orders and return requests live in one JSONL ledger, one record per
//! line, in the same shape the catalog store persists products.

use std::env;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use crate::types::{NewOrder, Order, OrderStatus, ReturnRequest, StoreResult};
use crate::utils::id::generate_id;
use crate::utils::time::current_timestamp;

/// In-memory ledger of orders and return requests
#[derive(Debug, Clone, Default)]
struct OrderLedger {
    orders: Vec<Order>,
    returns: Vec<ReturnRequest>,
}

/// Order store with an in-memory ledger for thread-safe operations
pub struct OrderStore {
    file_path: String,
    ledger: Mutex<OrderLedger>,
}

impl OrderStore {
    /// Create a new order store instance
    ///
    /// The ledger file path comes from `STORE_ORDERS_PATH`, defaulting to
    /// `orders.jsonl` in the working directory.
    pub fn new() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        let default_path = current_dir.join("orders.jsonl");

        let file_path = match env::var("STORE_ORDERS_PATH") {
            Ok(path) => {
                if Path::new(&path).is_absolute() {
                    path
                } else {
                    current_dir.join(path).to_string_lossy().to_string()
                }
            }
            Err(_) => default_path.to_string_lossy().to_string(),
        };

        Self::with_file_path(file_path)
    }

    /// Create an order store with a custom file path
    pub fn with_file_path(file_path: String) -> Self {
        let ledger = Self::load_from_file(&file_path).unwrap_or_default();

        Self {
            file_path,
            ledger: Mutex::new(ledger),
        }
    }

    /// Load the ledger from file (static helper for initialization)
    fn load_from_file(file_path: &str) -> StoreResult<OrderLedger> {
        if !Path::new(file_path).exists() {
            return Ok(OrderLedger::default());
        }

        let content = fs::read_to_string(file_path)?;
        let mut ledger = OrderLedger::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Ok(order) = serde_json::from_str::<Order>(line) {
                if !order.id.is_empty() && !order.user_id.is_empty() {
                    ledger.orders.push(order);
                    continue;
                }
            }

            if let Ok(request) = serde_json::from_str::<ReturnRequest>(line) {
                if !request.order_id.is_empty() && !request.user_id.is_empty() {
                    ledger.returns.push(request);
                }
            }
        }

        Ok(ledger)
    }

    /// Persist the ledger to file (internal helper, expects caller to hold lock)
    fn persist_to_file(&self, ledger: &OrderLedger) -> StoreResult<()> {
        if let Some(parent) = Path::new(&self.file_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = String::new();

        for order in &ledger.orders {
            content.push_str(&serde_json::to_string(order)?);
            content.push('\n');
        }

        for request in &ledger.returns {
            content.push_str(&serde_json::to_string(request)?);
            content.push('\n');
        }

        fs::write(&self.file_path, content)?;
        Ok(())
    }

    /// Create a new order; status always starts at Preparing
    pub fn create_order(&self, new: NewOrder) -> StoreResult<Order> {
        let mut ledger = self.ledger.lock().unwrap();

        let order = Order {
            id: generate_id("o"),
            user_id: new.user_id,
            created_at: current_timestamp(),
            total: new.total,
            status: OrderStatus::Preparing,
            items: new.items,
            shipping_code: None,
            shipping_address: new.shipping_address,
            payment_id: new.payment_id,
        };

        ledger.orders.push(order.clone());
        self.persist_to_file(&ledger)?;
        Ok(order)
    }

    /// All orders for a user, newest first
    pub fn user_orders(&self, user_id: &str) -> StoreResult<Vec<Order>> {
        let ledger = self.ledger.lock().unwrap();

        let mut orders: Vec<Order> = ledger
            .orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(orders)
    }

    /// Every order in the ledger, newest first (admin view)
    pub fn all_orders(&self) -> StoreResult<Vec<Order>> {
        let ledger = self.ledger.lock().unwrap();

        let mut orders = ledger.orders.clone();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(orders)
    }

    /// Get a single order by id
    pub fn get_order(&self, order_id: &str) -> StoreResult<Option<Order>> {
        let ledger = self.ledger.lock().unwrap();
        Ok(ledger.orders.iter().find(|o| o.id == order_id).cloned())
    }

    /// Attach a shipping code and move the order to Shipped
    pub fn update_shipping_code(&self, order_id: &str, shipping_code: &str) -> StoreResult<bool> {
        let mut ledger = self.ledger.lock().unwrap();

        let Some(order) = ledger.orders.iter_mut().find(|o| o.id == order_id) else {
            return Ok(false);
        };
        order.shipping_code = Some(shipping_code.to_string());
        order.status = OrderStatus::Shipped;

        self.persist_to_file(&ledger)?;
        Ok(true)
    }

    /// Set an order's status directly (admin back office)
    pub fn update_status(&self, order_id: &str, status: OrderStatus) -> StoreResult<bool> {
        let mut ledger = self.ledger.lock().unwrap();

        let Some(order) = ledger.orders.iter_mut().find(|o| o.id == order_id) else {
            return Ok(false);
        };
        order.status = status;

        self.persist_to_file(&ledger)?;
        Ok(true)
    }

    /// Check that an order exists and belongs to the user
    pub fn verify_order_owner(&self, order_id: &str, user_id: &str) -> StoreResult<bool> {
        let ledger = self.ledger.lock().unwrap();
        Ok(ledger
            .orders
            .iter()
            .any(|o| o.id == order_id && o.user_id == user_id))
    }

    /// Record a return request and move the order to ReturnRequested
    ///
    /// Ownership is the caller's concern; see [`OrderStore::verify_order_owner`].
    pub fn create_return_request(
        &self,
        order_id: &str,
        user_id: &str,
        reason: &str,
        details: &str,
    ) -> StoreResult<ReturnRequest> {
        let mut ledger = self.ledger.lock().unwrap();

        let request = ReturnRequest {
            order_id: order_id.to_string(),
            user_id: user_id.to_string(),
            reason: reason.to_string(),
            details: details.to_string(),
            status: "Beklemede".to_string(),
            created_at: current_timestamp(),
        };
        ledger.returns.push(request.clone());

        if let Some(order) = ledger.orders.iter_mut().find(|o| o.id == order_id) {
            order.status = OrderStatus::ReturnRequested;
        }

        self.persist_to_file(&ledger)?;
        Ok(request)
    }

    /// Every recorded return request (admin view)
    pub fn return_requests(&self) -> StoreResult<Vec<ReturnRequest>> {
        let ledger = self.ledger.lock().unwrap();
        Ok(ledger.returns.clone())
    }

    /// Get the ledger file path
    pub fn file_path(&self) -> &str {
        &self.file_path
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
