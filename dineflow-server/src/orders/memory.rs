//! In-memory order store and dish catalog for service tests

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use shared::models::{
    Dish, DishSnapshot, Order, OrderItem, OrderItemDetail, OrderSummary,
};
use shared::order::{ConstraintKind, OrderStatus, StoreError};
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::store::{
    DishLookup, NewOrder, NewOrderItem, OrderHeader, OrderStore, OrderTx, StoreResult,
};

#[derive(Debug, Clone, Default)]
struct Tables {
    orders: BTreeMap<i64, Order>,
    items: BTreeMap<i64, OrderItem>,
    next_order_id: i64,
    next_item_id: i64,
}

/// Shared in-memory database; clones see the same data
#[derive(Clone, Default)]
pub struct MemoryDb {
    tables: Arc<Mutex<Tables>>,
    dishes: Arc<RwLock<HashMap<i64, Dish>>>,
    employees: Arc<RwLock<HashMap<i64, String>>>,
    fail_commits: Arc<AtomicBool>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dish(&self, dish_id: i64, name: &str, price: Decimal, is_available: bool) {
        let dish = Dish {
            dish_id,
            name: name.to_string(),
            description: Some(format!("{name} description")),
            category: None,
            sale_price: price,
            is_available,
            prep_time: None,
        };
        self.dishes.write().unwrap().insert(dish_id, dish);
    }

    pub fn set_dish_price(&self, dish_id: i64, price: Decimal) {
        if let Some(dish) = self.dishes.write().unwrap().get_mut(&dish_id) {
            dish.sale_price = price;
        }
    }

    pub fn add_employee(&self, employee_id: i64, name: &str) {
        self.employees
            .write()
            .unwrap()
            .insert(employee_id, name.to_string());
    }

    /// Make every following commit fail with a database error
    pub fn fail_commits(&self, fail: bool) {
        self.fail_commits.store(fail, Ordering::SeqCst);
    }

    pub async fn item_count(&self, order_id: i64) -> usize {
        let tables = self.tables.lock().await;
        tables
            .items
            .values()
            .filter(|item| item.order_id == order_id)
            .count()
    }

    pub async fn calculated_total(&self, order_id: i64) -> Option<Decimal> {
        let tables = self.tables.lock().await;
        tables.orders.get(&order_id).and_then(|o| o.calculated_total)
    }

    fn server_name(&self, served_by: Option<i64>) -> Option<String> {
        let employees = self.employees.read().unwrap();
        served_by.and_then(|id| employees.get(&id).cloned())
    }

    fn detail(&self, item: &OrderItem) -> OrderItemDetail {
        let dishes = self.dishes.read().unwrap();
        let dish = dishes.get(&item.dish_id);
        OrderItemDetail {
            item: item.clone(),
            dish_name: dish.map(|d| d.name.clone()).unwrap_or_default(),
            description: dish.and_then(|d| d.description.clone()),
        }
    }
}

fn items_of(tables: &Tables, order_id: i64) -> Vec<OrderItem> {
    tables
        .items
        .values()
        .filter(|item| item.order_id == order_id)
        .cloned()
        .collect()
}

pub struct MemoryTx {
    guard: OwnedMutexGuard<Tables>,
    staged: Tables,
    dishes: Arc<RwLock<HashMap<i64, Dish>>>,
    fail_commit: bool,
}

#[async_trait]
impl OrderStore for MemoryDb {
    type Tx = MemoryTx;

    async fn begin(&self) -> StoreResult<MemoryTx> {
        let guard = self.tables.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(MemoryTx {
            guard,
            staged,
            dishes: self.dishes.clone(),
            fail_commit: self.fail_commits.load(Ordering::SeqCst),
        })
    }

    async fn insert_order(&self, order: NewOrder) -> StoreResult<Order> {
        let dangling = order
            .served_by
            .filter(|id| !self.employees.read().unwrap().contains_key(id));
        if let Some(employee_id) = dangling {
            return Err(StoreError::Constraint {
                kind: ConstraintKind::ForeignKey,
                constraint: Some("customer_orders_served_by_fkey".to_string()),
                message: format!("employee {employee_id} does not exist"),
            });
        }

        let mut tables = self.tables.lock().await;
        tables.next_order_id += 1;
        let now = Utc::now();
        let order = Order {
            order_id: tables.next_order_id,
            table_number: order.table_number,
            order_type: order.order_type,
            served_by: order.served_by,
            status: OrderStatus::Open,
            calculated_total: None,
            created_at: now,
            updated_at: now,
        };
        tables.orders.insert(order.order_id, order.clone());
        Ok(order)
    }

    async fn find_order(&self, order_id: i64) -> StoreResult<Option<OrderHeader>> {
        let order = self.tables.lock().await.orders.get(&order_id).cloned();
        Ok(order.map(|order| OrderHeader {
            server_name: self.server_name(order.served_by),
            order,
        }))
    }

    async fn list_items(&self, order_id: i64) -> StoreResult<Vec<OrderItemDetail>> {
        let items = items_of(&*self.tables.lock().await, order_id);
        Ok(items.iter().map(|item| self.detail(item)).collect())
    }

    async fn list_orders(&self, status: OrderStatus) -> StoreResult<Vec<OrderSummary>> {
        let tables = self.tables.lock().await;
        let mut orders: Vec<OrderSummary> = tables
            .orders
            .values()
            .filter(|order| order.status == status)
            .map(|order| {
                let items = items_of(&tables, order.order_id);
                let mut order = order.clone();
                order.calculated_total = Some(order.calculated_total.unwrap_or_default());
                OrderSummary {
                    server_name: self.server_name(order.served_by),
                    item_count: items.len() as i64,
                    calculated_amount: items.iter().map(OrderItem::line_total).sum(),
                    order,
                }
            })
            .collect();
        orders.sort_by(|a, b| {
            (b.order.created_at, b.order.order_id).cmp(&(a.order.created_at, a.order.order_id))
        });
        Ok(orders)
    }
}

#[async_trait]
impl OrderTx for MemoryTx {
    async fn lock_order(&mut self, order_id: i64) -> StoreResult<Option<Order>> {
        Ok(self.staged.orders.get(&order_id).cloned())
    }

    async fn items(&mut self, order_id: i64) -> StoreResult<Vec<OrderItem>> {
        Ok(items_of(&self.staged, order_id))
    }

    async fn insert_item(&mut self, item: NewOrderItem) -> StoreResult<OrderItem> {
        self.staged.next_item_id += 1;
        let item = OrderItem {
            order_item_id: self.staged.next_item_id,
            order_id: item.order_id,
            dish_id: item.dish_id,
            quantity: item.quantity,
            unit_price_at_time: item.unit_price_at_time,
            special_instructions: item.special_instructions,
            created_at: Utc::now(),
        };
        self.staged.items.insert(item.order_item_id, item.clone());
        Ok(item)
    }

    async fn delete_item(&mut self, order_id: i64, item_id: i64) -> StoreResult<bool> {
        let belongs = matches!(
            self.staged.items.get(&item_id),
            Some(item) if item.order_id == order_id
        );
        if belongs {
            self.staged.items.remove(&item_id);
        }
        Ok(belongs)
    }

    async fn update_status(
        &mut self,
        order_id: i64,
        status: OrderStatus,
        calculated_total: Option<Decimal>,
    ) -> StoreResult<Order> {
        let order = self
            .staged
            .orders
            .get_mut(&order_id)
            .ok_or_else(|| StoreError::Database(format!("order {order_id} vanished")))?;
        order.status = status;
        if calculated_total.is_some() {
            order.calculated_total = calculated_total;
        }
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    async fn commit(mut self) -> StoreResult<()> {
        if self.fail_commit {
            return Err(StoreError::Database("connection reset".to_string()));
        }
        *self.guard = std::mem::take(&mut self.staged);
        Ok(())
    }
}

#[async_trait]
impl DishLookup for MemoryTx {
    async fn find_available_dish(&mut self, dish_id: i64) -> StoreResult<Option<DishSnapshot>> {
        let dishes = self.dishes.read().unwrap();
        Ok(dishes
            .get(&dish_id)
            .filter(|dish| dish.is_available)
            .map(|dish| DishSnapshot {
                dish_id: dish.dish_id,
                name: dish.name.clone(),
                description: dish.description.clone(),
                sale_price: dish.sale_price,
            }))
    }
}
