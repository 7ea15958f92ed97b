//! Order service
//!
//! Lifecycle of one customer order: creation, item accrual, bill
//! computation and status transitions.

use shared::billing::{Bill, BillCalculator};
use shared::models::{
    Order, OrderCreate, OrderDetail, OrderItemCreate, OrderItemDetail, OrderSummary, OrderType,
};
use shared::order::{OrderError, OrderResult, OrderStatus};

use super::store::{DishLookup, NewOrder, NewOrderItem, OrderStore, OrderTx};

/// Result of a checkout
#[derive(Debug, Clone, serde::Serialize)]
pub struct Checkout {
    pub order: Order,
    pub bill: Bill,
}

pub struct OrderService<S> {
    store: S,
    bill: BillCalculator,
}

impl<S: OrderStore> OrderService<S> {
    pub fn new(store: S, bill: BillCalculator) -> Self {
        Self { store, bill }
    }

    /// Open a new order with no items
    pub async fn create_order(&self, payload: OrderCreate) -> OrderResult<Order> {
        let table_number = payload.table_number.trim();
        if table_number.is_empty() {
            return Err(OrderError::MissingTableNumber);
        }
        let order_type = match payload.order_type.as_deref() {
            None => OrderType::default(),
            Some(raw) => raw
                .parse()
                .map_err(|_| OrderError::InvalidOrderType(raw.to_string()))?,
        };

        let order = self
            .store
            .insert_order(NewOrder {
                table_number: table_number.to_string(),
                order_type,
                served_by: payload.served_by,
            })
            .await?;

        tracing::info!(
            order_id = order.order_id,
            table = %order.table_number,
            order_type = %order.order_type,
            "Order created"
        );
        Ok(order)
    }

    /// Order header, items in insertion order and the line-item total
    pub async fn get_order(&self, order_id: i64) -> OrderResult<OrderDetail> {
        let header = self
            .store
            .find_order(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;
        let items = self.store.list_items(order_id).await?;
        let total_amount = self.bill.subtotal(items.iter().map(|line| &line.item));

        Ok(OrderDetail {
            order: header.order,
            server_name: header.server_name,
            items,
            total_amount,
        })
    }

    /// Subtotal, tax and total from the order's current items
    pub async fn get_bill(&self, order_id: i64) -> OrderResult<Bill> {
        let detail = self.get_order(order_id).await?;
        Ok(self.bill.bill(detail.items.iter().map(|line| &line.item)))
    }

    /// Add a line to an open order at the dish's current price
    pub async fn add_item(
        &self,
        order_id: i64,
        payload: OrderItemCreate,
    ) -> OrderResult<OrderItemDetail> {
        if payload.quantity < 1 {
            return Err(OrderError::InvalidQuantity(payload.quantity));
        }

        let mut tx = self.store.begin().await?;
        let order = tx
            .lock_order(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;
        ensure_open(&order)?;

        let dish = tx
            .find_available_dish(payload.dish_id)
            .await?
            .ok_or(OrderError::DishUnavailable(payload.dish_id))?;

        let item = tx
            .insert_item(NewOrderItem {
                order_id,
                dish_id: dish.dish_id,
                quantity: payload.quantity,
                unit_price_at_time: dish.sale_price,
                special_instructions: payload.special_instructions,
            })
            .await?;
        tx.commit().await?;

        tracing::info!(
            order_id,
            item_id = item.order_item_id,
            dish_id = item.dish_id,
            quantity = item.quantity,
            unit_price = %item.unit_price_at_time,
            "Item added to order"
        );

        Ok(OrderItemDetail {
            item,
            dish_name: dish.name,
            description: dish.description,
        })
    }

    /// Remove one line from an open order; returns the order afterwards
    pub async fn remove_item(&self, order_id: i64, item_id: i64) -> OrderResult<OrderDetail> {
        let mut tx = self.store.begin().await?;
        let order = tx
            .lock_order(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;
        ensure_open(&order)?;

        if !tx.delete_item(order_id, item_id).await? {
            return Err(OrderError::ItemNotFound { order_id, item_id });
        }
        tx.commit().await?;

        tracing::info!(order_id, item_id, "Item removed from order");
        self.get_order(order_id).await
    }

    /// Move the order along the status graph
    ///
    /// Paying an order this way persists its subtotal, as checkout does.
    pub async fn set_status(&self, order_id: i64, status: &str) -> OrderResult<Order> {
        let next =
            OrderStatus::parse(status).ok_or_else(|| OrderError::InvalidStatus(status.to_string()))?;

        let mut tx = self.store.begin().await?;
        let order = tx
            .lock_order(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        if !order.status.can_transition_to(next) {
            tracing::warn!(
                order_id,
                from = %order.status,
                to = %next,
                "Rejected order status transition"
            );
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: next,
            });
        }

        let calculated_total = if next == OrderStatus::Paid {
            let items = tx.items(order_id).await?;
            Some(self.bill.subtotal(&items))
        } else {
            None
        };
        let updated = tx.update_status(order_id, next, calculated_total).await?;
        tx.commit().await?;

        tracing::info!(order_id, from = %order.status, to = %next, "Order status updated");
        Ok(updated)
    }

    /// Pay a non-empty open order and persist its subtotal
    pub async fn checkout(&self, order_id: i64) -> OrderResult<Checkout> {
        let mut tx = self.store.begin().await?;
        let order = tx
            .lock_order(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;
        ensure_open(&order)?;

        let items = tx.items(order_id).await?;
        if items.is_empty() {
            tracing::warn!(order_id, "Rejected checkout of empty order");
            return Err(OrderError::EmptyOrder(order_id));
        }

        let bill = self.bill.bill(&items);
        let order = tx
            .update_status(order_id, OrderStatus::Paid, Some(bill.subtotal))
            .await?;
        tx.commit().await?;

        tracing::info!(
            order_id,
            subtotal = %bill.subtotal,
            tax = %bill.tax,
            total = %bill.total,
            "Order checked out"
        );
        Ok(Checkout { order, bill })
    }

    /// Orders in a status (default open), newest first
    pub async fn list_orders(&self, status: Option<&str>) -> OrderResult<Vec<OrderSummary>> {
        let status = match status {
            None => OrderStatus::Open,
            Some(raw) => {
                OrderStatus::parse(raw).ok_or_else(|| OrderError::InvalidStatus(raw.to_string()))?
            }
        };
        Ok(self.store.list_orders(status).await?)
    }
}

fn ensure_open(order: &Order) -> OrderResult<()> {
    if order.is_open() {
        return Ok(());
    }
    tracing::warn!(
        order_id = order.order_id,
        status = %order.status,
        "Rejected change to closed order"
    );
    Err(OrderError::OrderClosed {
        order_id: order.order_id,
        status: order.status,
    })
}
