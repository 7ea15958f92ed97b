//! PostgreSQL order store
//!
//! Status and order type are TEXT columns guarded by CHECK constraints; rows
//! are read into [`OrderRow`] and converted into the typed [`Order`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::models::{
    DishSnapshot, Order, OrderItem, OrderItemDetail, OrderSummary, OrderType,
};
use shared::order::{OrderStatus, StoreError};
use sqlx::{PgPool, Postgres, Transaction};

use crate::orders::{
    DishLookup, NewOrder, NewOrderItem, OrderHeader, OrderStore, OrderTx, StoreResult,
};

const ORDER_COLUMNS: &str = "order_id, table_number, order_type, served_by, status, \
     calculated_total, created_at, updated_at";

const ITEM_COLUMNS: &str = "order_item_id, order_id, dish_id, quantity, unit_price_at_time, \
     special_instructions, created_at";

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    order_id: i64,
    table_number: String,
    order_type: String,
    served_by: Option<i64>,
    status: String,
    calculated_total: Option<Decimal>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = StoreError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status = OrderStatus::parse(&row.status).ok_or_else(|| {
            StoreError::Database(format!(
                "order {} has unknown status '{}'",
                row.order_id, row.status
            ))
        })?;
        let order_type = row.order_type.parse::<OrderType>().map_err(|e| {
            StoreError::Database(format!("order {}: {e}", row.order_id))
        })?;

        Ok(Order {
            order_id: row.order_id,
            table_number: row.table_number,
            order_type,
            served_by: row.served_by,
            status,
            calculated_total: row.calculated_total,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct OrderHeaderRow {
    #[sqlx(flatten)]
    order: OrderRow,
    server_name: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct OrderSummaryRow {
    #[sqlx(flatten)]
    order: OrderRow,
    server_name: Option<String>,
    item_count: i64,
    calculated_amount: Decimal,
}

/// Order store backed by the shared pool
#[derive(Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    type Tx = PgOrderTx;

    async fn begin(&self) -> StoreResult<PgOrderTx> {
        let tx = self.pool.begin().await?;
        Ok(PgOrderTx { tx })
    }

    async fn insert_order(&self, order: NewOrder) -> StoreResult<Order> {
        let sql = format!(
            "INSERT INTO customer_orders (table_number, order_type, served_by)
             VALUES ($1, $2, $3)
             RETURNING {ORDER_COLUMNS}"
        );
        let row: OrderRow = sqlx::query_as(&sql)
            .bind(&order.table_number)
            .bind(order.order_type.as_str())
            .bind(order.served_by)
            .fetch_one(&self.pool)
            .await?;
        row.try_into()
    }

    async fn find_order(&self, order_id: i64) -> StoreResult<Option<OrderHeader>> {
        let row: Option<OrderHeaderRow> = sqlx::query_as(
            "SELECT o.order_id, o.table_number, o.order_type, o.served_by, o.status,
                o.calculated_total, o.created_at, o.updated_at,
                e.first_name || ' ' || e.last_name AS server_name
             FROM customer_orders o
             LEFT JOIN employees e ON e.employee_id = o.served_by
             WHERE o.order_id = $1",
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| -> StoreResult<OrderHeader> {
            Ok(OrderHeader {
                order: row.order.try_into()?,
                server_name: row.server_name,
            })
        })
        .transpose()
    }

    async fn list_items(&self, order_id: i64) -> StoreResult<Vec<OrderItemDetail>> {
        let items = sqlx::query_as::<_, OrderItemDetail>(
            "SELECT oi.order_item_id, oi.order_id, oi.dish_id, oi.quantity,
                oi.unit_price_at_time, oi.special_instructions, oi.created_at,
                d.name AS dish_name, d.description
             FROM order_items oi
             JOIN dishes d ON d.dish_id = oi.dish_id
             WHERE oi.order_id = $1
             ORDER BY oi.order_item_id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn list_orders(&self, status: OrderStatus) -> StoreResult<Vec<OrderSummary>> {
        let rows: Vec<OrderSummaryRow> = sqlx::query_as(
            "SELECT o.order_id, o.table_number, o.order_type, o.served_by, o.status,
                COALESCE(o.calculated_total, 0) AS calculated_total,
                o.created_at, o.updated_at,
                e.first_name || ' ' || e.last_name AS server_name,
                COUNT(oi.order_item_id) AS item_count,
                COALESCE(SUM(oi.quantity * oi.unit_price_at_time), 0) AS calculated_amount
             FROM customer_orders o
             LEFT JOIN employees e ON e.employee_id = o.served_by
             LEFT JOIN order_items oi ON oi.order_id = o.order_id
             WHERE o.status = $1
             GROUP BY o.order_id, e.first_name, e.last_name
             ORDER BY o.created_at DESC, o.order_id DESC",
        )
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| -> StoreResult<OrderSummary> {
                Ok(OrderSummary {
                    order: row.order.try_into()?,
                    server_name: row.server_name,
                    item_count: row.item_count,
                    calculated_amount: row.calculated_amount,
                })
            })
            .collect()
    }
}

/// Open transaction; rolled back on drop unless committed
pub struct PgOrderTx {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl OrderTx for PgOrderTx {
    async fn lock_order(&mut self, order_id: i64) -> StoreResult<Option<Order>> {
        let sql =
            format!("SELECT {ORDER_COLUMNS} FROM customer_orders WHERE order_id = $1 FOR UPDATE");
        let row: Option<OrderRow> = sqlx::query_as(&sql)
            .bind(order_id)
            .fetch_optional(&mut *self.tx)
            .await?;
        row.map(Order::try_from).transpose()
    }

    async fn items(&mut self, order_id: i64) -> StoreResult<Vec<OrderItem>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM order_items WHERE order_id = $1 ORDER BY order_item_id"
        );
        let items = sqlx::query_as::<_, OrderItem>(&sql)
            .bind(order_id)
            .fetch_all(&mut *self.tx)
            .await?;
        Ok(items)
    }

    async fn insert_item(&mut self, item: NewOrderItem) -> StoreResult<OrderItem> {
        let sql = format!(
            "INSERT INTO order_items
                (order_id, dish_id, quantity, unit_price_at_time, special_instructions)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ITEM_COLUMNS}"
        );
        let item = sqlx::query_as::<_, OrderItem>(&sql)
            .bind(item.order_id)
            .bind(item.dish_id)
            .bind(item.quantity)
            .bind(item.unit_price_at_time)
            .bind(item.special_instructions)
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(item)
    }

    async fn delete_item(&mut self, order_id: i64, item_id: i64) -> StoreResult<bool> {
        let result =
            sqlx::query("DELETE FROM order_items WHERE order_item_id = $1 AND order_id = $2")
                .bind(item_id)
                .bind(order_id)
                .execute(&mut *self.tx)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_status(
        &mut self,
        order_id: i64,
        status: OrderStatus,
        calculated_total: Option<Decimal>,
    ) -> StoreResult<Order> {
        let sql = format!(
            "UPDATE customer_orders
             SET status = $2,
                 calculated_total = COALESCE($3, calculated_total),
                 updated_at = NOW()
             WHERE order_id = $1
             RETURNING {ORDER_COLUMNS}"
        );
        let row: OrderRow = sqlx::query_as(&sql)
            .bind(order_id)
            .bind(status.as_str())
            .bind(calculated_total)
            .fetch_one(&mut *self.tx)
            .await?;
        row.try_into()
    }

    async fn commit(self) -> StoreResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl DishLookup for PgOrderTx {
    async fn find_available_dish(&mut self, dish_id: i64) -> StoreResult<Option<DishSnapshot>> {
        let dish = sqlx::query_as::<_, DishSnapshot>(
            "SELECT dish_id, name, description, sale_price
             FROM dishes
             WHERE dish_id = $1 AND is_available",
        )
        .bind(dish_id)
        .fetch_optional(&mut *self.tx)
        .await?;
        Ok(dish)
    }
}
