//! Reporting queries
//!
//! Revenue figures read the persisted `calculated_total` of paid orders,
//! which checkout fills in.

use shared::models::{
    DishProfitMargin, EmployeePerformance, InventoryStatus, OrderStatusSummary, PaymentRecord,
    RawMaterial, SalesBucket, SalesPeriod, SalesReport, StockLevel, TopDish,
};
use sqlx::PgPool;

/// Latest payments returned by [`payments`]
pub const PAYMENT_HISTORY_LIMIT: i64 = 100;

/// Revenue of paid orders per day (last 30) or per week (last 12), newest first
pub async fn sales(pool: &PgPool, period: SalesPeriod) -> Result<SalesReport, sqlx::Error> {
    let bucket = match period {
        SalesPeriod::Daily => "DATE(created_at)",
        SalesPeriod::Weekly => "DATE_TRUNC('week', created_at)::date",
    };
    let sql = format!(
        "SELECT {bucket} AS period_start,
            COUNT(*) AS order_count,
            COALESCE(SUM(calculated_total), 0) AS total_revenue,
            COALESCE(ROUND(AVG(calculated_total), 2), 0) AS avg_order_value
         FROM customer_orders
         WHERE status = 'paid'
         GROUP BY period_start
         ORDER BY period_start DESC
         LIMIT $1"
    );
    let buckets = sqlx::query_as::<_, SalesBucket>(&sql)
        .bind(period.bucket_limit())
        .fetch_all(pool)
        .await?;
    Ok(SalesReport { period, buckets })
}

/// Order count and amounts per status
pub async fn order_summary(pool: &PgPool) -> Result<Vec<OrderStatusSummary>, sqlx::Error> {
    sqlx::query_as::<_, OrderStatusSummary>(
        "SELECT status,
            COUNT(*) AS order_count,
            SUM(COALESCE(calculated_total, 0)) AS total_amount,
            ROUND(AVG(COALESCE(calculated_total, 0)), 2) AS avg_order_value
         FROM customer_orders
         GROUP BY status
         ORDER BY CASE status WHEN 'open' THEN 1 WHEN 'paid' THEN 2 ELSE 3 END",
    )
    .fetch_all(pool)
    .await
}

/// Paid sales per employee; employees without paid orders report zero
pub async fn employee_performance(
    pool: &PgPool,
) -> Result<Vec<EmployeePerformance>, sqlx::Error> {
    sqlx::query_as::<_, EmployeePerformance>(
        "SELECT e.employee_id, e.first_name, e.last_name, e.role,
            COUNT(co.order_id) AS orders_served,
            COALESCE(SUM(co.calculated_total), 0) AS total_sales,
            COALESCE(ROUND(AVG(co.calculated_total), 2), 0) AS avg_order_value
         FROM employees e
         LEFT JOIN customer_orders co
            ON co.served_by = e.employee_id AND co.status = 'paid'
         GROUP BY e.employee_id, e.first_name, e.last_name, e.role
         ORDER BY total_sales DESC, orders_served DESC",
    )
    .fetch_all(pool)
    .await
}

/// Recipe cost against sale price for every dish
pub async fn profit_margin(pool: &PgPool) -> Result<Vec<DishProfitMargin>, sqlx::Error> {
    sqlx::query_as::<_, DishProfitMargin>(
        "SELECT dish_id, dish_name, sale_price, cost_price,
            sale_price - cost_price AS profit_per_unit,
            CASE WHEN sale_price > 0
                THEN ROUND((sale_price - cost_price) / sale_price * 100, 2)
                ELSE 0
            END AS profit_margin_percent
         FROM (
            SELECT d.dish_id, d.name AS dish_name, d.sale_price,
                COALESCE(SUM(dr.quantity_required * rm.cost_per_unit), 0) AS cost_price
            FROM dishes d
            LEFT JOIN dish_recipes dr ON dr.dish_id = d.dish_id
            LEFT JOIN raw_materials rm ON rm.raw_material_id = dr.raw_material_id
            GROUP BY d.dish_id, d.name, d.sale_price
         ) costs
         ORDER BY profit_margin_percent DESC",
    )
    .fetch_all(pool)
    .await
}

/// Best sellers by quantity on paid orders; dishes never sold report zero
pub async fn top_dishes(pool: &PgPool, limit: i64) -> Result<Vec<TopDish>, sqlx::Error> {
    sqlx::query_as::<_, TopDish>(
        "SELECT d.dish_id, d.name AS dish_name, d.category,
            COUNT(sold.order_item_id) AS times_ordered,
            COALESCE(SUM(sold.quantity), 0)::BIGINT AS total_quantity,
            COALESCE(SUM(sold.quantity * sold.unit_price_at_time), 0) AS total_revenue
         FROM dishes d
         LEFT JOIN (
            SELECT oi.order_item_id, oi.dish_id, oi.quantity, oi.unit_price_at_time
            FROM order_items oi
            JOIN customer_orders co ON co.order_id = oi.order_id
            WHERE co.status = 'paid'
         ) sold ON sold.dish_id = d.dish_id
         GROUP BY d.dish_id, d.name, d.category
         ORDER BY total_quantity DESC, total_revenue DESC
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Raw materials classified by stock level, LOW first
pub async fn inventory_status(pool: &PgPool) -> Result<Vec<InventoryStatus>, sqlx::Error> {
    let materials = super::raw_material::list_all(pool).await?;
    Ok(classify_inventory(materials))
}

fn classify_inventory(materials: Vec<RawMaterial>) -> Vec<InventoryStatus> {
    let mut report: Vec<InventoryStatus> = materials
        .into_iter()
        .map(|m| InventoryStatus {
            stock_status: StockLevel::classify(m.current_stock, m.alert_threshold),
            raw_material_id: m.raw_material_id,
            name: m.name,
            current_stock: m.current_stock,
            alert_threshold: m.alert_threshold,
            cost_per_unit: m.cost_per_unit,
            unit_of_measurement: m.unit_of_measurement,
        })
        .collect();
    report.sort_by(|a, b| {
        a.stock_status
            .cmp(&b.stock_status)
            .then(a.current_stock.cmp(&b.current_stock))
    });
    report
}

/// Latest payments with table and processing employee joined
pub async fn payments(pool: &PgPool) -> Result<Vec<PaymentRecord>, sqlx::Error> {
    sqlx::query_as::<_, PaymentRecord>(
        "SELECT p.payment_id, p.order_id, p.payment_method, p.amount, p.tip_amount,
            p.tax_amount, p.discount_amount, p.final_amount, p.status, p.payment_date,
            p.transaction_id, co.table_number,
            e.first_name || ' ' || e.last_name AS processed_by_name
         FROM payments p
         LEFT JOIN customer_orders co ON co.order_id = p.order_id
         LEFT JOIN employees e ON e.employee_id = p.processed_by
         ORDER BY p.payment_date DESC
         LIMIT $1",
    )
    .bind(PAYMENT_HISTORY_LIMIT)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn material(id: i64, stock: i64, threshold: i64) -> RawMaterial {
        RawMaterial {
            raw_material_id: id,
            name: format!("material-{id}"),
            unit_of_measurement: "kg".to_string(),
            current_stock: Decimal::from(stock),
            alert_threshold: Decimal::from(threshold),
            cost_per_unit: Decimal::new(250, 2),
            supplier: None,
        }
    }

    #[test]
    fn test_inventory_sorted_low_first_then_by_stock() {
        let report = classify_inventory(vec![
            material(1, 100, 10),
            material(2, 12, 10),
            material(3, 8, 10),
            material(4, 2, 10),
            material(5, 14, 10),
        ]);

        let ids: Vec<i64> = report.iter().map(|r| r.raw_material_id).collect();
        assert_eq!(ids, vec![4, 3, 2, 5, 1]);
        assert_eq!(report[0].stock_status, StockLevel::Low);
        assert_eq!(report[2].stock_status, StockLevel::Medium);
        assert_eq!(report[4].stock_status, StockLevel::High);
    }
}
