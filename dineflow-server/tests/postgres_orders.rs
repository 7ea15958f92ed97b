//! Order lifecycle against a real PostgreSQL database
//!
//! Runs only when `TEST_DATABASE_URL` is set; migrations are applied on
//! connect. Each test works on its own rows, so the database can be shared.

use dineflow_server::core::{AppState, Config};
use std::sync::Arc;

use dineflow_server::db::{Database, analytics, dish};
use rust_decimal::Decimal;
use shared::models::{DishCreate, OrderCreate, OrderItemCreate};
use shared::order::{ErrorKind, OrderError, OrderStatus};

async fn test_state() -> Option<AppState> {
    test_state_with_pool(4).await
}

async fn test_state_with_pool(max_connections: u32) -> Option<AppState> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let config = Config::from_lookup(|name| match name {
        "DATABASE_URL" => Some(url.clone()),
        "DB_MAX_CONNECTIONS" => Some(max_connections.to_string()),
        "DB_ACQUIRE_TIMEOUT_MS" => Some("2000".to_string()),
        _ => None,
    })
    .unwrap();
    let db = Database::connect(&config).await.unwrap();
    Some(AppState::from_database(config, db))
}

async fn add_dish(state: &AppState, name: &str, price: Decimal) -> i64 {
    let unique = format!("{name} {}", chrono::Utc::now().timestamp_nanos_opt().unwrap());
    dish::create(
        state.pool(),
        &DishCreate {
            name: unique,
            description: Some(format!("{name} description")),
            category: Some("Test".to_string()),
            sale_price: price,
            is_available: Some(true),
            prep_time: Some(10),
        },
    )
    .await
    .unwrap()
    .dish_id
}

fn order_at(table: &str) -> OrderCreate {
    OrderCreate {
        table_number: table.to_string(),
        order_type: None,
        served_by: None,
    }
}

fn line(dish_id: i64, quantity: i32) -> OrderItemCreate {
    OrderItemCreate {
        dish_id,
        quantity,
        special_instructions: None,
    }
}

#[tokio::test]
async fn test_table_three_lifecycle() {
    let Some(state) = test_state().await else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return;
    };
    let pad_thai = add_dish(&state, "Pad Thai", Decimal::new(1250, 2)).await;
    let rolls = add_dish(&state, "Spring Rolls", Decimal::new(400, 2)).await;
    let orders = &state.orders;

    let order = orders.create_order(order_at("T3")).await.unwrap();
    assert_eq!(order.status, OrderStatus::Open);

    for (dish_id, quantity) in [(pad_thai, 2), (rolls, 1)] {
        orders
            .add_item(
                order.order_id,
                OrderItemCreate {
                    dish_id,
                    quantity,
                    special_instructions: None,
                },
            )
            .await
            .unwrap();
    }

    let detail = orders.get_order(order.order_id).await.unwrap();
    assert_eq!(detail.items.len(), 2);
    assert_eq!(detail.total_amount, Decimal::new(2900, 2));
    assert!(detail.items[0].dish_name.starts_with("Pad Thai"));

    let bill = orders.get_bill(order.order_id).await.unwrap();
    assert_eq!(bill.tax, Decimal::new(290, 2));
    assert_eq!(bill.total, Decimal::new(3190, 2));

    let checkout = orders.checkout(order.order_id).await.unwrap();
    assert_eq!(checkout.order.status, OrderStatus::Paid);
    assert_eq!(checkout.order.calculated_total, Some(Decimal::new(2900, 2)));

    let err = orders
        .add_item(
            order.order_id,
            OrderItemCreate {
                dish_id: rolls,
                quantity: 1,
                special_instructions: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(orders.get_order(order.order_id).await.unwrap().items.len(), 2);

    let paid = orders.list_orders(Some("paid")).await.unwrap();
    assert!(paid.iter().any(|o| o.order.order_id == order.order_id));

    let report = analytics::sales(state.pool(), Default::default()).await.unwrap();
    assert!(!report.buckets.is_empty());

    state.db.close().await;
}

#[tokio::test]
async fn test_dangling_employee_is_foreign_key_error() {
    let Some(state) = test_state().await else {
        return;
    };

    let err = state
        .orders
        .create_order(OrderCreate {
            served_by: Some(i64::MAX),
            ..order_at("T9")
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Persistence);
    let app: shared::AppError = err.into();
    assert_eq!(app.code, shared::ErrorCode::ReferenceNotFound);
}

#[tokio::test]
async fn test_cancelled_order_is_final() {
    let Some(state) = test_state().await else {
        return;
    };
    let order = state.orders.create_order(order_at("T4")).await.unwrap();

    state.orders.set_status(order.order_id, "cancelled").await.unwrap();
    let err = state
        .orders
        .set_status(order.order_id, "open")
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::InvalidTransition { .. }));
}

#[tokio::test]
async fn test_concurrent_adds_fit_in_pool() {
    const WORKERS: usize = 2;
    let Some(state) = test_state_with_pool(WORKERS as u32).await else {
        return;
    };
    let rolls = add_dish(&state, "Spring Rolls", Decimal::new(400, 2)).await;

    let mut order_ids = Vec::new();
    for table in ["T21", "T22"] {
        order_ids.push(state.orders.create_order(order_at(table)).await.unwrap().order_id);
    }

    let barrier = Arc::new(tokio::sync::Barrier::new(WORKERS));
    let mut handles = Vec::new();
    for order_id in order_ids.clone() {
        let orders = state.orders.clone();
        let barrier = barrier.clone();
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            orders.add_item(order_id, line(rolls, 1)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    for order_id in order_ids {
        let detail = state.orders.get_order(order_id).await.unwrap();
        assert_eq!(detail.items.len(), 1);
    }
}

#[tokio::test]
async fn test_paying_via_status_counts_as_revenue() {
    let Some(state) = test_state().await else {
        return;
    };
    let pad_thai = add_dish(&state, "Pad Thai", Decimal::new(1250, 2)).await;
    let order = state.orders.create_order(order_at("T6")).await.unwrap();
    state
        .orders
        .add_item(order.order_id, line(pad_thai, 2))
        .await
        .unwrap();

    let paid = state.orders.set_status(order.order_id, "paid").await.unwrap();
    assert_eq!(paid.calculated_total, Some(Decimal::new(2500, 2)));

    let listed = state.orders.list_orders(Some("paid")).await.unwrap();
    let summary = listed
        .iter()
        .find(|o| o.order.order_id == order.order_id)
        .unwrap();
    assert_eq!(summary.order.calculated_total, Some(summary.calculated_amount));

    let report = analytics::sales(state.pool(), Default::default()).await.unwrap();
    let revenue: Decimal = report.buckets.iter().map(|b| b.total_revenue).sum();
    assert!(revenue >= Decimal::new(2500, 2));
}

#[tokio::test]
async fn test_add_racing_cancel_never_lands_after_close() {
    let Some(state) = test_state().await else {
        return;
    };
    let rolls = add_dish(&state, "Spring Rolls", Decimal::new(400, 2)).await;

    for _ in 0..10 {
        let order = state.orders.create_order(order_at("T7")).await.unwrap();
        let order_id = order.order_id;

        let adder = {
            let orders = state.orders.clone();
            tokio::spawn(async move { orders.add_item(order_id, line(rolls, 1)).await })
        };
        let canceller = {
            let orders = state.orders.clone();
            tokio::spawn(async move { orders.set_status(order_id, "cancelled").await })
        };

        canceller.await.unwrap().unwrap();
        let added = adder.await.unwrap();

        let detail = state.orders.get_order(order_id).await.unwrap();
        assert_eq!(detail.order.status, OrderStatus::Cancelled);
        match added {
            Ok(_) => assert_eq!(detail.items.len(), 1),
            Err(err) => {
                assert!(matches!(err, OrderError::OrderClosed { .. }));
                assert!(detail.items.is_empty());
            }
        }
    }
}
