use super::memory::MemoryDb;
use super::*;
use rust_decimal::Decimal;
use shared::billing::BillCalculator;
use shared::models::{OrderCreate, OrderItemCreate};
use shared::order::{ErrorKind, OrderError, OrderStatus};


const PAD_THAI: i64 = 1;
const SPRING_ROLLS: i64 = 2;
const SEASONAL_SOUP: i64 = 3;

fn create_test_service() -> (OrderService<MemoryDb>, MemoryDb) {
    let db = MemoryDb::new();
    db.add_dish(PAD_THAI, "Pad Thai", Decimal::new(1250, 2), true);
    db.add_dish(SPRING_ROLLS, "Spring Rolls", Decimal::new(400, 2), true);
    db.add_dish(SEASONAL_SOUP, "Seasonal Soup", Decimal::new(650, 2), false);
    db.add_employee(7, "Ana Lopez");

    let service = OrderService::new(db.clone(), BillCalculator::default());
    (service, db)
}

fn table(table_number: &str) -> OrderCreate {
    OrderCreate {
        table_number: table_number.to_string(),
        order_type: None,
        served_by: Some(7),
    }
}

fn line(dish_id: i64, quantity: i32) -> OrderItemCreate {
    OrderItemCreate {
        dish_id,
        quantity,
        special_instructions: None,
    }
}

/// Open an order and add the given (dish, quantity) lines
async fn open_order_with_items(
    service: &OrderService<MemoryDb>,
    lines: &[(i64, i32)],
) -> i64 {
    let order = service.create_order(table("T3")).await.unwrap();
    for &(dish_id, quantity) in lines {
        service
            .add_item(order.order_id, line(dish_id, quantity))
            .await
            .unwrap();
    }
    order.order_id
}
