//! Dish catalog queries

use shared::models::{Dish, DishCreate};
use sqlx::PgPool;

const COLUMNS: &str = "dish_id, name, description, category, sale_price, is_available, prep_time";

/// Dishes open for ordering, grouped by category then name
pub async fn list_available(pool: &PgPool) -> Result<Vec<Dish>, sqlx::Error> {
    let sql = format!("SELECT {COLUMNS} FROM dishes WHERE is_available ORDER BY category, name");
    sqlx::query_as::<_, Dish>(&sql).fetch_all(pool).await
}

pub async fn find_by_id(pool: &PgPool, dish_id: i64) -> Result<Option<Dish>, sqlx::Error> {
    let sql = format!("SELECT {COLUMNS} FROM dishes WHERE dish_id = $1");
    sqlx::query_as::<_, Dish>(&sql)
        .bind(dish_id)
        .fetch_optional(pool)
        .await
}

/// Insert a validated dish; availability defaults to true
pub async fn create(pool: &PgPool, dish: &DishCreate) -> Result<Dish, sqlx::Error> {
    let sql = format!(
        "INSERT INTO dishes (name, description, category, sale_price, is_available, prep_time)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, Dish>(&sql)
        .bind(dish.name.trim())
        .bind(&dish.description)
        .bind(&dish.category)
        .bind(dish.sale_price)
        .bind(dish.is_available.unwrap_or(true))
        .bind(dish.prep_time)
        .fetch_one(pool)
        .await
}
