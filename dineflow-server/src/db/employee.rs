use shared::models::Employee;
use sqlx::PgPool;

/// Active employees by name
pub async fn list_active(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        "SELECT employee_id, first_name, last_name, role, email, phone, hire_date, is_active
         FROM employees
         WHERE is_active
         ORDER BY first_name, last_name",
    )
    .fetch_all(pool)
    .await
}
