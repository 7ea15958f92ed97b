use shared::models::RawMaterial;
use sqlx::PgPool;

pub async fn list_all(pool: &PgPool) -> Result<Vec<RawMaterial>, sqlx::Error> {
    sqlx::query_as::<_, RawMaterial>(
        "SELECT raw_material_id, name, unit_of_measurement, current_stock,
            alert_threshold, cost_per_unit, supplier
         FROM raw_materials
         ORDER BY name",
    )
    .fetch_all(pool)
    .await
}
