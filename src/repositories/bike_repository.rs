use crate::models::bike::Bike;
use crate::utils::errors::AppError;
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Totales agregados de un grupo de motos que comparten marca
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BrandAggregate {
    pub brand: String,
    pub total_quantity: i64,
    pub total_amount: Decimal,
}

// Acceso a la colección de motos, incluyendo la primitiva de agregación
// por marca y la reasignación masiva que usa el renombrado.
#[async_trait]
pub trait BikeRepository: Send + Sync {
    async fn create(&self, bike: &Bike) -> Result<Bike, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bike>, AppError>;

    async fn find_all(&self) -> Result<Vec<Bike>, AppError>;

    /// Motos cuya etiqueta de marca coincide exactamente con `brand`
    async fn find_by_brand(&self, brand: &str) -> Result<Vec<Bike>, AppError>;

    async fn update(&self, bike: &Bike) -> Result<Bike, AppError>;

    /// Devuelve `false` si el id no existía
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Reasigna en una sola operación todas las motos de `old_brand` a
    /// `new_brand` y devuelve cuántas se modificaron.
    async fn reassign_brand(&self, old_brand: &str, new_brand: &str) -> Result<u64, AppError>;

    /// Agrupación por marca en una sola pasada: count y sum(price) por
    /// etiqueta. Las marcas sin motos no aparecen en el resultado.
    async fn stats_by_brand(&self) -> Result<Vec<BrandAggregate>, AppError>;

    /// Count y sum(price) de las motos con etiqueta exactamente `brand`;
    /// (0, 0) si no hay ninguna.
    async fn stats_for_brand(&self, brand: &str) -> Result<(i64, Decimal), AppError>;

    /// Count y sum(price) global sobre todas las motos
    async fn stats_all(&self) -> Result<(i64, Decimal), AppError>;
}

pub struct PgBikeRepository {
    pool: PgPool,
}

impl PgBikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BikeRepository for PgBikeRepository {
    async fn create(&self, bike: &Bike) -> Result<Bike, AppError> {
        let result = sqlx::query_as::<_, Bike>(
            r#"
            INSERT INTO bikes (
                id, brand, model, license_plate, year, price, condition, status,
                images, in_date, out_date, notes, closed, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(bike.id)
        .bind(&bike.brand)
        .bind(&bike.model)
        .bind(&bike.license_plate)
        .bind(bike.year)
        .bind(bike.price)
        .bind(bike.condition)
        .bind(bike.status)
        .bind(&bike.images)
        .bind(bike.in_date)
        .bind(bike.out_date)
        .bind(&bike.notes)
        .bind(bike.closed)
        .bind(bike.created_at)
        .bind(bike.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating bike: {}", e)))?;

        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bike>, AppError> {
        let result = sqlx::query_as::<_, Bike>("SELECT * FROM bikes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding bike: {}", e)))?;

        Ok(result)
    }

    async fn find_all(&self) -> Result<Vec<Bike>, AppError> {
        let result = sqlx::query_as::<_, Bike>("SELECT * FROM bikes ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing bikes: {}", e)))?;

        Ok(result)
    }

    async fn find_by_brand(&self, brand: &str) -> Result<Vec<Bike>, AppError> {
        let result = sqlx::query_as::<_, Bike>(
            "SELECT * FROM bikes WHERE brand = $1 ORDER BY created_at DESC",
        )
        .bind(brand)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing bikes by brand: {}", e)))?;

        Ok(result)
    }

    async fn update(&self, bike: &Bike) -> Result<Bike, AppError> {
        let result = sqlx::query_as::<_, Bike>(
            r#"
            UPDATE bikes
            SET brand = $2, model = $3, license_plate = $4, year = $5, price = $6,
                condition = $7, status = $8, images = $9, in_date = $10,
                out_date = $11, notes = $12, closed = $13, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(bike.id)
        .bind(&bike.brand)
        .bind(&bike.model)
        .bind(&bike.license_plate)
        .bind(bike.year)
        .bind(bike.price)
        .bind(bike.condition)
        .bind(bike.status)
        .bind(&bike.images)
        .bind(bike.in_date)
        .bind(bike.out_date)
        .bind(&bike.notes)
        .bind(bike.closed)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating bike: {}", e)))?;

        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM bikes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error deleting bike: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn reassign_brand(&self, old_brand: &str, new_brand: &str) -> Result<u64, AppError> {
        // Un solo UPDATE masivo, no un bucle registro a registro
        let result = sqlx::query(
            "UPDATE bikes SET brand = $2, updated_at = NOW() WHERE brand = $1",
        )
        .bind(old_brand)
        .bind(new_brand)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error reassigning bikes: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn stats_by_brand(&self) -> Result<Vec<BrandAggregate>, AppError> {
        let result = sqlx::query_as::<_, BrandAggregate>(
            r#"
            SELECT brand,
                   COUNT(*) AS total_quantity,
                   COALESCE(SUM(price), 0) AS total_amount
            FROM bikes
            GROUP BY brand
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error aggregating bikes: {}", e)))?;

        Ok(result)
    }

    async fn stats_for_brand(&self, brand: &str) -> Result<(i64, Decimal), AppError> {
        let result: (i64, Decimal) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(price), 0) FROM bikes WHERE brand = $1",
        )
        .bind(brand)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error aggregating bikes by brand: {}", e)))?;

        Ok(result)
    }

    async fn stats_all(&self) -> Result<(i64, Decimal), AppError> {
        let result: (i64, Decimal) =
            sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(price), 0) FROM bikes")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error aggregating bikes: {}", e)))?;

        Ok(result)
    }
}
