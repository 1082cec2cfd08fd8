use crate::models::brand::Brand;
use crate::utils::errors::AppError;
use crate::utils::validation::escape_like_pattern;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

// Acceso a la colección de marcas. El trait permite inyectar un doble
// en memoria en los tests en lugar del store real.
#[async_trait]
pub trait BrandRepository: Send + Sync {
    async fn create(&self, brand: &Brand) -> Result<Brand, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Brand>, AppError>;

    /// Todas las marcas ordenadas por nombre ascendente
    async fn find_all_sorted(&self) -> Result<Vec<Brand>, AppError>;

    /// Busca una marca cuyo nombre coincida case-insensitive con `name`,
    /// excluyendo opcionalmente una marca por id (la propia, en un rename).
    /// El valor se compara de forma literal: los metacaracteres del patrón
    /// se escapan antes de consultar.
    async fn find_name_collision(
        &self,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<Option<Brand>, AppError>;

    async fn update_name(&self, id: Uuid, name: &str) -> Result<Brand, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}

pub struct PgBrandRepository {
    pool: PgPool,
}

impl PgBrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BrandRepository for PgBrandRepository {
    async fn create(&self, brand: &Brand) -> Result<Brand, AppError> {
        let result = sqlx::query_as::<_, Brand>(
            r#"
            INSERT INTO brands (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(brand.id)
        .bind(&brand.name)
        .bind(brand.created_at)
        .bind(brand.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating brand: {}", e)))?;

        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Brand>, AppError> {
        let result = sqlx::query_as::<_, Brand>("SELECT * FROM brands WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding brand: {}", e)))?;

        Ok(result)
    }

    async fn find_all_sorted(&self) -> Result<Vec<Brand>, AppError> {
        let result = sqlx::query_as::<_, Brand>("SELECT * FROM brands ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing brands: {}", e)))?;

        Ok(result)
    }

    async fn find_name_collision(
        &self,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<Option<Brand>, AppError> {
        let pattern = escape_like_pattern(name);

        let query = match exclude_id {
            Some(id) => sqlx::query_as::<_, Brand>(
                r#"SELECT * FROM brands WHERE name ILIKE $1 ESCAPE '\' AND id <> $2"#,
            )
            .bind(pattern)
            .bind(id),
            None => sqlx::query_as::<_, Brand>(
                r#"SELECT * FROM brands WHERE name ILIKE $1 ESCAPE '\'"#,
            )
            .bind(pattern),
        };

        let result = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error checking brand name: {}", e)))?;

        Ok(result)
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<Brand, AppError> {
        let result = sqlx::query_as::<_, Brand>(
            r#"
            UPDATE brands
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating brand: {}", e)))?;

        Ok(result)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM brands")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error counting brands: {}", e)))?;

        Ok(result.0)
    }
}
