//! Dobles en memoria de los repositorios, solo para tests.
//!
//! Implementan el mismo contrato que las versiones PostgreSQL sobre un
//! Vec protegido por RwLock, incluyendo la semántica case-insensitive de
//! la comparación de nombres de marca.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::bike::Bike;
use crate::models::brand::Brand;
use crate::models::user::User;
use crate::repositories::bike_repository::{BikeRepository, BrandAggregate};
use crate::repositories::brand_repository::BrandRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

#[derive(Default)]
pub struct InMemoryBrandRepository {
    rows: RwLock<Vec<Brand>>,
}

#[async_trait]
impl BrandRepository for InMemoryBrandRepository {
    async fn create(&self, brand: &Brand) -> Result<Brand, AppError> {
        let mut rows = self.rows.write().await;
        rows.push(brand.clone());
        Ok(brand.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Brand>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|b| b.id == id).cloned())
    }

    async fn find_all_sorted(&self) -> Result<Vec<Brand>, AppError> {
        let mut result: Vec<Brand> = self.rows.read().await.clone();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn find_name_collision(
        &self,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<Option<Brand>, AppError> {
        let needle = name.to_lowercase();
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|b| b.name.to_lowercase() == needle && Some(b.id) != exclude_id)
            .cloned())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<Brand, AppError> {
        let mut rows = self.rows.write().await;
        let brand = rows
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::Database("brand row missing".to_string()))?;
        brand.name = name.to_string();
        brand.updated_at = Utc::now();
        Ok(brand.clone())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.rows.read().await.len() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryBikeRepository {
    rows: RwLock<Vec<Bike>>,
}

#[async_trait]
impl BikeRepository for InMemoryBikeRepository {
    async fn create(&self, bike: &Bike) -> Result<Bike, AppError> {
        let mut rows = self.rows.write().await;
        rows.push(bike.clone());
        Ok(bike.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bike>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|b| b.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Bike>, AppError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_brand(&self, brand: &str) -> Result<Vec<Bike>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|b| b.brand == brand).cloned().collect())
    }

    async fn update(&self, bike: &Bike) -> Result<Bike, AppError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|b| b.id == bike.id)
            .ok_or_else(|| AppError::Database("bike row missing".to_string()))?;
        *row = bike.clone();
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|b| b.id != id);
        Ok(rows.len() < before)
    }

    async fn reassign_brand(&self, old_brand: &str, new_brand: &str) -> Result<u64, AppError> {
        let mut rows = self.rows.write().await;
        let mut updated = 0u64;
        for bike in rows.iter_mut().filter(|b| b.brand == old_brand) {
            bike.brand = new_brand.to_string();
            bike.updated_at = Utc::now();
            updated += 1;
        }
        Ok(updated)
    }

    async fn stats_by_brand(&self) -> Result<Vec<BrandAggregate>, AppError> {
        use std::collections::HashMap;

        let rows = self.rows.read().await;
        let mut groups: HashMap<String, (i64, Decimal)> = HashMap::new();
        for bike in rows.iter() {
            let entry = groups.entry(bike.brand.clone()).or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 += bike.price;
        }

        Ok(groups
            .into_iter()
            .map(|(brand, (total_quantity, total_amount))| BrandAggregate {
                brand,
                total_quantity,
                total_amount,
            })
            .collect())
    }

    async fn stats_for_brand(&self, brand: &str) -> Result<(i64, Decimal), AppError> {
        let rows = self.rows.read().await;
        let matching: Vec<&Bike> = rows.iter().filter(|b| b.brand == brand).collect();
        let total_amount = matching.iter().map(|b| b.price).sum::<Decimal>();
        Ok((matching.len() as i64, total_amount))
    }

    async fn stats_all(&self) -> Result<(i64, Decimal), AppError> {
        let rows = self.rows.read().await;
        let total_amount = rows.iter().map(|b| b.price).sum::<Decimal>();
        Ok((rows.len() as i64, total_amount))
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        let mut rows = self.rows.write().await;
        rows.push(user.clone());
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|u| u.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().any(|u| u.email == email))
    }
}
