use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::dto::bike_dto::{BikeResponse, CreateBikeRequest, UpdateBikeRequest};
use crate::models::bike::{Bike, BikeStatus};
use crate::repositories::bike_repository::BikeRepository;
use crate::utils::errors::AppError;

pub struct BikeController {
    bikes: Arc<dyn BikeRepository>,
}

impl BikeController {
    pub fn new(bikes: Arc<dyn BikeRepository>) -> Self {
        Self { bikes }
    }

    pub async fn create(&self, request: CreateBikeRequest) -> Result<BikeResponse, AppError> {
        if request.license_plate.trim().is_empty() {
            return Err(AppError::Validation(
                "La matrícula es requerida".to_string(),
            ));
        }

        if request.brand.trim().is_empty() {
            return Err(AppError::Validation("La marca es requerida".to_string()));
        }

        let now = Utc::now();
        let bike = Bike {
            id: Uuid::new_v4(),
            brand: request.brand,
            model: request.model,
            license_plate: request.license_plate,
            year: request.year,
            price: request.price,
            condition: request.condition,
            status: request.status.unwrap_or(BikeStatus::Available),
            images: request.images.unwrap_or_default(),
            in_date: request.in_date,
            out_date: request.out_date,
            notes: request.notes,
            closed: false,
            created_at: now,
            updated_at: now,
        };

        let saved = self.bikes.create(&bike).await?;
        Ok(saved.into())
    }

    pub async fn list(&self) -> Result<Vec<BikeResponse>, AppError> {
        let bikes = self.bikes.find_all().await?;
        Ok(bikes.into_iter().map(BikeResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BikeResponse, AppError> {
        let bike = self
            .bikes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Moto no encontrada".to_string()))?;

        Ok(bike.into())
    }

    /// Actualización parcial: los campos ausentes conservan su valor actual
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateBikeRequest,
    ) -> Result<BikeResponse, AppError> {
        let current = self
            .bikes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Moto no encontrada".to_string()))?;

        let bike = Bike {
            id: current.id,
            brand: request.brand.unwrap_or(current.brand),
            model: request.model.unwrap_or(current.model),
            license_plate: request.license_plate.unwrap_or(current.license_plate),
            year: request.year.unwrap_or(current.year),
            price: request.price.unwrap_or(current.price),
            condition: request.condition.unwrap_or(current.condition),
            status: request.status.unwrap_or(current.status),
            images: request.images.unwrap_or(current.images),
            in_date: request.in_date.or(current.in_date),
            out_date: request.out_date.or(current.out_date),
            notes: request.notes.or(current.notes),
            closed: request.closed.unwrap_or(current.closed),
            created_at: current.created_at,
            updated_at: Utc::now(),
        };

        let saved = self.bikes.update(&bike).await?;
        Ok(saved.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.bikes.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Moto no encontrada".to_string()));
        }
        Ok(())
    }
}
