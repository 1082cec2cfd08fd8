use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::bike_dto::BikeResponse;
use crate::dto::brand_dto::{
    BrandNameRequest, BrandResponse, BrandStatsResponse, BrandWithStatsResponse,
    RenameBrandResponse, SummaryResponse,
};
use crate::models::brand::Brand;
use crate::repositories::bike_repository::BikeRepository;
use crate::repositories::brand_repository::BrandRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::normalize_brand_name;

pub struct BrandController {
    brands: Arc<dyn BrandRepository>,
    bikes: Arc<dyn BikeRepository>,
}

impl BrandController {
    pub fn new(brands: Arc<dyn BrandRepository>, bikes: Arc<dyn BikeRepository>) -> Self {
        Self { brands, bikes }
    }

    /// Todas las marcas con sus totales, ordenadas por nombre ascendente.
    /// Una sola consulta agrupada sobre bikes, fusionada con la lista de
    /// marcas; las marcas sin motos aparecen con totales en cero.
    pub async fn list_with_stats(&self) -> Result<Vec<BrandWithStatsResponse>, AppError> {
        let brands = self.brands.find_all_sorted().await?;
        let aggregates = self.bikes.stats_by_brand().await?;

        let mut totals: HashMap<String, (i64, Decimal)> = aggregates
            .into_iter()
            .map(|a| (a.brand, (a.total_quantity, a.total_amount)))
            .collect();

        let response = brands
            .into_iter()
            .map(|brand| {
                let (total_quantity, total_amount) =
                    totals.remove(&brand.name).unwrap_or((0, Decimal::ZERO));
                BrandWithStatsResponse {
                    id: brand.id,
                    name: brand.name,
                    total_quantity,
                    total_amount,
                    created_at: brand.created_at,
                    updated_at: brand.updated_at,
                }
            })
            .collect();

        Ok(response)
    }

    /// Resumen global: total de marcas más count/sum sobre todas las motos
    pub async fn summary(&self) -> Result<SummaryResponse, AppError> {
        let total_brands = self.brands.count().await?;
        let (total_quantity, total_amount) = self.bikes.stats_all().await?;

        Ok(SummaryResponse {
            total_brands,
            total_quantity,
            total_amount,
        })
    }

    /// Estadísticas del nombre literal consultado. Un nombre que no
    /// corresponde a ninguna marca devuelve totales en cero, no un error.
    pub async fn stats_for(&self, brand_name: &str) -> Result<BrandStatsResponse, AppError> {
        let (total_quantity, total_amount) = self.bikes.stats_for_brand(brand_name).await?;

        Ok(BrandStatsResponse {
            brand_name: brand_name.to_string(),
            total_quantity,
            total_amount,
        })
    }

    /// Motos cuya etiqueta de marca coincide exactamente con el nombre dado
    pub async fn bikes_for(&self, brand_name: &str) -> Result<Vec<BikeResponse>, AppError> {
        let bikes = self.bikes.find_by_brand(brand_name).await?;
        Ok(bikes.into_iter().map(BikeResponse::from).collect())
    }

    /// Alta de marca: recorte, longitud 1..=100 y unicidad case-insensitive
    pub async fn create(&self, request: BrandNameRequest) -> Result<BrandResponse, AppError> {
        let name = normalize_brand_name(&request.name)?;

        if let Some(existing) = self.brands.find_name_collision(&name, None).await? {
            return Err(AppError::Conflict(format!(
                "La marca '{}' ya existe",
                existing.name
            )));
        }

        let brand = self.brands.create(&Brand::new(name)).await?;
        Ok(brand.into())
    }

    /// Renombra una marca y propaga el nuevo nombre a todas las motos que
    /// llevan la etiqueta antigua.
    pub async fn rename(
        &self,
        id: Uuid,
        request: BrandNameRequest,
    ) -> Result<RenameBrandResponse, AppError> {
        let new_name = normalize_brand_name(&request.name)?;

        let current = self
            .brands
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Marca no encontrada".to_string()))?;

        // Solo se comprueba colisión si el nombre cambia más allá de la
        // capitalización; la comparación contra OTRAS marcas también es
        // case-insensitive.
        if new_name.to_lowercase() != current.name.to_lowercase() {
            if let Some(existing) = self.brands.find_name_collision(&new_name, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "La marca '{}' ya existe",
                    existing.name
                )));
            }
        }

        // La reasignación masiva se emite y completa antes de confirmar el
        // nombre de la marca. No hay transacción multi-documento: un fallo
        // entre ambos pasos deja las motos con el nombre nuevo y la marca
        // con el antiguo; un reintento encuentra cero motos con el nombre
        // antiguo y converge.
        let bikes_updated = self.bikes.reassign_brand(&current.name, &new_name).await?;

        let brand = self.brands.update_name(id, &new_name).await?;

        tracing::info!(
            "Marca '{}' renombrada a '{}' ({} motos actualizadas)",
            current.name,
            brand.name,
            bikes_updated
        );

        Ok(RenameBrandResponse {
            brand: brand.into(),
            bikes_updated,
        })
    }
}
