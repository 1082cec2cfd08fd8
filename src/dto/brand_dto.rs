use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::brand::Brand;

// Request para crear o renombrar una marca
#[derive(Debug, Deserialize)]
pub struct BrandNameRequest {
    pub name: String,
}

// Response de marca
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Brand> for BrandResponse {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id,
            name: brand.name,
            created_at: brand.created_at,
            updated_at: brand.updated_at,
        }
    }
}

// Response de marca con sus estadísticas agregadas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandWithStatsResponse {
    pub id: Uuid,
    pub name: String,
    pub total_quantity: i64,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Response del resumen global del inventario
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub total_brands: i64,
    pub total_quantity: i64,
    pub total_amount: Decimal,
}

// Response de estadísticas de una marca consultada por nombre.
// `brand_name` es el nombre literal consultado, exista o no la marca.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandStatsResponse {
    pub brand_name: String,
    pub total_quantity: i64,
    pub total_amount: Decimal,
}

// Response de un renombrado exitoso
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameBrandResponse {
    pub brand: BrandResponse,
    pub bikes_updated: u64,
}
