use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::bike::{Bike, BikeCondition, BikeStatus};

// Request para dar de alta una moto
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBikeRequest {
    pub brand: String,
    pub model: String,
    pub license_plate: String,
    pub year: i32,
    pub price: Decimal,
    pub condition: BikeCondition,
    pub status: Option<BikeStatus>,
    pub images: Option<Vec<String>>,
    pub in_date: Option<DateTime<Utc>>,
    pub out_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

// Request para actualizar una moto (actualización parcial)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBikeRequest {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub license_plate: Option<String>,
    pub year: Option<i32>,
    pub price: Option<Decimal>,
    pub condition: Option<BikeCondition>,
    pub status: Option<BikeStatus>,
    pub images: Option<Vec<String>>,
    pub in_date: Option<DateTime<Utc>>,
    pub out_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub closed: Option<bool>,
}

// Response de moto
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BikeResponse {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub license_plate: String,
    pub year: i32,
    pub price: Decimal,
    pub condition: BikeCondition,
    pub status: BikeStatus,
    pub images: Vec<String>,
    pub in_date: Option<DateTime<Utc>>,
    pub out_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub closed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Bike> for BikeResponse {
    fn from(bike: Bike) -> Self {
        Self {
            id: bike.id,
            brand: bike.brand,
            model: bike.model,
            license_plate: bike.license_plate,
            year: bike.year,
            price: bike.price,
            condition: bike.condition,
            status: bike.status,
            images: bike.images,
            in_date: bike.in_date,
            out_date: bike.out_date,
            notes: bike.notes,
            closed: bike.closed,
            created_at: bike.created_at,
            updated_at: bike.updated_at,
        }
    }
}
