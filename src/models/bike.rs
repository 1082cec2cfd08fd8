//! Modelo de Bike
//!
//! Este módulo contiene el struct Bike (una unidad física en venta) y los
//! enums de condición y estado. El campo `brand` es una etiqueta
//! denormalizada: el coordinador de renombrado es responsable de mantenerla
//! consistente con la tabla brands.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Condición física de la moto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "bike_condition")]
pub enum BikeCondition {
    Great,
    Good,
    Average,
}

/// Estado comercial de la moto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "bike_status")]
pub enum BikeStatus {
    Available,
    Sold,
}

/// Bike - mapea exactamente a la tabla bikes
#[derive(Debug, Clone, FromRow)]
pub struct Bike {
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
    // Solo tiene sentido cuando status = Sold
    pub out_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub closed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
