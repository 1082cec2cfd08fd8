//! Modelo de Brand
//!
//! Una marca es la entidad de agrupación de las motos del inventario.
//! La relación con las motos se mantiene por igualdad de strings sobre
//! `bikes.brand`, no por clave foránea.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Brand - mapea exactamente a la tabla brands
#[derive(Debug, Clone, FromRow)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Brand {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: now,
            updated_at: now,
        }
    }
}
