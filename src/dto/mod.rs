pub mod auth_dto;
pub mod bike_dto;
pub mod brand_dto;
