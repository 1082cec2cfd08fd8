pub mod auth_controller;
pub mod bike_controller;
pub mod brand_controller;
