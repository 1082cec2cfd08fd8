pub mod auth_routes;
pub mod bike_routes;
pub mod brand_routes;
