pub mod bike_repository;
pub mod brand_repository;
pub mod user_repository;

#[cfg(test)]
pub mod memory;
