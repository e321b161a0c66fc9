pub mod atmosphere;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod models;
pub mod physics;
pub mod units;
