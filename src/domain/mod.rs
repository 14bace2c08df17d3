pub mod market;
pub mod models;
