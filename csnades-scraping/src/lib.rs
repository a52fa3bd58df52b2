pub mod api;
pub mod csnades;
