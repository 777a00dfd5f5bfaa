pub mod configuration;
pub mod dialog;
pub mod domain;
pub mod navigation;
pub mod routes;
pub mod startup;
pub mod store;
pub mod telemetry;
mod utils;
