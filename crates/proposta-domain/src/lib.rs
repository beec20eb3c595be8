//! Domain module containing pricing catalogs and business services

pub mod model;
pub mod service;

pub use model::*;
