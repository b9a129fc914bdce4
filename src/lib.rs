pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::Settings;

pub use adapters::memory::InMemoryCatalog;
pub use adapters::unwired::{UnwiredRecommendations, UnwiredReservations};
pub use crate::core::{catalog::CatalogService, wiring::AppContext};
pub use domain::connection::{ConnectionGate, ConnectionState};
pub use domain::model::{Category, IntegrationConfig, Product, Reservation};
pub use domain::ports::{CatalogPort, RecommendationPort, ReservationPort};
pub use utils::error::{CartaError, ErrorKind, Result};
