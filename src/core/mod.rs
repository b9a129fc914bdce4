pub mod catalog;
pub mod wiring;

pub use crate::domain::model::{Category, IntegrationConfig, Product};
pub use crate::domain::ports::{CatalogPort, RecommendationPort, ReservationPort};
pub use crate::utils::error::Result;
