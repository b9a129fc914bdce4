//! Placeholder adapters for the integration ports. Every operation answers
//! NotImplemented until a real provider adapter exists; the composition root
//! treats that answer as fatal when the integration is enabled, so these can
//! never leak into a serving system unnoticed.

use crate::domain::connection::ConnectionState;
use crate::domain::model::{
    IntegrationConfig, Product, Reservation, ReservationRequest, TimeSlot, UserPreferences,
};
use crate::domain::ports::{RecommendationPort, ReservationPort};
use crate::utils::error::{CartaError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;

#[derive(Debug, Default)]
pub struct UnwiredRecommendations;

#[async_trait]
impl RecommendationPort for UnwiredRecommendations {
    async fn connect(&self, config: IntegrationConfig) -> Result<()> {
        tracing::warn!(
            "connect({}) called on unwired recommendation port",
            config.provider
        );
        Err(CartaError::NotImplemented {
            operation: "recommendation.connect",
        })
    }

    fn connection(&self) -> ConnectionState {
        ConnectionState::Disconnected
    }

    async fn generate_recommendations(
        &self,
        _preferences: &UserPreferences,
    ) -> Result<Vec<Product>> {
        Err(CartaError::NotImplemented {
            operation: "recommendation.generate_recommendations",
        })
    }

    async fn analyze_behavior(&self, _behavior: serde_json::Value) -> Result<serde_json::Value> {
        Err(CartaError::NotImplemented {
            operation: "recommendation.analyze_behavior",
        })
    }

    async fn generate_content(&self, _product: &Product) -> Result<serde_json::Value> {
        Err(CartaError::NotImplemented {
            operation: "recommendation.generate_content",
        })
    }

    async fn process_natural_language(&self, _query: &str) -> Result<serde_json::Value> {
        Err(CartaError::NotImplemented {
            operation: "recommendation.process_natural_language",
        })
    }
}

#[derive(Debug, Default)]
pub struct UnwiredReservations;

#[async_trait]
impl ReservationPort for UnwiredReservations {
    async fn connect(&self, config: IntegrationConfig) -> Result<()> {
        tracing::warn!(
            "connect({}) called on unwired reservation port",
            config.provider
        );
        Err(CartaError::NotImplemented {
            operation: "reservation.connect",
        })
    }

    fn connection(&self) -> ConnectionState {
        ConnectionState::Disconnected
    }

    async fn create_reservation(&self, _request: ReservationRequest) -> Result<Reservation> {
        Err(CartaError::NotImplemented {
            operation: "reservation.create_reservation",
        })
    }

    async fn reservation_by_id(&self, _id: &str) -> Result<Option<Reservation>> {
        Err(CartaError::NotImplemented {
            operation: "reservation.reservation_by_id",
        })
    }

    async fn update_reservation(
        &self,
        _id: &str,
        _request: ReservationRequest,
    ) -> Result<Reservation> {
        Err(CartaError::NotImplemented {
            operation: "reservation.update_reservation",
        })
    }

    async fn cancel_reservation(&self, _id: &str) -> Result<()> {
        Err(CartaError::NotImplemented {
            operation: "reservation.cancel_reservation",
        })
    }

    async fn available_slots(&self, _date: NaiveDate, _party_size: u32) -> Result<Vec<TimeSlot>> {
        Err(CartaError::NotImplemented {
            operation: "reservation.available_slots",
        })
    }
}
