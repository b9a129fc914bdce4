//! Startup wiring verification: a placeholder adapter behind an enabled
//! seam must fail fast, before any traffic.

use async_trait::async_trait;
use carta::domain::connection::ConnectionGate;
use carta::domain::model::{
    IntegrationConfig, Product, Reservation, ReservationRequest, TimeSlot, UserPreferences,
};
use carta::{
    AppContext, ConnectionState, ErrorKind, InMemoryCatalog, RecommendationPort, ReservationPort,
    Result, UnwiredRecommendations, UnwiredReservations,
};
use chrono::NaiveDate;
use std::sync::Arc;

fn empty_catalog() -> Arc<InMemoryCatalog> {
    Arc::new(InMemoryCatalog::new(vec![]))
}

#[tokio::test]
async fn placeholders_pass_when_no_integration_is_enabled() {
    let context = AppContext::new(
        empty_catalog(),
        Arc::new(UnwiredRecommendations),
        Arc::new(UnwiredReservations),
    );
    context.verify_wiring(None, None).await.unwrap();
}

#[tokio::test]
async fn enabled_integration_with_placeholder_adapter_is_fatal() {
    let context = AppContext::new(
        empty_catalog(),
        Arc::new(UnwiredRecommendations),
        Arc::new(UnwiredReservations),
    );

    let config = IntegrationConfig::new("menu-ai");
    let err = context
        .verify_wiring(Some(&config), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);

    let config = IntegrationConfig::new("opentable");
    let err = context
        .verify_wiring(None, Some(&config))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

// A minimal real pair of providers: connect succeeds and flips the gate.
struct StubRecommendations {
    gate: ConnectionGate,
}

#[async_trait]
impl RecommendationPort for StubRecommendations {
    async fn connect(&self, config: IntegrationConfig) -> Result<()> {
        self.gate.mark_connected(config.provider);
        Ok(())
    }

    fn connection(&self) -> ConnectionState {
        self.gate.state()
    }

    async fn generate_recommendations(
        &self,
        _preferences: &UserPreferences,
    ) -> Result<Vec<Product>> {
        self.gate.require_connected("recommendation")?;
        Ok(vec![])
    }

    async fn analyze_behavior(&self, _behavior: serde_json::Value) -> Result<serde_json::Value> {
        self.gate.require_connected("recommendation")?;
        Ok(serde_json::Value::Null)
    }

    async fn generate_content(&self, _product: &Product) -> Result<serde_json::Value> {
        self.gate.require_connected("recommendation")?;
        Ok(serde_json::Value::Null)
    }

    async fn process_natural_language(&self, _query: &str) -> Result<serde_json::Value> {
        self.gate.require_connected("recommendation")?;
        Ok(serde_json::Value::Null)
    }
}

struct StubReservations {
    gate: ConnectionGate,
}

#[async_trait]
impl ReservationPort for StubReservations {
    async fn connect(&self, config: IntegrationConfig) -> Result<()> {
        self.gate.mark_connected(config.provider);
        Ok(())
    }

    fn connection(&self) -> ConnectionState {
        self.gate.state()
    }

    async fn create_reservation(&self, _request: ReservationRequest) -> Result<Reservation> {
        unimplemented!("not exercised by wiring verification")
    }

    async fn reservation_by_id(&self, _id: &str) -> Result<Option<Reservation>> {
        self.gate.require_connected("reservation")?;
        Ok(None)
    }

    async fn update_reservation(
        &self,
        _id: &str,
        _request: ReservationRequest,
    ) -> Result<Reservation> {
        unimplemented!("not exercised by wiring verification")
    }

    async fn cancel_reservation(&self, _id: &str) -> Result<()> {
        self.gate.require_connected("reservation")?;
        Ok(())
    }

    async fn available_slots(&self, _date: NaiveDate, _party_size: u32) -> Result<Vec<TimeSlot>> {
        self.gate.require_connected("reservation")?;
        Ok(vec![])
    }
}

#[tokio::test]
async fn enabled_integrations_connect_during_verification() {
    let recommendations = Arc::new(StubRecommendations {
        gate: ConnectionGate::new(),
    });
    let reservations = Arc::new(StubReservations {
        gate: ConnectionGate::new(),
    });
    let context = AppContext::new(
        empty_catalog(),
        Arc::clone(&recommendations) as Arc<dyn RecommendationPort>,
        Arc::clone(&reservations) as Arc<dyn ReservationPort>,
    );

    let rec_config = IntegrationConfig::new("menu-ai");
    let res_config = IntegrationConfig::new("opentable");
    context
        .verify_wiring(Some(&rec_config), Some(&res_config))
        .await
        .unwrap();

    assert_eq!(recommendations.connection().provider(), Some("menu-ai"));
    assert_eq!(reservations.connection().provider(), Some("opentable"));
}
