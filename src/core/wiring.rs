use crate::domain::model::IntegrationConfig;
use crate::domain::ports::{CatalogPort, RecommendationPort, ReservationPort};
use crate::utils::error::{CartaError, ErrorKind, Result};
use std::sync::Arc;

/// Identifier the catalog probe looks up. Reserved: a real catalog must not
/// contain it, and the probe accepts absence as a healthy answer.
const WIRING_PROBE_ID: &str = "__wiring_probe__";

/// The composition root's view of the application: one object per port.
/// Integrations default to the unwired placeholders; `verify_wiring` is the
/// startup check that no placeholder sits behind an enabled seam.
pub struct AppContext {
    pub catalog: Arc<dyn CatalogPort>,
    pub recommendations: Arc<dyn RecommendationPort>,
    pub reservations: Arc<dyn ReservationPort>,
}

impl AppContext {
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        recommendations: Arc<dyn RecommendationPort>,
        reservations: Arc<dyn ReservationPort>,
    ) -> Self {
        Self {
            catalog,
            recommendations,
            reservations,
        }
    }

    /// Verifies every enabled port is backed by a real adapter before any
    /// traffic is served. A NotImplemented answer anywhere here is a wiring
    /// defect and comes back as a fatal Config error. Integrations are
    /// probed through `connect`, which their contract requires to be
    /// idempotent.
    pub async fn verify_wiring(
        &self,
        recommendation: Option<&IntegrationConfig>,
        reservation: Option<&IntegrationConfig>,
    ) -> Result<()> {
        match self.catalog.product_by_id(WIRING_PROBE_ID).await {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotImplemented => {
                return Err(CartaError::config(
                    "Catalog port is not backed by a real adapter",
                ));
            }
            Err(e) => return Err(e),
        }
        tracing::info!("Catalog port verified");

        if let Some(config) = recommendation {
            match self.recommendations.connect(config.clone()).await {
                Ok(()) => {
                    tracing::info!("Recommendation provider connected: {}", config.provider)
                }
                Err(e) if e.kind() == ErrorKind::NotImplemented => {
                    return Err(CartaError::config(
                        "Recommendation integration is enabled but no adapter is wired in",
                    ));
                }
                Err(e) => return Err(e),
            }
        } else {
            tracing::info!("Recommendation integration disabled; placeholder in place");
        }

        if let Some(config) = reservation {
            match self.reservations.connect(config.clone()).await {
                Ok(()) => tracing::info!("Reservation provider connected: {}", config.provider),
                Err(e) if e.kind() == ErrorKind::NotImplemented => {
                    return Err(CartaError::config(
                        "Reservation integration is enabled but no adapter is wired in",
                    ));
                }
                Err(e) => return Err(e),
            }
        } else {
            tracing::info!("Reservation integration disabled; placeholder in place");
        }

        Ok(())
    }
}
