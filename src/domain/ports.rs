//! Port traits: the seams between the domain and whatever concrete
//! technology ends up behind them. Adapters must implement every method of
//! the port they claim; the composition root checks that before serving.

use crate::domain::connection::ConnectionState;
use crate::domain::model::{
    Category, IntegrationConfig, Product, Reservation, ReservationRequest, TimeSlot,
    UserPreferences,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read-only query surface a catalog data source must expose.
///
/// The contract is one parameterized query per category plus lookup and
/// search. The per-category accessors are convenience wrappers over
/// `products_by_category` and must stay consistent with it; adapters get
/// that for free by leaving the default bodies alone.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Look up a product by its identifier. `Ok(None)` for a well-formed id
    /// with no match; InvalidArgument for an empty id. Never an error for
    /// plain absence.
    async fn product_by_id(&self, id: &str) -> Result<Option<Product>>;

    /// All products in one category, in the data source's stable order.
    /// Empty when the category has no items. A data source that cannot be
    /// reached is an Infrastructure error, not an empty result.
    async fn products_by_category(&self, category: Category) -> Result<Vec<Product>>;

    /// Free-text search over names, descriptions and ingredients.
    /// Case-insensitive substring matching is the minimum bar; no match is
    /// an empty result, not a failure. The adapter documents what an empty
    /// or whitespace-only query returns.
    async fn search_products(&self, query: &str) -> Result<Vec<Product>>;

    async fn cocktails(&self) -> Result<Vec<Product>> {
        self.products_by_category(Category::Cocktail).await
    }

    async fn beverages(&self) -> Result<Vec<Product>> {
        self.products_by_category(Category::Beverage).await
    }

    async fn liquors(&self) -> Result<Vec<Product>> {
        self.products_by_category(Category::Liquor).await
    }

    async fn beers(&self) -> Result<Vec<Product>> {
        self.products_by_category(Category::Beer).await
    }

    async fn pizzas(&self) -> Result<Vec<Product>> {
        self.products_by_category(Category::Pizza).await
    }

    async fn wings(&self) -> Result<Vec<Product>> {
        self.products_by_category(Category::Wings).await
    }

    async fn soups(&self) -> Result<Vec<Product>> {
        self.products_by_category(Category::Soup).await
    }

    async fn salads(&self) -> Result<Vec<Product>> {
        self.products_by_category(Category::Salad).await
    }

    async fn meats(&self) -> Result<Vec<Product>> {
        self.products_by_category(Category::Meat).await
    }

    async fn coffee(&self) -> Result<Vec<Product>> {
        self.products_by_category(Category::Coffee).await
    }

    async fn desserts(&self) -> Result<Vec<Product>> {
        self.products_by_category(Category::Dessert).await
    }
}

/// Seam for a future recommendation/analysis provider.
///
/// Operational calls require a successful `connect` first and fail with
/// NotConnected otherwise. Result payloads beyond recommendations are
/// provider-defined, so they stay `serde_json::Value`.
#[async_trait]
pub trait RecommendationPort: Send + Sync {
    /// Establish a provider session. Idempotent when already connected.
    async fn connect(&self, config: IntegrationConfig) -> Result<()>;

    /// Current lifecycle state; read-only to consumers.
    fn connection(&self) -> ConnectionState;

    /// Recommended products in provider ranking order. Callers must not
    /// re-sort.
    async fn generate_recommendations(
        &self,
        preferences: &UserPreferences,
    ) -> Result<Vec<Product>>;

    async fn analyze_behavior(&self, behavior: serde_json::Value) -> Result<serde_json::Value>;

    async fn generate_content(&self, product: &Product) -> Result<serde_json::Value>;

    async fn process_natural_language(&self, query: &str) -> Result<serde_json::Value>;
}

/// Seam for a future reservation-management provider. Same connection
/// lifecycle as [`RecommendationPort`].
#[async_trait]
pub trait ReservationPort: Send + Sync {
    /// Establish a provider session. Idempotent when already connected.
    async fn connect(&self, config: IntegrationConfig) -> Result<()>;

    /// Current lifecycle state; read-only to consumers.
    fn connection(&self) -> ConnectionState;

    /// Create a reservation; the provider assigns a fresh identifier.
    async fn create_reservation(&self, request: ReservationRequest) -> Result<Reservation>;

    /// `Ok(None)` when the id is unknown.
    async fn reservation_by_id(&self, id: &str) -> Result<Option<Reservation>>;

    /// Replace the mutable fields of an existing reservation. NotFound when
    /// the id is unknown.
    async fn update_reservation(
        &self,
        id: &str,
        request: ReservationRequest,
    ) -> Result<Reservation>;

    /// Cancel a reservation. Idempotent: cancelling an already-cancelled
    /// reservation succeeds.
    async fn cancel_reservation(&self, id: &str) -> Result<()>;

    /// Slots on `date` with capacity for `party_size`, in chronological
    /// order. Empty when nothing fits; that is not a failure.
    async fn available_slots(&self, date: NaiveDate, party_size: u32) -> Result<Vec<TimeSlot>>;
}
