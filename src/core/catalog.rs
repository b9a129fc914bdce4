use crate::domain::model::{Category, Product};
use crate::domain::ports::CatalogPort;
use crate::utils::error::Result;
use std::sync::Arc;

/// Domain-facing catalog queries over whatever adapter is wired in. String
/// categories from the outside world are parsed here, so adapters only ever
/// see the closed enum.
pub struct CatalogService {
    catalog: Arc<dyn CatalogPort>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn lookup(&self, id: &str) -> Result<Option<Product>> {
        tracing::debug!("Catalog lookup: {}", id);
        self.catalog.product_by_id(id).await
    }

    pub async fn browse(&self, category: &str) -> Result<Vec<Product>> {
        let category: Category = category.parse()?;
        self.browse_category(category).await
    }

    pub async fn browse_category(&self, category: Category) -> Result<Vec<Product>> {
        tracing::debug!("Catalog browse: {}", category);
        self.catalog.products_by_category(category).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Product>> {
        tracing::debug!("Catalog search: {:?}", query);
        self.catalog.search_products(query).await
    }
}
