use crate::domain::model::{Category, Product};
use crate::domain::ports::CatalogPort;
use crate::utils::error::{CartaError, Result};
use crate::utils::validation::validate_non_empty_string;
use async_trait::async_trait;
use std::path::Path;

/// Memory-resident catalog adapter. Products keep their insertion order and
/// every query returns them in that order.
#[derive(Debug)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Loads the catalog from a JSON array of products. Read failures and
    /// malformed entries surface as Infrastructure: the data source could
    /// not be fetched, which is different from an empty catalog.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CartaError::infrastructure(format!("Cannot read catalog file {}: {}", path.display(), e))
        })?;
        let products: Vec<Product> = serde_json::from_str(&raw).map_err(|e| {
            CartaError::infrastructure(format!(
                "Catalog file {} is not a valid product list: {}",
                path.display(),
                e
            ))
        })?;
        tracing::debug!("Loaded {} products from {}", products.len(), path.display());
        Ok(Self::new(products))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn matches_query(product: &Product, needle: &str) -> bool {
    if product.name.to_lowercase().contains(needle) {
        return true;
    }
    if let Some(description) = &product.description {
        if description.to_lowercase().contains(needle) {
            return true;
        }
    }
    product
        .ingredients
        .iter()
        .any(|i| i.to_lowercase().contains(needle))
}

#[async_trait]
impl CatalogPort for InMemoryCatalog {
    async fn product_by_id(&self, id: &str) -> Result<Option<Product>> {
        validate_non_empty_string("id", id)?;
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn products_by_category(&self, category: Category) -> Result<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    /// Policy for empty or whitespace-only queries: empty result. Callers
    /// that want the full catalog enumerate the categories instead.
    async fn search_products(&self, query: &str) -> Result<Vec<Product>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .products
            .iter()
            .filter(|p| matches_query(p, &needle))
            .cloned()
            .collect())
    }
}
