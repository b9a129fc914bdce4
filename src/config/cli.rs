use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "carta")]
#[command(about = "Query a restaurant catalog through its port layer")]
pub struct CliConfig {
    #[arg(long, default_value = "./catalog.json")]
    pub catalog_path: String,

    #[arg(long, help = "TOML settings file with catalog and integration sections")]
    pub settings: Option<String>,

    #[arg(long, help = "Look up one product by id")]
    pub id: Option<String>,

    #[arg(long, help = "List products in one category")]
    pub category: Option<String>,

    #[arg(long, help = "Free-text search over the catalog")]
    pub search: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("catalog_path", &self.catalog_path)?;
        if let Some(settings) = &self.settings {
            validate_path("settings", settings)?;
        }
        if let Some(id) = &self.id {
            validate_non_empty_string("id", id)?;
        }
        if let Some(category) = &self.category {
            validate_non_empty_string("category", category)?;
        }
        Ok(())
    }
}
