use crate::utils::error::{CartaError, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The closed set of catalog categories. Adding one is a contract change:
/// every adapter and the port surface grow together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cocktail,
    Beverage,
    Liquor,
    Beer,
    Pizza,
    Wings,
    Soup,
    Salad,
    Meat,
    Coffee,
    Dessert,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Cocktail,
        Category::Beverage,
        Category::Liquor,
        Category::Beer,
        Category::Pizza,
        Category::Wings,
        Category::Soup,
        Category::Salad,
        Category::Meat,
        Category::Coffee,
        Category::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cocktail => "cocktail",
            Category::Beverage => "beverage",
            Category::Liquor => "liquor",
            Category::Beer => "beer",
            Category::Pizza => "pizza",
            Category::Wings => "wings",
            Category::Soup => "soup",
            Category::Salad => "salad",
            Category::Meat => "meat",
            Category::Coffee => "coffee",
            Category::Dessert => "dessert",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CartaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cocktail" => Ok(Category::Cocktail),
            "beverage" => Ok(Category::Beverage),
            "liquor" => Ok(Category::Liquor),
            "beer" => Ok(Category::Beer),
            "pizza" => Ok(Category::Pizza),
            "wings" => Ok(Category::Wings),
            "soup" => Ok(Category::Soup),
            "salad" => Ok(Category::Salad),
            "meat" => Ok(Category::Meat),
            "coffee" => Ok(Category::Coffee),
            "dessert" => Ok(Category::Dessert),
            other => Err(CartaError::invalid_argument(
                "category",
                format!("Unknown category: {}", other),
            )),
        }
    }
}

/// A sellable item. The identifier is unique within the catalog and the
/// category is one of the fixed values; everything else is descriptive and
/// adapters may carry extra fields through `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub category: Category,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Opaque configuration bag for integration connect calls. The schema of
/// `params` belongs to the concrete provider, not to the port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationConfig {
    pub provider: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub params: HashMap<String, serde_json::Value>,
}

impl IntegrationConfig {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            endpoint: None,
            params: HashMap::new(),
        }
    }
}

/// Preferences handed to the recommendation provider. Known fields get
/// proper types; provider-specific signals travel in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub favorite_categories: Vec<Category>,
    #[serde(default)]
    pub dietary_notes: Vec<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

/// What a caller supplies to create or update a reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub party_size: u32,
    pub guest_name: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A reservation as the provider stores it. The identifier is the lookup and
/// mutation key; the remaining fields are provider-defined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub status: ReservationStatus,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub party_size: u32,
    pub guest_name: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One bookable slot on a given date, capacity already filtered for the
/// requested party size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: NaiveTime,
    pub seats_left: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Pizza".parse::<Category>().unwrap(), Category::Pizza);
        assert_eq!(" coffee ".parse::<Category>().unwrap(), Category::Coffee);
    }

    #[test]
    fn unknown_category_is_invalid_argument() {
        let err = "sushi".parse::<Category>().unwrap_err();
        assert_eq!(err.kind(), crate::utils::error::ErrorKind::InvalidArgument);
    }

    #[test]
    fn category_round_trips_through_display() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn product_deserializes_with_extra_fields() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "category": "cocktail",
            "name": "Mojito",
            "ingredients": ["rum", "mint", "lime"],
            "glass": "highball"
        }))
        .unwrap();
        assert_eq!(product.category, Category::Cocktail);
        assert_eq!(product.ingredients.len(), 3);
        assert!(product.extra.contains_key("glass"));
    }
}
