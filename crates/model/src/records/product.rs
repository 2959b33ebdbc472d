//! Pro-shop product records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, ListEntry};
use crate::serde_helpers::lenient_datetime;

/// A pro-shop product as returned by `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable unique identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name.
    pub name: Option<String>,

    /// Description shown on the product card.
    pub description: Option<String>,

    /// Unit price.
    pub price: Option<f64>,

    /// Units in stock.
    pub stock: Option<u32>,

    /// Whether the product is listed for sale.
    pub active: Option<bool>,

    /// When the product was added.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Product {
    const COLLECTION: &'static str = "products";

    fn id(&self) -> &str {
        &self.id
    }
}

impl ListEntry for Product {
    fn search_haystack(&self) -> Vec<&str> {
        [self.name.as_deref(), self.description.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn active(&self) -> Option<bool> {
        self.active
    }
}
