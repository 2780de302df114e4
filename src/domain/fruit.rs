use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryId, FruitDescription, FruitId, FruitName, FruitPrice, ImageFilename, ImageUrl,
    StockCount, Unit,
};

/// A fruit offered by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fruit {
    pub id: FruitId,
    pub name: FruitName,
    pub description: Option<FruitDescription>,
    pub price: FruitPrice,
    pub stock: StockCount,
    pub unit: Option<Unit>,
    pub image_filename: Option<ImageFilename>,
    pub image_url: Option<ImageUrl>,
    /// `None` while the fruit is uncategorized.
    pub category_id: Option<CategoryId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to create a new [`Fruit`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewFruit {
    pub name: FruitName,
    pub description: Option<FruitDescription>,
    pub price: FruitPrice,
    pub stock: StockCount,
    pub unit: Option<Unit>,
    pub category_id: CategoryId,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Field values applied when updating an existing [`Fruit`].
///
/// Every mutable field is overwritten, so `None` clears the stored value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FruitUpdate {
    pub name: FruitName,
    pub description: Option<FruitDescription>,
    pub price: FruitPrice,
    pub stock: StockCount,
    pub unit: Option<Unit>,
    pub category_id: CategoryId,
}
