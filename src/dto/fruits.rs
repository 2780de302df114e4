use serde::Serialize;

use crate::domain::fruit::Fruit;
use crate::domain::types::CategoryName;

/// A fruit flattened for presentation, with its category name resolved.
///
/// Serializes with camelCase keys, the shape API consumers already expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub unit: Option<String>,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub image_filename: Option<String>,
    pub image_url: Option<String>,
}

impl FruitDto {
    pub fn new(fruit: Fruit, category_name: Option<&CategoryName>) -> Self {
        Self {
            id: fruit.id.get(),
            name: fruit.name.into_inner(),
            description: fruit.description.map(Into::into),
            price: fruit.price.get(),
            stock: fruit.stock.get(),
            unit: fruit.unit.map(String::from),
            category_id: fruit.category_id.map(Into::into),
            category_name: category_name.map(|name| name.as_str().to_string()),
            image_filename: fruit.image_filename.map(Into::into),
            image_url: fruit.image_url.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{
        CategoryId, FruitId, FruitName, FruitPrice, StockCount, Unit,
    };
    use chrono::DateTime;

    #[test]
    fn serializes_with_camel_case_keys() {
        let timestamp = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        let fruit = Fruit {
            id: FruitId::new(1).unwrap(),
            name: FruitName::new("Apple").unwrap(),
            description: None,
            price: FruitPrice::new(1.5).unwrap(),
            stock: StockCount::new(100).unwrap(),
            unit: Some(Unit::Kg),
            image_filename: None,
            image_url: None,
            category_id: Some(CategoryId::new(10).unwrap()),
            created_at: timestamp,
            updated_at: timestamp,
        };
        let name = CategoryName::new("Fruits").unwrap();

        let json = serde_json::to_value(FruitDto::new(fruit, Some(&name))).unwrap();
        assert_eq!(json["categoryId"], 10);
        assert_eq!(json["categoryName"], "Fruits");
        assert_eq!(json["imageFilename"], serde_json::Value::Null);
    }
}
