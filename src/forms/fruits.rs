use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::fruit::{FruitUpdate, NewFruit};
use crate::domain::types::{
    CategoryId, FruitDescription, FruitName, FruitPrice, StockCount, TypeConstraintError, Unit,
};

/// Raw fruit create/update input as submitted by a caller.
#[derive(Debug, Deserialize, Validate)]
pub struct FruitForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub stock: i32,
    pub unit: Option<String>,
    #[validate(range(min = 1))]
    pub category_id: i32,
}

/// Validated form data expressed in domain types.
#[derive(Debug, Clone, PartialEq)]
pub struct FruitFormPayload {
    pub name: FruitName,
    pub description: Option<FruitDescription>,
    pub price: FruitPrice,
    pub stock: StockCount,
    pub unit: Option<Unit>,
    pub category_id: CategoryId,
}

impl FruitFormPayload {
    pub fn into_new_fruit(self) -> NewFruit {
        let now = Utc::now().naive_utc();
        NewFruit {
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            unit: self.unit,
            category_id: self.category_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_fruit_update(self) -> FruitUpdate {
        FruitUpdate {
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            unit: self.unit,
            category_id: self.category_id,
        }
    }
}

#[derive(Debug, Error)]
pub enum FruitFormError {
    #[error("Fruit form validation failed: {0}")]
    Validation(String),
    #[error("Fruit form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for FruitFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for FruitFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<FruitForm> for FruitFormPayload {
    type Error = FruitFormError;

    fn try_from(value: FruitForm) -> Result<Self, Self::Error> {
        value.validate()?;

        // A blank description means "no description", not an invalid one.
        let description = value
            .description
            .filter(|d| !d.trim().is_empty())
            .map(FruitDescription::new)
            .transpose()?;

        let unit = value
            .unit
            .filter(|u| !u.trim().is_empty())
            .map(Unit::try_from)
            .transpose()?;

        Ok(Self {
            name: FruitName::new(value.name)?,
            description,
            price: FruitPrice::new(value.price)?,
            stock: StockCount::new(value.stock)?,
            unit,
            category_id: CategoryId::new(value.category_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> FruitForm {
        FruitForm {
            name: "Apple".to_string(),
            description: Some("Fresh, crisp red apples.".to_string()),
            price: 1.5,
            stock: 100,
            unit: Some("kg".to_string()),
            category_id: 1,
        }
    }

    #[test]
    fn converts_valid_form_into_payload() {
        let payload: FruitFormPayload = sample_form().try_into().unwrap();
        assert_eq!(payload.name.as_str(), "Apple");
        assert_eq!(payload.price.get(), 1.5);
        assert_eq!(payload.unit, Some(Unit::Kg));
        assert_eq!(payload.category_id.get(), 1);
    }

    #[test]
    fn rejects_empty_name() {
        let form = FruitForm {
            name: String::new(),
            ..sample_form()
        };
        let payload: Result<FruitFormPayload, _> = form.try_into();
        assert!(matches!(payload, Err(FruitFormError::Validation(_))));
    }

    #[test]
    fn rejects_zero_price() {
        let form = FruitForm {
            price: 0.0,
            ..sample_form()
        };
        let payload: Result<FruitFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn rejects_negative_stock() {
        let form = FruitForm {
            stock: -1,
            ..sample_form()
        };
        let payload: Result<FruitFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn rejects_unknown_unit() {
        let form = FruitForm {
            unit: Some("bushel".to_string()),
            ..sample_form()
        };
        let payload: Result<FruitFormPayload, _> = form.try_into();
        assert!(matches!(payload, Err(FruitFormError::TypeConstraint(_))));
    }

    #[test]
    fn blank_description_becomes_none() {
        let form = FruitForm {
            description: Some("   ".to_string()),
            ..sample_form()
        };
        let payload: FruitFormPayload = form.try_into().unwrap();
        assert_eq!(payload.description, None);
    }

    #[test]
    fn deserializes_payload_without_description() {
        let form: FruitForm = serde_json::from_str(
            r#"{"name":"Banana","price":0.75,"stock":150,"unit":"kg","category_id":1}"#,
        )
        .unwrap();
        assert_eq!(form.description, None);
        let payload: FruitFormPayload = form.try_into().unwrap();
        assert_eq!(payload.name.as_str(), "Banana");
    }
}
