//! Constrained value types backing the domain entities.
//!
//! Entities carry these wrappers instead of raw primitives, so an id, name or
//! price that reaches the repository has already passed its constraint check.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Raised when a raw value fails a domain type's constructor check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// Number had to be strictly positive but was not, or was not finite.
    #[error("{0} must be greater than zero")]
    NonPositiveNumber(&'static str),
    /// Number had to be zero or greater but was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// String was empty (or whitespace-only) after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// Anything not covered by the variants above.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trimmed_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Generates a newtype over a strictly positive `i32` identifier.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps `value`, rejecting zero and negative identifiers.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Raw `i32` behind this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Trims `value` and rejects it when nothing is left.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trimmed_non_empty(value, $field).map(Self)
            }

            /// The wrapped text as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwraps into the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

macro_rules! positive_f64_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
        #[serde(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Wraps `value`, rejecting non-finite, zero and negative inputs.
            pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
                if value.is_finite() && value > 0.0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveNumber($field))
                }
            }

            /// Raw `f64` behind this value.
            pub const fn get(self) -> f64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<f64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: f64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<f64> for $name {
            fn eq(&self, other: &f64) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for f64 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

macro_rules! non_negative_i32_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps `value`, rejecting negative inputs. Zero is allowed.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value >= 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NegativeNumber($field))
                }
            }

            /// Raw `i32` behind this value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

id_newtype!(FruitId, "Unique identifier for a fruit.", "fruit_id");
id_newtype!(
    CategoryId,
    "Unique identifier for a category.",
    "category_id"
);

non_empty_string_newtype!(
    FruitName,
    "Fruit display name enforcing non-empty values.",
    "fruit name"
);
non_empty_string_newtype!(
    FruitDescription,
    "Fruit description enforcing non-empty values.",
    "description"
);
non_empty_string_newtype!(
    CategoryName,
    "Category name enforcing non-empty values.",
    "category name"
);
non_empty_string_newtype!(
    ImageFilename,
    "Stored image filename enforcing non-empty values.",
    "image filename"
);
non_empty_string_newtype!(
    ImageUrl,
    "Serving path for a stored image enforcing non-empty values.",
    "image url"
);

positive_f64_newtype!(
    FruitPrice,
    "Strictly positive price in standard currency units.",
    "price"
);

non_negative_i32_newtype!(StockCount, "Units of a fruit held in stock.", "stock");

/// Sale unit a fruit is priced and sold by.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Kg,
    Piece,
    Pack,
    Dozen,
    Liter,
    Gram,
    Pound,
}

impl Unit {
    /// All supported units, in display order.
    pub const ALL: [Unit; 7] = [
        Unit::Kg,
        Unit::Piece,
        Unit::Pack,
        Unit::Dozen,
        Unit::Liter,
        Unit::Gram,
        Unit::Pound,
    ];

    /// String representation used in persistence and API payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Piece => "piece",
            Self::Pack => "pack",
            Self::Dozen => "dozen",
            Self::Liter => "liter",
            Self::Gram => "gram",
            Self::Pound => "pound",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Unit {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "kg" => Ok(Self::Kg),
            "piece" => Ok(Self::Piece),
            "pack" => Ok(Self::Pack),
            "dozen" => Ok(Self::Dozen),
            "liter" => Ok(Self::Liter),
            "gram" => Ok(Self::Gram),
            "pound" => Ok(Self::Pound),
            other => Err(TypeConstraintError::InvalidValue(format!("unit: {other}"))),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Unit> for String {
    fn from(value: Unit) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_fruit_names() {
        let value = FruitName::new("  Apple  ").unwrap();
        assert_eq!(value.as_str(), "Apple");
    }

    #[test]
    fn rejects_empty_category_names() {
        let err = CategoryName::new("   ").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("category name"));
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = FruitId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("fruit_id"));
    }

    #[test]
    fn price_rejects_zero_and_negative_values() {
        assert_eq!(
            FruitPrice::new(0.0).unwrap_err(),
            TypeConstraintError::NonPositiveNumber("price")
        );
        assert_eq!(
            FruitPrice::new(-1.5).unwrap_err(),
            TypeConstraintError::NonPositiveNumber("price")
        );
        assert_eq!(FruitPrice::new(1.5).unwrap().get(), 1.5);
    }

    #[test]
    fn stock_allows_zero() {
        assert_eq!(StockCount::new(0).unwrap().get(), 0);
        assert_eq!(
            StockCount::new(-1).unwrap_err(),
            TypeConstraintError::NegativeNumber("stock")
        );
    }

    #[test]
    fn unit_round_trips_through_display_names() {
        for unit in Unit::ALL {
            assert_eq!(Unit::try_from(unit.as_str()).unwrap(), unit);
        }
    }

    #[test]
    fn unit_rejects_unknown_names() {
        assert!(Unit::try_from("bushel").is_err());
    }

    #[test]
    fn newtypes_serialize_transparently() {
        let id = FruitId::new(7).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let name = FruitName::new("Apple").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Apple\"");
    }
}
