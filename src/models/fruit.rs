use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::fruit::{
    Fruit as DomainFruit, FruitUpdate as DomainFruitUpdate, NewFruit as DomainNewFruit,
};
use crate::domain::types::{
    FruitDescription, FruitName, ImageFilename, ImageUrl, TypeConstraintError, Unit,
};

/// Diesel model representing the `fruits` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::fruits)]
pub struct Fruit {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub unit: Option<String>,
    pub image_filename: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Fruit`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::fruits)]
pub struct NewFruit {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub unit: Option<String>,
    pub category_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset applied when overwriting a fruit's mutable fields.
///
/// `treat_none_as_null` makes `None` clear the column instead of leaving it
/// untouched, matching full-record update semantics.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::fruits)]
#[diesel(treat_none_as_null = true)]
pub struct FruitChangeset {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub unit: Option<String>,
    pub category_id: Option<i32>,
}

impl TryFrom<Fruit> for DomainFruit {
    type Error = TypeConstraintError;

    fn try_from(fruit: Fruit) -> Result<Self, Self::Error> {
        Ok(Self {
            id: fruit.id.try_into()?,
            name: FruitName::new(fruit.name)?,
            description: fruit.description.map(FruitDescription::new).transpose()?,
            price: fruit.price.try_into()?,
            stock: fruit.stock.try_into()?,
            unit: fruit.unit.map(Unit::try_from).transpose()?,
            image_filename: fruit.image_filename.map(ImageFilename::new).transpose()?,
            image_url: fruit.image_url.map(ImageUrl::new).transpose()?,
            category_id: fruit.category_id.map(TryInto::try_into).transpose()?,
            created_at: fruit.created_at,
            updated_at: fruit.updated_at,
        })
    }
}

impl From<DomainNewFruit> for NewFruit {
    fn from(fruit: DomainNewFruit) -> Self {
        Self {
            name: fruit.name.into_inner(),
            description: fruit.description.map(FruitDescription::into_inner),
            price: fruit.price.get(),
            stock: fruit.stock.get(),
            unit: fruit.unit.map(String::from),
            category_id: fruit.category_id.get(),
            created_at: fruit.created_at,
            updated_at: fruit.updated_at,
        }
    }
}

impl From<DomainFruitUpdate> for FruitChangeset {
    fn from(update: DomainFruitUpdate) -> Self {
        Self {
            name: update.name.into_inner(),
            description: update.description.map(FruitDescription::into_inner),
            price: update.price.get(),
            stock: update.stock.get(),
            unit: update.unit.map(String::from),
            category_id: Some(update.category_id.get()),
        }
    }
}
