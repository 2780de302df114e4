use std::collections::HashMap;

use crate::domain::category::Category;
use crate::domain::types::{CategoryId, CategoryName, FruitId, ImageFilename, ImageUrl, Unit};
use crate::dto::fruits::FruitDto;
use crate::forms::fruits::FruitFormPayload;
use crate::repository::{CategoryReader, FruitListQuery, FruitReader, FruitWriter};

use super::{ServiceError, ServiceResult};

/// List fruits, optionally restricted to a single category, with category
/// names resolved for presentation.
pub fn list_fruits<R>(category_id: Option<CategoryId>, repo: &R) -> ServiceResult<Vec<FruitDto>>
where
    R: FruitReader + CategoryReader,
{
    let mut query = FruitListQuery::default();
    if let Some(category_id) = category_id {
        query = query.category(category_id);
    }

    let fruits = match repo.list_fruits(query) {
        Ok(fruits) => fruits,
        Err(e) => {
            log::error!("Failed to list fruits: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let names = category_names(repo)?;
    Ok(fruits
        .into_iter()
        .map(|fruit| {
            let name = fruit.category_id.and_then(|id| names.get(&id));
            FruitDto::new(fruit, name)
        })
        .collect())
}

/// Retrieve a single fruit by id.
pub fn get_fruit<R>(id: FruitId, repo: &R) -> ServiceResult<FruitDto>
where
    R: FruitReader + CategoryReader,
{
    let fruit = match repo.get_fruit_by_id(id) {
        Ok(Some(fruit)) => fruit,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get fruit: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let category = lookup_category(fruit.category_id, repo)?;
    Ok(FruitDto::new(fruit, category.as_ref().map(|c| &c.name)))
}

/// Create a fruit from validated form data.
///
/// The referenced category must exist.
pub fn create_fruit<R>(payload: FruitFormPayload, repo: &R) -> ServiceResult<FruitDto>
where
    R: FruitWriter + CategoryReader,
{
    let category = match repo.get_category_by_id(payload.category_id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match repo.create_fruit(&payload.into_new_fruit()) {
        Ok(fruit) => Ok(FruitDto::new(fruit, Some(&category.name))),
        Err(e) => {
            log::error!("Failed to create fruit: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Overwrite an existing fruit with validated form data.
///
/// Both the fruit and the referenced category must exist.
pub fn update_fruit<R>(id: FruitId, payload: FruitFormPayload, repo: &R) -> ServiceResult<FruitDto>
where
    R: FruitReader + FruitWriter + CategoryReader,
{
    match repo.get_fruit_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get fruit: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let category = match repo.get_category_by_id(payload.category_id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if let Err(e) = repo.update_fruit(id, &payload.into_fruit_update()) {
        log::error!("Failed to update fruit: {e}");
        return Err(ServiceError::Internal);
    }

    let fruit = match repo.get_fruit_by_id(id) {
        Ok(Some(fruit)) => fruit,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to reload fruit: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(FruitDto::new(fruit, Some(&category.name)))
}

/// Delete a fruit by id.
pub fn delete_fruit<R>(id: FruitId, repo: &R) -> ServiceResult<()>
where
    R: FruitWriter,
{
    match repo.fruit_exists(id) {
        Ok(true) => {}
        Ok(false) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to check fruit existence: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_fruit(id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete fruit: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Attach an uploaded image to an existing fruit.
pub fn attach_fruit_image<R>(
    id: FruitId,
    filename: ImageFilename,
    url: ImageUrl,
    repo: &R,
) -> ServiceResult<()>
where
    R: FruitWriter,
{
    match repo.fruit_exists(id) {
        Ok(true) => {}
        Ok(false) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to check fruit existence: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.set_fruit_image(id, &filename, &url) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to attach fruit image: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Display names of all supported sale units.
pub fn list_units() -> Vec<&'static str> {
    Unit::ALL.iter().map(|unit| unit.as_str()).collect()
}

fn category_names<R>(repo: &R) -> ServiceResult<HashMap<CategoryId, CategoryName>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(|c| (c.id, c.name)).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

fn lookup_category<R>(id: Option<CategoryId>, repo: &R) -> ServiceResult<Option<Category>>
where
    R: CategoryReader,
{
    let Some(id) = id else {
        return Ok(None);
    };
    match repo.get_category_by_id(id) {
        Ok(category) => Ok(category),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}
