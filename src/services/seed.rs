use chrono::Utc;

use crate::domain::category::NewCategory;
use crate::domain::fruit::NewFruit;
use crate::domain::types::{
    CategoryId, CategoryName, FruitDescription, FruitName, FruitPrice, StockCount, Unit,
};
use crate::repository::{CategoryReader, CategoryWriter, FruitWriter};

use super::{ServiceError, ServiceResult};

/// Populate an empty store with the demo catalog.
///
/// Returns `Ok(false)` without touching storage when categories already
/// exist, so repeated startup runs are no-ops.
pub fn seed_demo_catalog<R>(repo: &R) -> ServiceResult<bool>
where
    R: CategoryReader + CategoryWriter + FruitWriter,
{
    match repo.count_categories() {
        Ok(0) => {}
        Ok(_) => return Ok(false),
        Err(e) => {
            log::error!("Failed to count categories: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let fruits = seed_category(repo, "Fruits")?;
    let vegetables = seed_category(repo, "Vegetables")?;
    let dairy = seed_category(repo, "Dairy")?;

    seed_fruit(
        repo,
        "Apple",
        "Fresh, crisp red apples. Perfect for snacking or baking.",
        1.50,
        fruits,
        100,
        Unit::Kg,
    )?;
    seed_fruit(
        repo,
        "Banana",
        "Sweet, ripe bananas. Great source of potassium and energy.",
        0.75,
        fruits,
        150,
        Unit::Kg,
    )?;
    seed_fruit(
        repo,
        "Orange",
        "Juicy, vitamin C-rich oranges. Perfect for fresh juice.",
        1.25,
        fruits,
        120,
        Unit::Kg,
    )?;
    seed_fruit(
        repo,
        "Carrot",
        "Fresh, crunchy carrots. Excellent for cooking and salads.",
        0.50,
        vegetables,
        200,
        Unit::Kg,
    )?;
    seed_fruit(
        repo,
        "Broccoli",
        "Nutritious green broccoli crowns. Rich in vitamins and minerals.",
        2.50,
        vegetables,
        80,
        Unit::Piece,
    )?;
    seed_fruit(
        repo,
        "Milk",
        "Fresh whole milk. Perfect for drinking, cereal, and cooking.",
        3.00,
        dairy,
        50,
        Unit::Liter,
    )?;
    seed_fruit(
        repo,
        "Cheese",
        "Artisan cheese selection. Great for sandwiches and snacking.",
        5.50,
        dairy,
        70,
        Unit::Pack,
    )?;

    Ok(true)
}

fn seed_category<R>(repo: &R, name: &str) -> ServiceResult<CategoryId>
where
    R: CategoryWriter,
{
    let now = Utc::now().naive_utc();
    let category = NewCategory {
        name: CategoryName::new(name)?,
        created_at: now,
        updated_at: now,
    };
    match repo.create_category(&category) {
        Ok(created) => Ok(created.id),
        Err(e) => {
            log::error!("Failed to seed category {name}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

fn seed_fruit<R>(
    repo: &R,
    name: &str,
    description: &str,
    price: f64,
    category_id: CategoryId,
    stock: i32,
    unit: Unit,
) -> ServiceResult<()>
where
    R: FruitWriter,
{
    let now = Utc::now().naive_utc();
    let fruit = NewFruit {
        name: FruitName::new(name)?,
        description: Some(FruitDescription::new(description)?),
        price: FruitPrice::new(price)?,
        stock: StockCount::new(stock)?,
        unit: Some(unit),
        category_id,
        created_at: now,
        updated_at: now,
    };
    match repo.create_fruit(&fruit) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to seed fruit {name}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::TestRepository;
    use crate::repository::{CategoryReader, FruitListQuery, FruitReader};

    #[test]
    fn seeds_empty_store_with_demo_catalog() {
        let repo = TestRepository::new();

        assert!(seed_demo_catalog(&repo).unwrap());
        assert_eq!(repo.count_categories().unwrap(), 3);
        assert_eq!(repo.list_fruits(FruitListQuery::default()).unwrap().len(), 7);
    }

    #[test]
    fn seeding_is_a_noop_when_categories_exist() {
        let repo = TestRepository::new();

        assert!(seed_demo_catalog(&repo).unwrap());
        assert!(!seed_demo_catalog(&repo).unwrap());
        assert_eq!(repo.count_categories().unwrap(), 3);
        assert_eq!(repo.list_fruits(FruitListQuery::default()).unwrap().len(), 7);
    }

    #[test]
    fn seeded_fruits_are_grouped_under_their_categories() {
        let repo = TestRepository::new();
        seed_demo_catalog(&repo).unwrap();

        let dairy = repo
            .list_categories()
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Dairy")
            .expect("seeded category should exist");

        let fruits = repo
            .list_fruits(FruitListQuery::default().category(dairy.id))
            .unwrap();
        assert_eq!(fruits.len(), 2);
        assert!(fruits.iter().all(|f| f.category_id == Some(dairy.id)));
    }
}
