use crate::dto::categories::CategoryDto;
use crate::repository::CategoryReader;

use super::{ServiceError, ServiceResult};

/// List all categories for presentation, ordered by name.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::{CategoryId, CategoryName};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    #[test]
    fn lists_categories_ordered_by_name() {
        let timestamp = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        let repo = TestRepository::new().with_categories(vec![
            Category {
                id: CategoryId::new(2).unwrap(),
                name: CategoryName::new("Vegetables").unwrap(),
                created_at: timestamp,
                updated_at: timestamp,
            },
            Category {
                id: CategoryId::new(1).unwrap(),
                name: CategoryName::new("Fruits").unwrap(),
                created_at: timestamp,
                updated_at: timestamp,
            },
        ]);

        let categories = list_categories(&repo).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Fruits");
        assert_eq!(categories[1].name, "Vegetables");
    }
}
