use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::fruit::{Fruit, FruitUpdate, NewFruit};
use crate::domain::types::{CategoryId, FruitId, ImageFilename, ImageUrl};

pub mod category;
pub mod errors;
pub mod fruit;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between callers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing fruits.
#[derive(Debug, Clone, Default)]
pub struct FruitListQuery {
    /// Restrict to fruits belonging to a category.
    pub category_id: Option<CategoryId>,
}

impl FruitListQuery {
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Read-only operations for fruit entities.
pub trait FruitReader {
    /// List fruits matching the supplied query parameters.
    ///
    /// Results are ordered by ascending id so repeated reads are stable.
    /// A filter value with no matching rows yields an empty vector.
    fn list_fruits(&self, query: FruitListQuery) -> RepositoryResult<Vec<Fruit>>;
    /// Retrieve a fruit by its identifier.
    fn get_fruit_by_id(&self, id: FruitId) -> RepositoryResult<Option<Fruit>>;
}

/// Write operations for fruit entities.
pub trait FruitWriter {
    /// Persist a new fruit and return the stored record.
    fn create_fruit(&self, fruit: &NewFruit) -> RepositoryResult<Fruit>;
    /// Overwrite a fruit's mutable fields.
    fn update_fruit(&self, id: FruitId, update: &FruitUpdate) -> RepositoryResult<usize>;
    /// Delete a fruit by its identifier.
    fn delete_fruit(&self, id: FruitId) -> RepositoryResult<usize>;
    /// Check whether a fruit with the given identifier exists.
    fn fruit_exists(&self, id: FruitId) -> RepositoryResult<bool>;
    /// Attach an uploaded image to a fruit.
    fn set_fruit_image(
        &self,
        id: FruitId,
        filename: &ImageFilename,
        url: &ImageUrl,
    ) -> RepositoryResult<usize>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Count all persisted categories.
    fn count_categories(&self) -> RepositoryResult<usize>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return the stored record.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
}
