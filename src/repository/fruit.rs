use diesel::prelude::*;

use crate::domain::fruit::{Fruit, FruitUpdate, NewFruit};
use crate::domain::types::{FruitId, ImageFilename, ImageUrl};
use crate::models::fruit::{
    Fruit as DbFruit, FruitChangeset as DbFruitChangeset, NewFruit as DbNewFruit,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, FruitListQuery, FruitReader, FruitWriter};

impl FruitReader for DieselRepository {
    fn list_fruits(&self, query: FruitListQuery) -> RepositoryResult<Vec<Fruit>> {
        use crate::schema::fruits;

        let mut conn = self.conn()?;

        let mut items = fruits::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category_id) = query.category_id {
            items = items.filter(fruits::category_id.eq(Some(category_id.get())));
        }

        let items = items
            .order(fruits::id.asc())
            .load::<DbFruit>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Fruit>, _>>()?;

        Ok(items)
    }

    fn get_fruit_by_id(&self, id: FruitId) -> RepositoryResult<Option<Fruit>> {
        use crate::schema::fruits;

        let mut conn = self.conn()?;

        let fruit = fruits::table
            .filter(fruits::id.eq(id.get()))
            .first::<DbFruit>(&mut conn)
            .optional()?;

        let fruit = fruit.map(TryInto::try_into).transpose()?;
        Ok(fruit)
    }
}

impl FruitWriter for DieselRepository {
    fn create_fruit(&self, fruit: &NewFruit) -> RepositoryResult<Fruit> {
        use crate::schema::fruits;

        let mut conn = self.conn()?;
        let db_fruit: DbNewFruit = fruit.clone().into();

        let created = diesel::insert_into(fruits::table)
            .values(db_fruit)
            .get_result::<DbFruit>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_fruit(&self, id: FruitId, update: &FruitUpdate) -> RepositoryResult<usize> {
        use crate::schema::fruits;

        let mut conn = self.conn()?;
        let changeset: DbFruitChangeset = update.clone().into();

        let affected = diesel::update(fruits::table.filter(fruits::id.eq(id.get())))
            .set((changeset, fruits::updated_at.eq(diesel::dsl::now)))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_fruit(&self, id: FruitId) -> RepositoryResult<usize> {
        use crate::schema::fruits;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(fruits::table.filter(fruits::id.eq(id.get()))).execute(&mut conn)?;

        Ok(affected)
    }

    fn fruit_exists(&self, id: FruitId) -> RepositoryResult<bool> {
        use crate::schema::fruits;

        let mut conn = self.conn()?;

        let found = diesel::select(diesel::dsl::exists(
            fruits::table.filter(fruits::id.eq(id.get())),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    fn set_fruit_image(
        &self,
        id: FruitId,
        filename: &ImageFilename,
        url: &ImageUrl,
    ) -> RepositoryResult<usize> {
        use crate::schema::fruits;

        let mut conn = self.conn()?;

        let affected = diesel::update(fruits::table.filter(fruits::id.eq(id.get())))
            .set((
                fruits::image_filename.eq(filename.as_str()),
                fruits::image_url.eq(url.as_str()),
                fruits::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
