use diesel::prelude::*;

use crate::domain::types::VisitId;
use crate::domain::visit::{NewVisit, Visit};
use crate::models::visit::{NewVisit as DbNewVisit, Visit as DbVisit};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, VisitReader, VisitWriter};
use crate::schema::{pets, visits};

impl VisitReader for DieselRepository {
    fn get_visit_by_id(&self, id: VisitId) -> RepositoryResult<Option<Visit>> {
        let mut conn = self.conn()?;

        let row = visits::table
            .find(id.get())
            .select(DbVisit::as_select())
            .first::<DbVisit>(&mut conn)
            .optional()?;

        Ok(row.map(Visit::try_from).transpose()?)
    }
}

impl VisitWriter for DieselRepository {
    fn create_visit(&self, new_visit: &NewVisit) -> RepositoryResult<Visit> {
        let mut conn = self.conn()?;

        let row = conn.transaction::<DbVisit, RepositoryError, _>(|conn| {
            pets::table
                .find(new_visit.pet_id.get())
                .select(pets::id)
                .first::<i32>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            let row = diesel::insert_into(visits::table)
                .values(&DbNewVisit::from(new_visit))
                .returning(DbVisit::as_returning())
                .get_result::<DbVisit>(conn)?;
            Ok(row)
        })?;

        Ok(Visit::try_from(row)?)
    }
}
