//! Pet queries. A pet is always loaded with its type and its visits.

use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;

use crate::domain::pet::{NewPet, Pet, PetType, UpdatePet};
use crate::domain::types::{PetId, PetTypeId, TypeConstraintError};
use crate::domain::visit::Visit;
use crate::models::owner::Owner as DbOwner;
use crate::models::pet::{
    NewPet as DbNewPet, Pet as DbPet, PetType as DbPetType, UpdatePet as DbUpdatePet,
};
use crate::models::visit::Visit as DbVisit;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, PetReader, PetWriter};
use crate::schema::{owners, pet_types, pets, visits};

diesel::define_sql_function!(fn lower(x: Text) -> Text);

/// Visits of every pet in `rows`, newest first, grouped in the order of `rows`.
fn load_visits(conn: &mut SqliteConnection, rows: &[DbPet]) -> RepositoryResult<Vec<Vec<Visit>>> {
    let visits = DbVisit::belonging_to(rows)
        .select(DbVisit::as_select())
        .order((visits::visit_date.desc(), visits::id.asc()))
        .load::<DbVisit>(conn)?;

    visits
        .grouped_by(rows)
        .into_iter()
        .map(|group| {
            group
                .into_iter()
                .map(Visit::try_from)
                .collect::<Result<Vec<Visit>, _>>()
                .map_err(RepositoryError::from)
        })
        .collect()
}

fn load_pet(conn: &mut SqliteConnection, row: DbPet) -> RepositoryResult<Pet> {
    let pet_type = pet_types::table
        .find(row.type_id)
        .select(DbPetType::as_select())
        .first::<DbPetType>(conn)?;
    let visits = load_visits(conn, std::slice::from_ref(&row))?
        .pop()
        .unwrap_or_default();

    Ok(row.into_domain(pet_type, visits)?)
}

/// Pets of every owner in `owners`, ordered by name ignoring case, grouped in
/// the order of `owners`.
pub(super) fn load_pets_of(
    conn: &mut SqliteConnection,
    owners: &[DbOwner],
) -> RepositoryResult<Vec<Vec<Pet>>> {
    let rows = DbPet::belonging_to(owners)
        .inner_join(pet_types::table)
        .select((DbPet::as_select(), DbPetType::as_select()))
        .order((lower(pets::name).asc(), pets::id.asc()))
        .load::<(DbPet, DbPetType)>(conn)?;
    let (pet_rows, type_rows): (Vec<DbPet>, Vec<DbPetType>) = rows.into_iter().unzip();
    let visits = load_visits(conn, &pet_rows)?;

    let pets = pet_rows
        .into_iter()
        .zip(type_rows)
        .zip(visits)
        .map(|((row, pet_type), visits)| Ok((row.clone(), row.into_domain(pet_type, visits)?)))
        .collect::<Result<Vec<(DbPet, Pet)>, TypeConstraintError>>()?;

    Ok(pets
        .grouped_by(owners)
        .into_iter()
        .map(|group| group.into_iter().map(|(_, pet)| pet).collect())
        .collect())
}

impl PetReader for DieselRepository {
    fn get_pet_by_id(&self, id: PetId) -> RepositoryResult<Option<Pet>> {
        let mut conn = self.conn()?;

        let row = pets::table
            .find(id.get())
            .select(DbPet::as_select())
            .first::<DbPet>(&mut conn)
            .optional()?;

        row.map(|row| load_pet(&mut conn, row)).transpose()
    }

    fn get_pet_type_by_id(&self, id: PetTypeId) -> RepositoryResult<Option<PetType>> {
        let mut conn = self.conn()?;

        let row = pet_types::table
            .find(id.get())
            .select(DbPetType::as_select())
            .first::<DbPetType>(&mut conn)
            .optional()?;

        Ok(row.map(PetType::try_from).transpose()?)
    }

    fn list_pet_types(&self) -> RepositoryResult<Vec<PetType>> {
        let mut conn = self.conn()?;

        let pet_types = pet_types::table
            .select(DbPetType::as_select())
            .order(pet_types::name.asc())
            .load::<DbPetType>(&mut conn)?
            .into_iter()
            .map(PetType::try_from)
            .collect::<Result<Vec<PetType>, _>>()?;

        Ok(pet_types)
    }
}

impl PetWriter for DieselRepository {
    fn create_pet(&self, new_pet: &NewPet) -> RepositoryResult<Pet> {
        let mut conn = self.conn()?;

        conn.transaction::<Pet, RepositoryError, _>(|conn| {
            owners::table
                .find(new_pet.owner_id.get())
                .select(owners::id)
                .first::<i32>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            let row = diesel::insert_into(pets::table)
                .values(&DbNewPet::from(new_pet))
                .returning(DbPet::as_returning())
                .get_result::<DbPet>(conn)?;

            load_pet(conn, row)
        })
    }

    fn update_pet(&self, pet_id: PetId, updates: &UpdatePet) -> RepositoryResult<Pet> {
        let mut conn = self.conn()?;

        let row = diesel::update(pets::table.find(pet_id.get()))
            .set(&DbUpdatePet::from(updates))
            .returning(DbPet::as_returning())
            .get_result::<DbPet>(&mut conn)?;

        load_pet(&mut conn, row)
    }
}
