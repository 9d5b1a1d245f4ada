//! Owner queries. Owners are returned as aggregates with their pets.

use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use diesel::sqlite::SqliteConnection;

use crate::domain::owner::{NewOwner, Owner, UpdateOwner};
use crate::domain::types::OwnerId;
use crate::models::owner::{
    NewOwner as DbNewOwner, Owner as DbOwner, UpdateOwner as DbUpdateOwner,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::pet::load_pets_of;
use crate::repository::{DieselRepository, OwnerReader, OwnerWriter};
use crate::schema::{owners, pets, visits};

// 1-based position of `needle` in `haystack`, 0 when absent. Case-sensitive, unlike LIKE.
diesel::define_sql_function!(fn instr(haystack: Text, needle: Text) -> Integer);

fn assemble_owners(conn: &mut SqliteConnection, rows: Vec<DbOwner>) -> RepositoryResult<Vec<Owner>> {
    let pets = load_pets_of(conn, &rows)?;

    rows.into_iter()
        .zip(pets)
        .map(|(row, pets)| row.into_domain(pets).map_err(RepositoryError::from))
        .collect()
}

fn assemble_owner(conn: &mut SqliteConnection, row: DbOwner) -> RepositoryResult<Owner> {
    assemble_owners(conn, vec![row])?
        .pop()
        .ok_or_else(|| RepositoryError::Unexpected("owner vanished while loading".to_string()))
}

impl OwnerReader for DieselRepository {
    fn get_owner_by_id(&self, id: OwnerId) -> RepositoryResult<Option<Owner>> {
        let mut conn = self.conn()?;

        let row = owners::table
            .find(id.get())
            .select(DbOwner::as_select())
            .first::<DbOwner>(&mut conn)
            .optional()?;

        row.map(|row| assemble_owner(&mut conn, row)).transpose()
    }

    fn list_owners_by_last_name(&self, last_name: &str) -> RepositoryResult<Vec<Owner>> {
        let mut conn = self.conn()?;

        let rows = owners::table
            .filter(instr(owners::last_name, last_name).eq(1))
            .order(owners::id.asc())
            .select(DbOwner::as_select())
            .load::<DbOwner>(&mut conn)?;

        assemble_owners(&mut conn, rows)
    }

    fn list_owners(&self) -> RepositoryResult<Vec<Owner>> {
        let mut conn = self.conn()?;

        let rows = owners::table
            .order(owners::id.asc())
            .select(DbOwner::as_select())
            .load::<DbOwner>(&mut conn)?;

        assemble_owners(&mut conn, rows)
    }
}

impl OwnerWriter for DieselRepository {
    fn create_owner(&self, new_owner: &NewOwner) -> RepositoryResult<Owner> {
        let mut conn = self.conn()?;

        let row = diesel::insert_into(owners::table)
            .values(&DbNewOwner::from(new_owner))
            .returning(DbOwner::as_returning())
            .get_result::<DbOwner>(&mut conn)?;

        Ok(row.into_domain(Vec::new())?)
    }

    fn update_owner(&self, owner_id: OwnerId, updates: &UpdateOwner) -> RepositoryResult<Owner> {
        let mut conn = self.conn()?;

        let row = diesel::update(owners::table.find(owner_id.get()))
            .set(&DbUpdateOwner::from(updates))
            .returning(DbOwner::as_returning())
            .get_result::<DbOwner>(&mut conn)?;

        assemble_owner(&mut conn, row)
    }

    fn delete_owner(&self, owner_id: OwnerId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        let owner_id = owner_id.get();

        conn.transaction::<(), RepositoryError, _>(|conn| {
            let pet_ids = pets::table
                .filter(pets::owner_id.eq(owner_id))
                .select(pets::id);
            diesel::delete(visits::table.filter(visits::pet_id.eq_any(pet_ids))).execute(conn)?;
            diesel::delete(pets::table.filter(pets::owner_id.eq(owner_id))).execute(conn)?;

            match diesel::delete(owners::table.find(owner_id)).execute(conn)? {
                0 => Err(RepositoryError::NotFound),
                _ => Ok(()),
            }
        })
    }
}
