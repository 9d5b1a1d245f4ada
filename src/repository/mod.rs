//! Persistence boundary of the clinic.
//!
//! The traits here are the collaborator the services depend on. Lookups never
//! fail for a missing entity; they return `Ok(None)` instead.

use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sqlite::SqliteConnection;

use crate::domain::owner::{NewOwner, Owner, UpdateOwner};
use crate::domain::pet::{NewPet, Pet, PetType, UpdatePet};
use crate::domain::types::{OwnerId, PetId, PetTypeId, VisitId};
use crate::domain::visit::{NewVisit, Visit};
use crate::db::DbPool;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod owner;
pub mod pet;
pub mod sample_data;
pub mod visit;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<PooledConnection<ConnectionManager<SqliteConnection>>> {
        Ok(self.pool.get()?)
    }
}

pub trait OwnerReader {
    fn get_owner_by_id(&self, id: OwnerId) -> RepositoryResult<Option<Owner>>;
    /// Owners whose last name starts with `last_name`, ordered by id.
    fn list_owners_by_last_name(&self, last_name: &str) -> RepositoryResult<Vec<Owner>>;
    /// All owners, ordered by id.
    fn list_owners(&self) -> RepositoryResult<Vec<Owner>>;
}

pub trait OwnerWriter {
    fn create_owner(&self, new_owner: &NewOwner) -> RepositoryResult<Owner>;
    fn update_owner(&self, owner_id: OwnerId, updates: &UpdateOwner) -> RepositoryResult<Owner>;
    /// Removes the owner together with their pets and visits.
    fn delete_owner(&self, owner_id: OwnerId) -> RepositoryResult<()>;
}

pub trait PetReader {
    fn get_pet_by_id(&self, id: PetId) -> RepositoryResult<Option<Pet>>;
    fn get_pet_type_by_id(&self, id: PetTypeId) -> RepositoryResult<Option<PetType>>;
    /// Pet types ordered by name.
    fn list_pet_types(&self) -> RepositoryResult<Vec<PetType>>;
}

pub trait PetWriter {
    /// Fails with `NotFound` when the owner does not exist.
    fn create_pet(&self, new_pet: &NewPet) -> RepositoryResult<Pet>;
    fn update_pet(&self, pet_id: PetId, updates: &UpdatePet) -> RepositoryResult<Pet>;
}

pub trait VisitReader {
    fn get_visit_by_id(&self, id: VisitId) -> RepositoryResult<Option<Visit>>;
}

pub trait VisitWriter {
    /// Fails with `NotFound` when the pet does not exist.
    fn create_visit(&self, new_visit: &NewVisit) -> RepositoryResult<Visit>;
}

/// Every capability the HTTP layer needs, usable as `dyn ClinicRepository`.
pub trait ClinicRepository:
    OwnerReader + OwnerWriter + PetReader + PetWriter + VisitReader + VisitWriter + Send + Sync
{
}

impl<T> ClinicRepository for T where
    T: OwnerReader + OwnerWriter + PetReader + PetWriter + VisitReader + VisitWriter + Send + Sync
{
}
