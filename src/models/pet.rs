use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::pet::{
    NewPet as DomainNewPet, Pet as DomainPet, PetType as DomainPetType,
    UpdatePet as DomainUpdatePet,
};
use crate::domain::types::{OwnerId, PetId, PetTypeId, TypeConstraintError};
use crate::domain::visit::Visit as DomainVisit;
use crate::models::owner::Owner;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::pet_types)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PetType {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::pets)]
#[diesel(belongs_to(Owner, foreign_key = owner_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::pet::Pet`] referencing its type by id.
pub struct Pet {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub type_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::pets)]
pub struct NewPet<'a> {
    pub owner_id: i32,
    pub name: &'a str,
    pub birth_date: NaiveDate,
    pub type_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::pets)]
pub struct UpdatePet<'a> {
    pub name: &'a str,
    pub birth_date: NaiveDate,
    pub type_id: i32,
}

impl TryFrom<PetType> for DomainPetType {
    type Error = TypeConstraintError;

    fn try_from(row: PetType) -> Result<Self, Self::Error> {
        Ok(DomainPetType::new(PetTypeId::new(row.id)?, row.name))
    }
}

impl Pet {
    /// Builds the domain record from this row, its type and its visits.
    pub fn into_domain(
        self,
        pet_type: PetType,
        visits: Vec<DomainVisit>,
    ) -> Result<DomainPet, TypeConstraintError> {
        Ok(DomainPet {
            id: PetId::new(self.id)?,
            owner_id: OwnerId::new(self.owner_id)?,
            name: self.name,
            birth_date: self.birth_date,
            pet_type: DomainPetType::try_from(pet_type)?,
            visits,
        })
    }
}

impl<'a> From<&'a DomainNewPet> for NewPet<'a> {
    fn from(pet: &'a DomainNewPet) -> Self {
        Self {
            owner_id: pet.owner_id.get(),
            name: pet.name.as_str(),
            birth_date: pet.birth_date,
            type_id: pet.pet_type_id.get(),
        }
    }
}

impl<'a> From<&'a DomainUpdatePet> for UpdatePet<'a> {
    fn from(pet: &'a DomainUpdatePet) -> Self {
        Self {
            name: pet.name.as_str(),
            birth_date: pet.birth_date,
            type_id: pet.pet_type_id.get(),
        }
    }
}
