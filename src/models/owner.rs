use diesel::prelude::*;

use crate::domain::owner::{NewOwner as DomainNewOwner, Owner as DomainOwner, UpdateOwner as DomainUpdateOwner};
use crate::domain::pet::Pet as DomainPet;
use crate::domain::types::{OwnerId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::owners)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::owner::Owner`]; pets live in their own table.
pub struct Owner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::owners)]
/// Insertable form of [`Owner`].
pub struct NewOwner<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub telephone: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::owners)]
/// Data used when updating an [`Owner`] record.
pub struct UpdateOwner<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub telephone: &'a str,
}

impl Owner {
    /// Builds the domain aggregate from this row and the owner's pets.
    pub fn into_domain(self, pets: Vec<DomainPet>) -> Result<DomainOwner, TypeConstraintError> {
        Ok(DomainOwner {
            id: OwnerId::new(self.id)?,
            first_name: self.first_name,
            last_name: self.last_name,
            address: self.address,
            city: self.city,
            telephone: self.telephone,
            pets,
        })
    }
}

impl<'a> From<&'a DomainNewOwner> for NewOwner<'a> {
    fn from(owner: &'a DomainNewOwner) -> Self {
        Self {
            first_name: owner.first_name.as_str(),
            last_name: owner.last_name.as_str(),
            address: owner.address.as_str(),
            city: owner.city.as_str(),
            telephone: owner.telephone.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateOwner> for UpdateOwner<'a> {
    fn from(owner: &'a DomainUpdateOwner) -> Self {
        Self {
            first_name: owner.first_name.as_str(),
            last_name: owner.last_name.as_str(),
            address: owner.address.as_str(),
            city: owner.city.as_str(),
            telephone: owner.telephone.as_str(),
        }
    }
}
