use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{OwnerId, PetId, PetTypeId};
use crate::domain::visit::Visit;

/// Reference data describing the kind of animal.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PetType {
    pub id: PetTypeId,
    pub name: String,
}

impl PetType {
    #[must_use]
    pub fn new(id: PetTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: PetId,
    /// Owner this pet belongs to.
    pub owner_id: OwnerId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type: PetType,
    /// Visits ordered from the most recent.
    pub visits: Vec<Visit>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewPet {
    pub owner_id: OwnerId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type_id: PetTypeId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdatePet {
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type_id: PetTypeId,
}
