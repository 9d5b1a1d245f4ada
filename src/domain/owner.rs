use serde::{Deserialize, Serialize};

use crate::domain::pet::Pet;
use crate::domain::types::{OwnerId, PetId};

/// A pet owner together with the pets registered to them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub id: OwnerId,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    /// Pets ordered by name.
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Returns the owner's pet with the given id, if it belongs to this owner.
    #[must_use]
    pub fn pet(&self, pet_id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == pet_id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewOwner {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl NewOwner {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        address: Option<String>,
        city: Option<String>,
        telephone: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            address: address.map(|s| s.trim().to_string()).unwrap_or_default(),
            city: city.map(|s| s.trim().to_string()).unwrap_or_default(),
            telephone: telephone
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Replacement values for the mutable attributes of an owner.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateOwner {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl From<NewOwner> for UpdateOwner {
    fn from(owner: NewOwner) -> Self {
        Self {
            first_name: owner.first_name,
            last_name: owner.last_name,
            address: owner.address,
            city: owner.city,
            telephone: owner.telephone,
        }
    }
}
