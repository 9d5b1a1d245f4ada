use serde::{Deserialize, Serialize};

use crate::domain::owner::Owner;
use crate::domain::pet::Pet;
use crate::domain::types::{OwnerId, TypeConstraintError, require_id};
use crate::dto::pet::PetDto;

/// JSON representation of an owner and the pets they own.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
    #[serde(default)]
    pub pets: Vec<PetDto>,
}

impl From<&Owner> for OwnerDto {
    fn from(owner: &Owner) -> Self {
        Self {
            id: Some(owner.id.get()),
            first_name: Some(owner.first_name.clone()),
            last_name: Some(owner.last_name.clone()),
            address: Some(owner.address.clone()),
            city: Some(owner.city.clone()),
            telephone: Some(owner.telephone.clone()),
            pets: owner.pets.iter().map(PetDto::from).collect(),
        }
    }
}

impl From<Owner> for OwnerDto {
    fn from(owner: Owner) -> Self {
        Self::from(&owner)
    }
}

impl TryFrom<OwnerDto> for Owner {
    type Error = TypeConstraintError;

    /// Pets nested without an explicit `ownerId` are attributed to this owner.
    fn try_from(dto: OwnerDto) -> Result<Self, Self::Error> {
        let id: OwnerId = require_id(dto.id)?;
        let pets = dto
            .pets
            .into_iter()
            .map(|mut pet| {
                pet.owner_id.get_or_insert(id.get());
                Pet::try_from(pet)
            })
            .collect::<Result<Vec<Pet>, _>>()?;

        Ok(Self {
            id,
            first_name: dto.first_name.unwrap_or_default(),
            last_name: dto.last_name.unwrap_or_default(),
            address: dto.address.unwrap_or_default(),
            city: dto.city.unwrap_or_default(),
            telephone: dto.telephone.unwrap_or_default(),
            pets,
        })
    }
}
