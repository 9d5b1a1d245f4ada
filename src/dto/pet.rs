use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::pet::{Pet, PetType};
use crate::domain::types::{PetId, TypeConstraintError, require_id};
use crate::domain::visit::Visit;
use crate::dto::visit::VisitDto;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PetTypeDto {
    pub id: Option<i32>,
    pub name: Option<String>,
}

/// JSON representation of a pet with its visit history.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PetDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetTypeDto>,
    pub owner_id: Option<i32>,
    #[serde(default)]
    pub visits: Vec<VisitDto>,
}

impl From<&PetType> for PetTypeDto {
    fn from(pet_type: &PetType) -> Self {
        Self {
            id: Some(pet_type.id.get()),
            name: Some(pet_type.name.clone()),
        }
    }
}

impl TryFrom<PetTypeDto> for PetType {
    type Error = TypeConstraintError;

    fn try_from(dto: PetTypeDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require_id(dto.id)?,
            name: dto.name.unwrap_or_default(),
        })
    }
}

impl From<&Pet> for PetDto {
    fn from(pet: &Pet) -> Self {
        Self {
            id: Some(pet.id.get()),
            name: Some(pet.name.clone()),
            birth_date: Some(pet.birth_date),
            pet_type: Some(PetTypeDto::from(&pet.pet_type)),
            owner_id: Some(pet.owner_id.get()),
            visits: pet.visits.iter().map(VisitDto::from).collect(),
        }
    }
}

impl From<Pet> for PetDto {
    fn from(pet: Pet) -> Self {
        Self::from(&pet)
    }
}

impl TryFrom<PetDto> for Pet {
    type Error = TypeConstraintError;

    /// Visits nested without an explicit `petId` are attributed to this pet.
    fn try_from(dto: PetDto) -> Result<Self, Self::Error> {
        let id: PetId = require_id(dto.id)?;
        let visits = dto
            .visits
            .into_iter()
            .map(|mut visit| {
                visit.pet_id.get_or_insert(id.get());
                Visit::try_from(visit)
            })
            .collect::<Result<Vec<Visit>, _>>()?;

        Ok(Self {
            id,
            owner_id: require_id(dto.owner_id)?,
            name: dto.name.unwrap_or_default(),
            birth_date: dto
                .birth_date
                .ok_or(TypeConstraintError::MissingValue("birthDate"))?,
            pet_type: dto
                .pet_type
                .ok_or(TypeConstraintError::MissingValue("type"))?
                .try_into()?,
            visits,
        })
    }
}
