use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::pet::{NewPet, UpdatePet};
use crate::domain::types::{OwnerId, PetTypeId};
use crate::dto::pet::PetTypeDto;
use crate::forms::{FormError, field_error, validate_not_blank};

/// Body of pet create and update requests.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PetForm {
    /// Accepted for compatibility and ignored; identity comes from the path.
    pub id: Option<i32>,
    #[validate(
        required(message = "must not be null"),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,
    #[validate(required(message = "must not be null"))]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    #[validate(required(message = "must not be null"))]
    pub pet_type: Option<PetTypeDto>,
}

/// Validated pet attributes, not yet bound to an owner.
#[derive(Debug, Clone, PartialEq)]
pub struct PetPayload {
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type_id: PetTypeId,
}

impl TryFrom<PetForm> for PetPayload {
    type Error = FormError;

    fn try_from(form: PetForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let birth_date = form
            .birth_date
            .ok_or_else(|| field_error("birth_date", "required", "must not be null"))?;
        let pet_type_id = form
            .pet_type
            .and_then(|pet_type| pet_type.id)
            .and_then(|id| PetTypeId::new(id).ok())
            .ok_or_else(|| {
                field_error(
                    "pet_type",
                    "invalid_id",
                    "must reference an existing pet type id",
                )
            })?;

        Ok(Self {
            name: form.name.unwrap_or_default().trim().to_string(),
            birth_date,
            pet_type_id,
        })
    }
}

impl PetPayload {
    pub fn into_new_pet(self, owner_id: OwnerId) -> NewPet {
        NewPet {
            owner_id,
            name: self.name,
            birth_date: self.birth_date,
            pet_type_id: self.pet_type_id,
        }
    }

    pub fn into_update(self) -> UpdatePet {
        UpdatePet {
            name: self.name,
            birth_date: self.birth_date,
            pet_type_id: self.pet_type_id,
        }
    }
}
