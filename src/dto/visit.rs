use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{TypeConstraintError, require_id};
use crate::domain::visit::Visit;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisitDto {
    pub id: Option<i32>,
    pub pet_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl From<&Visit> for VisitDto {
    fn from(visit: &Visit) -> Self {
        Self {
            id: Some(visit.id.get()),
            pet_id: Some(visit.pet_id.get()),
            date: Some(visit.date),
            description: Some(visit.description.clone()),
        }
    }
}

impl From<Visit> for VisitDto {
    fn from(visit: Visit) -> Self {
        Self::from(&visit)
    }
}

impl TryFrom<VisitDto> for Visit {
    type Error = TypeConstraintError;

    fn try_from(dto: VisitDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require_id(dto.id)?,
            pet_id: require_id(dto.pet_id)?,
            date: dto.date.ok_or(TypeConstraintError::MissingValue("date"))?,
            description: dto.description.unwrap_or_default(),
        })
    }
}
