use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PetId, VisitId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    pub id: VisitId,
    pub pet_id: PetId,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewVisit {
    pub pet_id: PetId,
    pub date: NaiveDate,
    pub description: String,
}
