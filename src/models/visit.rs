use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::types::{PetId, TypeConstraintError, VisitId};
use crate::domain::visit::{NewVisit as DomainNewVisit, Visit as DomainVisit};
use crate::models::pet::Pet;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::visits)]
#[diesel(belongs_to(Pet, foreign_key = pet_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Visit {
    pub id: i32,
    pub pet_id: i32,
    pub visit_date: NaiveDate,
    pub description: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::visits)]
pub struct NewVisit<'a> {
    pub pet_id: i32,
    pub visit_date: NaiveDate,
    pub description: &'a str,
}

impl TryFrom<Visit> for DomainVisit {
    type Error = TypeConstraintError;

    fn try_from(row: Visit) -> Result<Self, Self::Error> {
        Ok(DomainVisit {
            id: VisitId::new(row.id)?,
            pet_id: PetId::new(row.pet_id)?,
            date: row.visit_date,
            description: row.description,
        })
    }
}

impl<'a> From<&'a DomainNewVisit> for NewVisit<'a> {
    fn from(visit: &'a DomainNewVisit) -> Self {
        Self {
            pet_id: visit.pet_id.get(),
            visit_date: visit.date,
            description: visit.description.as_str(),
        }
    }
}
