use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::domain::types::PetId;
use crate::domain::visit::NewVisit;
use crate::forms::{FormError, validate_not_blank};

/// Body of visit create requests.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VisitForm {
    pub id: Option<i32>,
    /// Ignored; the pet is addressed by the request path.
    pub pet_id: Option<i32>,
    pub date: Option<NaiveDate>,
    #[validate(
        required(message = "must not be null"),
        custom(function = "validate_not_blank")
    )]
    pub description: Option<String>,
}

/// Validated visit attributes, not yet bound to a pet.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitPayload {
    pub date: NaiveDate,
    pub description: String,
}

impl TryFrom<VisitForm> for VisitPayload {
    type Error = FormError;

    fn try_from(form: VisitForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            date: form.date.unwrap_or_else(|| Utc::now().date_naive()),
            description: form.description.unwrap_or_default().trim().to_string(),
        })
    }
}

impl VisitPayload {
    pub fn into_new_visit(self, pet_id: PetId) -> NewVisit {
        NewVisit {
            pet_id,
            date: self.date,
            description: self.description,
        }
    }
}
