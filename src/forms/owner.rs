use serde::Deserialize;
use validator::Validate;

use crate::domain::owner::{NewOwner, UpdateOwner};
use crate::forms::{FormError, validate_not_blank};

/// Body of owner create and update requests.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OwnerForm {
    /// Accepted for compatibility and ignored; identity comes from the path.
    pub id: Option<i32>,
    #[validate(
        required(message = "must not be null"),
        custom(function = "validate_not_blank")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "must not be null"),
        custom(function = "validate_not_blank")
    )]
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
}

impl TryFrom<OwnerForm> for NewOwner {
    type Error = FormError;

    fn try_from(form: OwnerForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewOwner::new(
            form.first_name.unwrap_or_default(),
            form.last_name.unwrap_or_default(),
            form.address,
            form.city,
            form.telephone,
        ))
    }
}

impl TryFrom<OwnerForm> for UpdateOwner {
    type Error = FormError;

    fn try_from(form: OwnerForm) -> Result<Self, Self::Error> {
        NewOwner::try_from(form).map(UpdateOwner::from)
    }
}
