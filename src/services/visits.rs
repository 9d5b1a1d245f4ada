//! Visit workflows nested under an owner's pet.

use crate::domain::types::{OwnerId, PetId};
use crate::dto::visit::VisitDto;
use crate::forms::visit::{VisitForm, VisitPayload};
use crate::repository::{OwnerReader, VisitWriter};
use crate::services::{ServiceError, ServiceResult, path_id};

/// Records a visit for a pet of the addressed owner.
pub fn add_visit_to_owner<R>(
    repo: &R,
    owner_id: i32,
    pet_id: i32,
    form: VisitForm,
) -> ServiceResult<VisitDto>
where
    R: OwnerReader + VisitWriter + ?Sized,
{
    let payload = VisitPayload::try_from(form).map_err(|err| {
        log::warn!("Rejected new visit for pet {pet_id}: {err}");
        err
    })?;
    let owner_id: OwnerId = path_id(owner_id)?;
    let pet_id: PetId = path_id(pet_id)?;

    let owner = repo
        .get_owner_by_id(owner_id)?
        .ok_or(ServiceError::NotFound)?;
    if owner.pet(pet_id).is_none() {
        return Err(ServiceError::NotFound);
    }

    let visit = repo
        .create_visit(&payload.into_new_visit(pet_id))
        .map_err(|err| {
            log::error!("Failed to create visit for pet {pet_id}: {err}");
            err
        })?;
    log::info!("Created visit {} for pet {pet_id}", visit.id);

    Ok(VisitDto::from(visit))
}
