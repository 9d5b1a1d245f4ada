//! Pet workflows nested under an owner.

use crate::domain::types::{OwnerId, PetId, PetTypeId};
use crate::dto::pet::PetDto;
use crate::forms::FormError;
use crate::forms::pet::{PetForm, PetPayload};
use crate::repository::{OwnerReader, PetReader, PetWriter};
use crate::services::{ServiceError, ServiceResult, path_id};

/// Fetches a pet only when it belongs to the addressed owner.
pub fn get_owners_pet<R>(repo: &R, owner_id: i32, pet_id: i32) -> ServiceResult<PetDto>
where
    R: OwnerReader + ?Sized,
{
    let owner_id: OwnerId = path_id(owner_id)?;
    let pet_id: PetId = path_id(pet_id)?;

    let owner = repo
        .get_owner_by_id(owner_id)?
        .ok_or(ServiceError::NotFound)?;

    owner
        .pet(pet_id)
        .map(PetDto::from)
        .ok_or(ServiceError::NotFound)
}

/// Registers a new pet for an existing owner.
pub fn add_pet_to_owner<R>(repo: &R, owner_id: i32, form: PetForm) -> ServiceResult<PetDto>
where
    R: OwnerReader + PetReader + PetWriter + ?Sized,
{
    let payload = PetPayload::try_from(form).map_err(|err| {
        log::warn!("Rejected new pet for owner {owner_id}: {err}");
        err
    })?;
    let owner_id: OwnerId = path_id(owner_id)?;

    if repo.get_owner_by_id(owner_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }
    ensure_pet_type(repo, payload.pet_type_id)?;

    let pet = repo
        .create_pet(&payload.into_new_pet(owner_id))
        .map_err(|err| {
            log::error!("Failed to create pet for owner {owner_id}: {err}");
            err
        })?;
    log::info!("Created pet {} for owner {owner_id}", pet.id);

    Ok(PetDto::from(pet))
}

/// Replaces the attributes of a pet that belongs to the addressed owner.
pub fn update_owners_pet<R>(
    repo: &R,
    owner_id: i32,
    pet_id: i32,
    form: PetForm,
) -> ServiceResult<PetDto>
where
    R: OwnerReader + PetReader + PetWriter + ?Sized,
{
    let payload = PetPayload::try_from(form).map_err(|err| {
        log::warn!("Rejected update of pet {pet_id}: {err}");
        err
    })?;
    let owner_id: OwnerId = path_id(owner_id)?;
    let pet_id: PetId = path_id(pet_id)?;

    if repo.get_owner_by_id(owner_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }
    match repo.get_pet_by_id(pet_id)? {
        Some(pet) if pet.owner_id == owner_id => {}
        _ => return Err(ServiceError::NotFound),
    }
    ensure_pet_type(repo, payload.pet_type_id)?;

    let pet = repo
        .update_pet(pet_id, &payload.into_update())
        .map_err(|err| {
            log::error!("Failed to update pet {pet_id}: {err}");
            err
        })?;
    log::info!("Updated pet {pet_id} of owner {owner_id}");

    Ok(PetDto::from(pet))
}

fn ensure_pet_type<R>(repo: &R, pet_type_id: PetTypeId) -> ServiceResult<()>
where
    R: PetReader + ?Sized,
{
    match repo.get_pet_type_by_id(pet_type_id)? {
        Some(_) => Ok(()),
        None => {
            log::warn!("Pet type {pet_type_id} does not exist");
            Err(FormError::UnknownPetType.into())
        }
    }
}
