//! Owner workflows behind `/api/owners`.

use crate::domain::owner::{NewOwner, UpdateOwner};
use crate::domain::types::OwnerId;
use crate::dto::owner::OwnerDto;
use crate::forms::owner::OwnerForm;
use crate::repository::{OwnerReader, OwnerWriter};
use crate::services::{ServiceError, ServiceResult, path_id};

/// Filters accepted by the owners listing.
#[derive(Debug, Default)]
pub struct OwnersQuery {
    /// Prefix of the last name to search for; lists every owner when absent.
    pub last_name: Option<String>,
}

/// Fetches a single owner with their pets.
pub fn get_owner<R>(repo: &R, owner_id: i32) -> ServiceResult<OwnerDto>
where
    R: OwnerReader + ?Sized,
{
    let owner_id: OwnerId = path_id(owner_id)?;

    let owner = repo
        .get_owner_by_id(owner_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(OwnerDto::from(owner))
}

/// Lists owners in repository order. An empty result is reported as not found.
pub fn list_owners<R>(repo: &R, query: OwnersQuery) -> ServiceResult<Vec<OwnerDto>>
where
    R: OwnerReader + ?Sized,
{
    let owners = match query.last_name.as_deref() {
        Some(last_name) => repo.list_owners_by_last_name(last_name)?,
        None => repo.list_owners()?,
    };

    if owners.is_empty() {
        return Err(ServiceError::NotFound);
    }

    Ok(owners.iter().map(OwnerDto::from).collect())
}

/// Validates the body and persists a new owner.
pub fn add_owner<R>(repo: &R, form: OwnerForm) -> ServiceResult<OwnerDto>
where
    R: OwnerWriter + ?Sized,
{
    let new_owner = NewOwner::try_from(form).map_err(|err| {
        log::warn!("Rejected new owner: {err}");
        err
    })?;

    let owner = repo.create_owner(&new_owner).map_err(|err| {
        log::error!("Failed to create owner: {err}");
        err
    })?;
    log::info!("Created owner {}", owner.id);

    Ok(OwnerDto::from(owner))
}

/// Replaces the attributes of the owner addressed by `owner_id`.
///
/// The identity always comes from the path; an `id` in the body is ignored.
pub fn update_owner<R>(repo: &R, owner_id: i32, form: OwnerForm) -> ServiceResult<OwnerDto>
where
    R: OwnerReader + OwnerWriter + ?Sized,
{
    let updates = UpdateOwner::try_from(form).map_err(|err| {
        log::warn!("Rejected update of owner {owner_id}: {err}");
        err
    })?;
    let owner_id: OwnerId = path_id(owner_id)?;

    if repo.get_owner_by_id(owner_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let owner = repo.update_owner(owner_id, &updates).map_err(|err| {
        log::error!("Failed to update owner {owner_id}: {err}");
        err
    })?;
    log::info!("Updated owner {owner_id}");

    Ok(OwnerDto::from(owner))
}

/// Deletes an owner together with their pets and visits.
pub fn delete_owner<R>(repo: &R, owner_id: i32) -> ServiceResult<()>
where
    R: OwnerReader + OwnerWriter + ?Sized,
{
    let owner_id: OwnerId = path_id(owner_id)?;

    if repo.get_owner_by_id(owner_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.delete_owner(owner_id).map_err(|err| {
        log::error!("Failed to delete owner {owner_id}: {err}");
        err
    })?;
    log::info!("Deleted owner {owner_id}");

    Ok(())
}
