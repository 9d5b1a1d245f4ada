//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::owner::{NewOwner, Owner, UpdateOwner};
use crate::domain::pet::{NewPet, Pet, PetType, UpdatePet};
use crate::domain::types::{OwnerId, PetId, PetTypeId, VisitId};
use crate::domain::visit::{NewVisit, Visit};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    OwnerReader, OwnerWriter, PetReader, PetWriter, VisitReader, VisitWriter,
};

mock! {
    pub Repository {}

    impl OwnerReader for Repository {
        fn get_owner_by_id(&self, id: OwnerId) -> RepositoryResult<Option<Owner>>;
        fn list_owners_by_last_name(&self, last_name: &str) -> RepositoryResult<Vec<Owner>>;
        fn list_owners(&self) -> RepositoryResult<Vec<Owner>>;
    }

    impl OwnerWriter for Repository {
        fn create_owner(&self, new_owner: &NewOwner) -> RepositoryResult<Owner>;
        fn update_owner(&self, owner_id: OwnerId, updates: &UpdateOwner) -> RepositoryResult<Owner>;
        fn delete_owner(&self, owner_id: OwnerId) -> RepositoryResult<()>;
    }

    impl PetReader for Repository {
        fn get_pet_by_id(&self, id: PetId) -> RepositoryResult<Option<Pet>>;
        fn get_pet_type_by_id(&self, id: PetTypeId) -> RepositoryResult<Option<PetType>>;
        fn list_pet_types(&self) -> RepositoryResult<Vec<PetType>>;
    }

    impl PetWriter for Repository {
        fn create_pet(&self, new_pet: &NewPet) -> RepositoryResult<Pet>;
        fn update_pet(&self, pet_id: PetId, updates: &UpdatePet) -> RepositoryResult<Pet>;
    }

    impl VisitReader for Repository {
        fn get_visit_by_id(&self, id: VisitId) -> RepositoryResult<Option<Visit>>;
    }

    impl VisitWriter for Repository {
        fn create_visit(&self, new_visit: &NewVisit) -> RepositoryResult<Visit>;
    }
}
