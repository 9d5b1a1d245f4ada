#![allow(dead_code)]

use chrono::NaiveDate;
use petclinic_rest::db::{DbPool, establish_connection_pool, run_migrations};
use petclinic_rest::domain::owner::{NewOwner, Owner};
use petclinic_rest::domain::pet::{NewPet, Pet, PetType};
use petclinic_rest::domain::visit::NewVisit;
use petclinic_rest::repository::{
    DieselRepository, OwnerWriter, PetReader, PetWriter, VisitWriter,
};
use tempfile::TempDir;

/// Migrated SQLite database living in a temporary directory.
///
/// The directory and the database files go away when the value is dropped.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(filename);
        let pool = establish_connection_pool(path.to_str().unwrap()).unwrap();
        run_migrations(&pool).unwrap();
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

/// Small clinic used across the integration tests.
///
/// Owner 1 (George Franklin) has Rosy with two visits, owner 2 (Betty Davis)
/// has Basil and owner 3 (Harold Davis) has no pets.
pub struct Clinic {
    pub db: TestDb,
    pub repo: DieselRepository,
    pub cat: PetType,
    pub dog: PetType,
    pub george: Owner,
    pub betty: Owner,
    pub harold: Owner,
    pub rosy: Pet,
    pub basil: Pet,
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn new_owner(first_name: &str, last_name: &str) -> NewOwner {
    NewOwner::new(
        first_name.to_string(),
        last_name.to_string(),
        Some("110 W. Liberty St.".to_string()),
        Some("Madison".to_string()),
        Some("6085551023".to_string()),
    )
}

impl Clinic {
    pub fn new(filename: &str) -> Self {
        let db = TestDb::new(filename);
        let repo = db.repo();
        let pet_type = |name: &str| {
            repo.list_pet_types()
                .unwrap()
                .into_iter()
                .find(|pet_type| pet_type.name == name)
                .unwrap()
        };
        let cat = pet_type("cat");
        let dog = pet_type("dog");

        let george = repo.create_owner(&new_owner("George", "Franklin")).unwrap();
        let betty = repo.create_owner(&new_owner("Betty", "Davis")).unwrap();
        let harold = repo.create_owner(&new_owner("Harold", "Davis")).unwrap();

        let rosy = repo
            .create_pet(&NewPet {
                owner_id: george.id,
                name: "Rosy".to_string(),
                birth_date: date(2011, 4, 17),
                pet_type_id: dog.id,
            })
            .unwrap();
        let basil = repo
            .create_pet(&NewPet {
                owner_id: betty.id,
                name: "Basil".to_string(),
                birth_date: date(2012, 8, 6),
                pet_type_id: cat.id,
            })
            .unwrap();

        for (day, description) in [(1, "rabies shot"), (4, "spayed")] {
            repo.create_visit(&NewVisit {
                pet_id: rosy.id,
                date: date(2013, 1, day),
                description: description.to_string(),
            })
            .unwrap();
        }

        Self {
            db,
            repo,
            cat,
            dog,
            george,
            betty,
            harold,
            rosy,
            basil,
        }
    }
}
