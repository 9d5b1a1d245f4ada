//! The classic clinic data set used to bootstrap an empty database.
//!
//! Pet types are reference data created by the migrations; the rows here
//! refer to them by name.

use chrono::NaiveDate;

use crate::domain::owner::NewOwner;
use crate::domain::pet::NewPet;
use crate::domain::visit::NewVisit;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{OwnerReader, OwnerWriter, PetReader, PetWriter, VisitWriter};

/// First name, last name, address, city, telephone.
const OWNERS: [(&str, &str, &str, &str, &str); 10] = [
    ("George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
    ("Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
    ("Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
    ("Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"),
    ("Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"),
    ("Jean", "Coleman", "105 N. Lake St.", "Monona", "6085552654"),
    ("Jeff", "Black", "1450 Oak Blvd.", "Monona", "6085555387"),
    ("Maria", "Escobito", "345 Maple St.", "Madison", "6085557683"),
    ("David", "Schroeder", "2749 Blackhawk Trail", "Madison", "6085559435"),
    ("Carlos", "Estaban", "2335 Independence La.", "Waunakee", "6085555487"),
];

/// Name, birth date, pet type name, index into `OWNERS`.
const PETS: [(&str, (i32, u32, u32), &str, usize); 13] = [
    ("Leo", (2010, 9, 7), "cat", 0),
    ("Basil", (2012, 8, 6), "hamster", 1),
    ("Rosy", (2011, 4, 17), "dog", 2),
    ("Jewel", (2010, 3, 7), "dog", 2),
    ("Iggy", (2010, 11, 30), "lizard", 3),
    ("George", (2010, 1, 20), "snake", 4),
    ("Samantha", (2012, 9, 4), "cat", 5),
    ("Max", (2012, 9, 4), "cat", 5),
    ("Lucky", (2011, 8, 6), "bird", 6),
    ("Mulligan", (2007, 2, 24), "dog", 7),
    ("Freddy", (2010, 3, 9), "bird", 8),
    ("Lucky", (2010, 6, 24), "dog", 9),
    ("Sly", (2012, 6, 8), "cat", 9),
];

/// Index into `PETS`, visit date, description.
const VISITS: [(usize, (i32, u32, u32), &str); 4] = [
    (6, (2013, 1, 1), "rabies shot"),
    (7, (2013, 1, 2), "rabies shot"),
    (7, (2013, 1, 3), "neutered"),
    (6, (2013, 1, 4), "spayed"),
];

fn date((year, month, day): (i32, u32, u32)) -> RepositoryResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        RepositoryError::ValidationError(format!("invalid date {year}-{month}-{day}"))
    })
}

/// Fills an empty database with the sample owners, pets and visits.
///
/// Returns `false` without touching anything when owners already exist.
pub fn load_sample_data<R>(repo: &R) -> RepositoryResult<bool>
where
    R: OwnerReader + OwnerWriter + PetReader + PetWriter + VisitWriter + ?Sized,
{
    if !repo.list_owners()?.is_empty() {
        log::info!("Sample data skipped: owners already present");
        return Ok(false);
    }

    let pet_types = repo.list_pet_types()?;

    let owners = OWNERS
        .iter()
        .map(|&(first_name, last_name, address, city, telephone)| {
            repo.create_owner(&NewOwner::new(
                first_name.to_string(),
                last_name.to_string(),
                Some(address.to_string()),
                Some(city.to_string()),
                Some(telephone.to_string()),
            ))
        })
        .collect::<RepositoryResult<Vec<_>>>()?;

    let mut pets = Vec::with_capacity(PETS.len());
    for &(name, birth_date, type_name, owner_index) in &PETS {
        let pet_type = pet_types
            .iter()
            .find(|pet_type| pet_type.name == type_name)
            .ok_or_else(|| {
                RepositoryError::ValidationError(format!("unknown pet type {type_name}"))
            })?;

        pets.push(repo.create_pet(&NewPet {
            owner_id: owners[owner_index].id,
            name: name.to_string(),
            birth_date: date(birth_date)?,
            pet_type_id: pet_type.id,
        })?);
    }

    for &(pet_index, visit_date, description) in &VISITS {
        repo.create_visit(&NewVisit {
            pet_id: pets[pet_index].id,
            date: date(visit_date)?,
            description: description.to_string(),
        })?;
    }

    log::info!(
        "Loaded sample data: {} owners, {} pets, {} visits",
        owners.len(),
        pets.len(),
        VISITS.len()
    );

    Ok(true)
}
