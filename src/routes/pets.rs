use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, post, put, web};

use crate::forms::pet::PetForm;
use crate::repository::ClinicRepository;
use crate::routes::error_response;
use crate::services::pets;

#[get("/owners/{owner_id}/pets/{pet_id}")]
pub async fn get_owners_pet(
    path: web::Path<(i32, i32)>,
    repo: web::Data<dyn ClinicRepository>,
) -> impl Responder {
    let (owner_id, pet_id) = path.into_inner();

    match pets::get_owners_pet(repo.get_ref(), owner_id, pet_id) {
        Ok(pet) => HttpResponse::Ok().json(pet),
        Err(err) => error_response(err),
    }
}

#[post("/owners/{owner_id}/pets")]
pub async fn add_pet_to_owner(
    owner_id: web::Path<i32>,
    form: web::Json<PetForm>,
    repo: web::Data<dyn ClinicRepository>,
) -> impl Responder {
    match pets::add_pet_to_owner(repo.get_ref(), owner_id.into_inner(), form.into_inner()) {
        Ok(pet) => {
            let location = format!("/api/pets/{}", pet.id.unwrap_or_default());
            HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(pet)
        }
        Err(err) => error_response(err),
    }
}

#[put("/owners/{owner_id}/pets/{pet_id}")]
pub async fn update_owners_pet(
    path: web::Path<(i32, i32)>,
    form: web::Json<PetForm>,
    repo: web::Data<dyn ClinicRepository>,
) -> impl Responder {
    let (owner_id, pet_id) = path.into_inner();

    match pets::update_owners_pet(repo.get_ref(), owner_id, pet_id, form.into_inner()) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
