use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;

use crate::forms::owner::OwnerForm;
use crate::repository::ClinicRepository;
use crate::routes::error_response;
use crate::services::owners::{self, OwnersQuery};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListOwnersQueryParams {
    last_name: Option<String>,
}

#[get("/owners")]
pub async fn list_owners(
    params: web::Query<ListOwnersQueryParams>,
    repo: web::Data<dyn ClinicRepository>,
) -> impl Responder {
    let query = OwnersQuery {
        last_name: params.into_inner().last_name,
    };

    match owners::list_owners(repo.get_ref(), query) {
        Ok(owners) => HttpResponse::Ok().json(owners),
        Err(err) => error_response(err),
    }
}

#[get("/owners/{owner_id}")]
pub async fn get_owner(
    owner_id: web::Path<i32>,
    repo: web::Data<dyn ClinicRepository>,
) -> impl Responder {
    match owners::get_owner(repo.get_ref(), owner_id.into_inner()) {
        Ok(owner) => HttpResponse::Ok().json(owner),
        Err(err) => error_response(err),
    }
}

#[post("/owners")]
pub async fn add_owner(
    form: web::Json<OwnerForm>,
    repo: web::Data<dyn ClinicRepository>,
) -> impl Responder {
    match owners::add_owner(repo.get_ref(), form.into_inner()) {
        Ok(owner) => {
            let location = format!("/api/owners/{}", owner.id.unwrap_or_default());
            HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(owner)
        }
        Err(err) => error_response(err),
    }
}

#[put("/owners/{owner_id}")]
pub async fn update_owner(
    owner_id: web::Path<i32>,
    form: web::Json<OwnerForm>,
    repo: web::Data<dyn ClinicRepository>,
) -> impl Responder {
    match owners::update_owner(repo.get_ref(), owner_id.into_inner(), form.into_inner()) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

#[delete("/owners/{owner_id}")]
pub async fn delete_owner(
    owner_id: web::Path<i32>,
    repo: web::Data<dyn ClinicRepository>,
) -> impl Responder {
    match owners::delete_owner(repo.get_ref(), owner_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}
