use actix_web::http::header;
use actix_web::{HttpResponse, Responder, post, web};

use crate::forms::visit::VisitForm;
use crate::repository::ClinicRepository;
use crate::routes::error_response;
use crate::services::visits;

#[post("/owners/{owner_id}/pets/{pet_id}/visits")]
pub async fn add_visit_to_owner(
    path: web::Path<(i32, i32)>,
    form: web::Json<VisitForm>,
    repo: web::Data<dyn ClinicRepository>,
) -> impl Responder {
    let (owner_id, pet_id) = path.into_inner();

    match visits::add_visit_to_owner(repo.get_ref(), owner_id, pet_id, form.into_inner()) {
        Ok(visit) => {
            let location = format!("/api/visits/{}", visit.id.unwrap_or_default());
            HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(visit)
        }
        Err(err) => error_response(err),
    }
}
