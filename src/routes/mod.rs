//! HTTP handlers mounted under `/api`.

use actix_web::error::JsonPayloadError;
use actix_web::{Error, HttpRequest, HttpResponse, error::InternalError};

use crate::dto::problem::ProblemDetail;
use crate::services::ServiceError;

pub mod owners;
pub mod pets;
pub mod visits;

/// Maps a failed service call onto the response sent to the client.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Form(err) => {
            HttpResponse::BadRequest().json(ProblemDetail::from_form_error(&err))
        }
        err @ (ServiceError::TypeConstraint(_) | ServiceError::Repository(_)) => {
            log::error!("Request failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Turns unparseable JSON bodies into a problem response instead of a plain-text 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    log::warn!("Rejected malformed request body: {err}");
    let response =
        HttpResponse::BadRequest().json(ProblemDetail::bad_request("Bad Request", err.to_string()));
    InternalError::from_response(err, response).into()
}
