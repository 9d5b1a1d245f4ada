use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use chrono::Utc;
use petclinic_rest::configure;
use petclinic_rest::domain::types::{OwnerId, PetId, VisitId};
use petclinic_rest::repository::{
    ClinicRepository, DieselRepository, OwnerReader, PetReader, VisitReader,
};
use serde_json::{Value, json};

mod common;

use common::{Clinic, TestDb};

macro_rules! init_app {
    ($repo:expr) => {{
        let repo: Arc<dyn ClinicRepository> = Arc::new($repo.clone());
        test::init_service(
            App::new()
                .app_data(web::Data::from(repo))
                .configure(configure),
        )
        .await
    }};
}

fn owner_body(first_name: Value, last_name: Value) -> Value {
    json!({
        "id": null,
        "firstName": first_name,
        "lastName": last_name,
        "address": "110 W. Liberty St.",
        "city": "Madison",
        "telephone": "6085551023",
        "pets": []
    })
}

fn pet_body(name: &str, type_id: i32) -> Value {
    json!({
        "id": null,
        "name": name,
        "birthDate": "2020-09-07",
        "type": {"id": type_id, "name": "dog"}
    })
}

fn owner_count(repo: &DieselRepository) -> usize {
    repo.list_owners().unwrap().len()
}

#[actix_web::test]
async fn test_get_owner_returns_owner_with_pets() {
    let clinic = Clinic::new("test_get_owner_returns_owner_with_pets.db");
    let app = init_app!(clinic.repo);

    let req = test::TestRequest::get().uri("/api/owners/1").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["firstName"], "George");
    assert_eq!(body["lastName"], "Franklin");
    assert_eq!(body["pets"][0]["id"], 1);
    assert_eq!(body["pets"][0]["name"], "Rosy");
    assert_eq!(body["pets"][0]["ownerId"], 1);
    assert_eq!(body["pets"][0]["type"]["name"], "dog");
    assert_eq!(body["pets"][0]["visits"][0]["date"], "2013-01-04");
    assert_eq!(body["pets"][0]["visits"][1]["date"], "2013-01-01");
}

#[actix_web::test]
async fn test_get_unknown_owner_is_not_found() {
    let clinic = Clinic::new("test_get_unknown_owner_is_not_found.db");
    let app = init_app!(clinic.repo);

    for uri in [
        "/api/owners/999",
        "/api/owners/0",
        "/api/owners/-1",
        "/api/owners/abc",
        "/api/owners/99999999999",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_web::test]
async fn test_list_owners() {
    let clinic = Clinic::new("test_list_owners.db");
    let app = init_app!(clinic.repo);

    let req = test::TestRequest::get().uri("/api/owners").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|owner| owner["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let req = test::TestRequest::get()
        .uri("/api/owners?lastName=Davis")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|owner| owner["firstName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Betty", "Harold"]);
}

#[actix_web::test]
async fn test_empty_listing_is_not_found() {
    let clinic = Clinic::new("test_empty_listing_is_not_found.db");
    let app = init_app!(clinic.repo);

    for uri in ["/api/owners?lastName=0", "/api/owners?lastName=davis"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let test_db = TestDb::new("test_empty_listing_is_not_found_empty.db");
    let app = init_app!(test_db.repo());
    let req = test::TestRequest::get().uri("/api/owners").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_add_owner() {
    let clinic = Clinic::new("test_add_owner.db");
    let app = init_app!(clinic.repo);

    let req = test::TestRequest::post()
        .uri("/api/owners")
        .set_json(owner_body(json!("Maria"), json!("Escobito")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/api/owners/4"
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 4);
    assert_eq!(body["firstName"], "Maria");
    assert_eq!(body["pets"], json!([]));

    let stored = clinic
        .repo
        .get_owner_by_id(OwnerId::new(4).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(stored.last_name, "Escobito");
}

#[actix_web::test]
async fn test_add_owner_without_required_names_is_rejected() {
    let clinic = Clinic::new("test_add_owner_without_required_names_is_rejected.db");
    let app = init_app!(clinic.repo);

    let bodies = [
        (owner_body(Value::Null, json!("Franklin")), "firstName"),
        (owner_body(json!("George"), Value::Null), "lastName"),
        (owner_body(json!("   "), json!("Franklin")), "firstName"),
        (owner_body(json!("George"), json!("")), "lastName"),
    ];
    for (body, field) in bodies {
        let req = test::TestRequest::post()
            .uri("/api/owners")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let problem: Value = test::read_body_json(resp).await;
        assert_eq!(problem["status"], 400);
        assert_eq!(problem["schemaValidationErrors"][0]["field"], field);
    }

    assert_eq!(owner_count(&clinic.repo), 3);
}

#[actix_web::test]
async fn test_malformed_body_is_bad_request() {
    let clinic = Clinic::new("test_malformed_body_is_bad_request.db");
    let app = init_app!(clinic.repo);

    let req = test::TestRequest::post()
        .uri("/api/owners")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"firstName\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: Value = test::read_body_json(resp).await;
    assert_eq!(problem["type"], "about:blank");
    assert_eq!(problem["status"], 400);
    assert_eq!(owner_count(&clinic.repo), 3);
}

#[actix_web::test]
async fn test_update_owner_keeps_path_identity() {
    let clinic = Clinic::new("test_update_owner_keeps_path_identity.db");
    let app = init_app!(clinic.repo);

    let mut body = owner_body(json!("GeorgeI"), json!("Franklin"));
    body["id"] = json!(7);
    let req = test::TestRequest::put()
        .uri("/api/owners/1")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(resp).await.is_empty());

    let owner = clinic
        .repo
        .get_owner_by_id(clinic.george.id)
        .unwrap()
        .unwrap();
    assert_eq!(owner.first_name, "GeorgeI");
    assert_eq!(owner.pets.len(), 1);
    assert!(
        clinic
            .repo
            .get_owner_by_id(OwnerId::new(7).unwrap())
            .unwrap()
            .is_none()
    );
}

#[actix_web::test]
async fn test_update_owner_errors() {
    let clinic = Clinic::new("test_update_owner_errors.db");
    let app = init_app!(clinic.repo);

    let req = test::TestRequest::put()
        .uri("/api/owners/999")
        .set_json(owner_body(json!("George"), json!("Franklin")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri("/api/owners/1")
        .set_json(owner_body(json!(""), json!("Franklin")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let owner = clinic
        .repo
        .get_owner_by_id(clinic.george.id)
        .unwrap()
        .unwrap();
    assert_eq!(owner.first_name, "George");
}

#[actix_web::test]
async fn test_delete_owner() {
    let clinic = Clinic::new("test_delete_owner.db");
    let app = init_app!(clinic.repo);

    let req = test::TestRequest::delete().uri("/api/owners/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri("/api/owners/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(clinic.repo.get_pet_by_id(clinic.rosy.id).unwrap().is_none());

    let req = test::TestRequest::delete()
        .uri("/api/owners/999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_get_owners_pet() {
    let clinic = Clinic::new("test_get_owners_pet.db");
    let app = init_app!(clinic.repo);

    let req = test::TestRequest::get()
        .uri("/api/owners/1/pets/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Rosy");
    assert_eq!(body["birthDate"], "2011-04-17");
    assert_eq!(body["visits"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri("/api/owners/2/pets/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_add_pet_to_owner() {
    let clinic = Clinic::new("test_add_pet_to_owner.db");
    let app = init_app!(clinic.repo);

    let req = test::TestRequest::post()
        .uri("/api/owners/3/pets")
        .set_json(pet_body("Iggy", clinic.dog.id.get()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/api/pets/3");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 3);
    assert_eq!(body["ownerId"], 3);
    assert_eq!(body["type"]["name"], "dog");

    let harold = clinic
        .repo
        .get_owner_by_id(clinic.harold.id)
        .unwrap()
        .unwrap();
    assert_eq!(harold.pets.len(), 1);
}

#[actix_web::test]
async fn test_add_pet_errors() {
    let clinic = Clinic::new("test_add_pet_errors.db");
    let app = init_app!(clinic.repo);

    let req = test::TestRequest::post()
        .uri("/api/owners/42/pets")
        .set_json(pet_body("Ghost", clinic.dog.id.get()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/owners/3/pets")
        .set_json(pet_body("Ghost", 42))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: Value = test::read_body_json(resp).await;
    assert_eq!(problem["schemaValidationErrors"][0]["field"], "type");

    let req = test::TestRequest::post()
        .uri("/api/owners/3/pets")
        .set_json(json!({"name": "Ghost", "type": {"id": 1}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: Value = test::read_body_json(resp).await;
    assert_eq!(problem["schemaValidationErrors"][0]["field"], "birthDate");

    assert!(clinic.repo.get_pet_by_id(PetId::new(3).unwrap()).unwrap().is_none());
}

#[actix_web::test]
async fn test_update_owners_pet() {
    let clinic = Clinic::new("test_update_owners_pet.db");
    let app = init_app!(clinic.repo);

    let req = test::TestRequest::put()
        .uri("/api/owners/1/pets/1")
        .set_json(pet_body("Rosy I", clinic.cat.id.get()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let rosy = clinic.repo.get_pet_by_id(clinic.rosy.id).unwrap().unwrap();
    assert_eq!(rosy.name, "Rosy I");
    assert_eq!(rosy.pet_type, clinic.cat);
    assert_eq!(rosy.visits.len(), 2);

    let req = test::TestRequest::put()
        .uri("/api/owners/2/pets/1")
        .set_json(pet_body("Stolen", clinic.cat.id.get()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    for uri in ["/api/owners/1/pets/99", "/api/owners/999/pets/1", "/api/owners/0/pets/3"] {
        let req = test::TestRequest::put()
            .uri(uri)
            .set_json(pet_body("Ghost", clinic.cat.id.get()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let basil = clinic.repo.get_pet_by_id(clinic.basil.id).unwrap().unwrap();
    assert_eq!(basil.name, "Basil");
}

#[actix_web::test]
async fn test_add_visit_to_owner() {
    let clinic = Clinic::new("test_add_visit_to_owner.db");
    let app = init_app!(clinic.repo);

    let req = test::TestRequest::post()
        .uri("/api/owners/2/pets/2/visits")
        .set_json(json!({"id": null, "date": "2013-01-02", "description": "neutered"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/api/visits/3"
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["petId"], 2);
    assert_eq!(body["date"], "2013-01-02");

    let req = test::TestRequest::post()
        .uri("/api/owners/2/pets/2/visits")
        .set_json(json!({"description": "check-up"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let visit = clinic
        .repo
        .get_visit_by_id(VisitId::new(4).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(visit.date, Utc::now().date_naive());
}

#[actix_web::test]
async fn test_add_visit_errors() {
    let clinic = Clinic::new("test_add_visit_errors.db");
    let app = init_app!(clinic.repo);

    for uri in ["/api/owners/2/pets/1/visits", "/api/owners/999/pets/1/visits"] {
        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(json!({"date": "2013-01-02", "description": "neutered"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let req = test::TestRequest::post()
        .uri("/api/owners/1/pets/1/visits")
        .set_json(json!({"date": "2013-01-02", "description": " "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: Value = test::read_body_json(resp).await;
    assert_eq!(
        problem["schemaValidationErrors"][0]["field"],
        "description"
    );

    assert!(
        clinic
            .repo
            .get_visit_by_id(VisitId::new(3).unwrap())
            .unwrap()
            .is_none()
    );
}
