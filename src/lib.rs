#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::{ClinicRepository, DieselRepository};

pub mod db;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
pub mod services;

/// Registers the JSON API under `/api`.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    use crate::routes::{owners, pets, visits};

    cfg.app_data(web::JsonConfig::default().error_handler(routes::json_error_handler))
        .service(
            web::scope("/api")
                .service(owners::list_owners)
                .service(owners::get_owner)
                .service(owners::add_owner)
                .service(owners::update_owner)
                .service(owners::delete_owner)
                .service(pets::get_owners_pet)
                .service(pets::add_pet_to_owner)
                .service(pets::update_owners_pet)
                .service(visits::add_visit_to_owner),
        );
}

/// Opens the database, brings its schema up to date and optionally seeds it.
#[cfg(feature = "server")]
pub fn build_repository(
    server_config: &ServerConfig,
) -> repository::errors::RepositoryResult<Arc<dyn ClinicRepository>> {
    let pool = db::establish_connection_pool(&server_config.database_url)?;
    db::run_migrations(&pool)?;

    let repo = DieselRepository::new(pool);
    if server_config.sample_data {
        repository::sample_data::load_sample_data(&repo)?;
    }
    Ok(Arc::new(repo))
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = build_repository(&server_config).map_err(|e| {
        std::io::Error::other(format!("Failed to initialise repository: {e}"))
    })?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::from(repo.clone()))
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
