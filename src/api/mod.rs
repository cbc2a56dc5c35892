// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use crate::core::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_code,
        crate::api::handlers::generator::analyze_password,

        // System endpoints
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::PasswordResponse,
            crate::api::types::StrengthResponse,
            crate::api::types::HealthResponse,
            crate::models::StrengthChecks,
            crate::models::StrengthLabel
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and scoring endpoints"),
        (name = "System", description = "System status")
    ),
    info(
        title = "textpass API",
        version = "0.1.0",
        description = "Turns text into a password and scores its apparent strength",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    log::info!(
        "Starting textpass API server on {}:{}",
        config.web_address, config.web_port
    );

    let bind_addr = (config.web_address.clone(), config.web_port);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // The browser form may be served from another origin
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}

pub mod error;
pub mod types;
pub mod routes;
pub mod handlers;
