// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // GET: Derive a password from text
            .route("/generate-code", web::get().to(handlers::generator::generate_code))
            // GET: Score a password
            .route("/strength", web::get().to(handlers::generator::analyze_password))
            // GET: Liveness
            .route("/health", web::get().to(handlers::system::health))
    );
}
