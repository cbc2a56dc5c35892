// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::{debug, error, warn};

use crate::api::types::{
    GenerateQuery, PasswordResponse, StrengthQuery, StrengthResponse,
};
use crate::core::config::Config;
use crate::generators::{GenerationError, PasswordGenerator};
use crate::strength::analyze_password_strength;

/// Generate a password from text
///
/// Sprinkles symbols and digits into the given text, pads it toward
/// `minLength` and appends a short timestamp suffix.
#[utoipa::path(
    get,
    path = "/api/generate-code",
    tag = "Generator",
    params(GenerateQuery),
    responses(
        (status = 200, description = "Generated password", body = PasswordResponse),
        (status = 400, description = "Text required, or minLength out of range", body = String),
        (status = 500, description = "Generation failed", body = String)
    )
)]
pub async fn generate_code(
    config: web::Data<Config>,
    pairs: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, GenerationError> {
    let query = GenerateQuery::from_pairs(&pairs);

    let text = match query.usable_text() {
        Some(text) => text,
        None => {
            warn!("Rejected generation request without text");
            return Err(GenerationError::text_required());
        }
    };

    let options = query.to_options();
    if options.min_length > config.max_min_length {
        warn!(
            "Rejected generation request with minLength {} (max {})",
            options.min_length, config.max_min_length
        );
        return Err(GenerationError::Validation(format!(
            "minLength must be at most {}",
            config.max_min_length
        )));
    }

    debug!(
        "Generating password (text chars: {}, numbers: {}, symbols: {}, min length: {})",
        text.chars().count(),
        options.include_numbers,
        options.include_symbols,
        options.min_length
    );

    let generator = PasswordGenerator::from_config(&config);
    let password = web::block(move || generator.generate_password(&text, &options))
        .await
        .map_err(|e| GenerationError::Unexpected(e.to_string()))
        .and_then(|result| result)
        .map_err(|e| {
            error!("Error creating password: {}", e);
            e
        })?;

    let strength = query
        .wants_strength()
        .then(|| StrengthResponse::from(analyze_password_strength(&password)));

    Ok(HttpResponse::Ok().json(PasswordResponse { password, strength }))
}

/// Score a password
///
/// Runs the six display checks and returns the score, label and breakdown.
#[utoipa::path(
    get,
    path = "/api/strength",
    tag = "Generator",
    params(StrengthQuery),
    responses(
        (status = 200, description = "Strength assessment", body = StrengthResponse)
    )
)]
pub async fn analyze_password(pairs: web::Query<Vec<(String, String)>>) -> impl Responder {
    let query = StrengthQuery::from_pairs(&pairs);
    let password = query.password.as_deref().unwrap_or("");
    let assessment = analyze_password_strength(password);

    HttpResponse::Ok().json(StrengthResponse::from(assessment))
}
