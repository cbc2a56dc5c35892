// src/cli/handlers.rs
use anyhow::{bail, Result};

use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{GenerationOptions, StrengthAssessment};

// Handlers for CLI commands; each returns the text to print
pub fn handle_generate(
    config: &Config,
    text: &str,
    no_numbers: bool,
    no_symbols: bool,
    min_length: Option<i64>,
) -> Result<String> {
    let min_length = min_length.unwrap_or(config.default_min_length);
    if min_length > config.max_min_length {
        bail!("--min-length must be at most {}", config.max_min_length);
    }

    let options = GenerationOptions {
        include_numbers: !no_numbers,
        include_symbols: !no_symbols,
        min_length,
        duplicate_suffix: false,
    };

    let generator = PasswordGenerator::from_config(config);
    let password = generator.generate_password(text, &options)?;
    let assessment = generator.analyze_password_strength(&password);

    Ok(format!(
        "{}\n{}",
        password,
        format_assessment(password.chars().count(), &assessment)
    ))
}

pub fn handle_score(password: &str) -> String {
    let assessment = crate::strength::analyze_password_strength(password);
    format_assessment(password.chars().count(), &assessment)
}

fn format_assessment(length: usize, assessment: &StrengthAssessment) -> String {
    let label = match assessment.label {
        Some(label) => label.to_string(),
        None => "-".to_string(),
    };

    let mut out = format!(
        "Strength: {:.0}/100 ({})\nLength: {} characters",
        assessment.score, label, length
    );
    for missing in assessment.checks.failed() {
        out.push_str(&format!("\n  missing: {}", missing));
    }
    out
}
