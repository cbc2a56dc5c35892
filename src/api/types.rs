// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{GenerationOptions, StrengthAssessment, StrengthChecks, DEFAULT_MIN_LENGTH};
use crate::utils::{parse_leading_int, strip_whitespace};

// Generator requests and responses
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// Text to derive the password from (required, whitespace is removed)
    pub text: Option<String>,
    /// Insert digits when present with a non-empty value
    pub include_numbers: Option<String>,
    /// Insert symbols when present with a non-empty value
    pub include_symbols: Option<String>,
    /// Minimum length target, parsed as a leading integer (default: 1)
    pub min_length: Option<String>,
    /// Also return the strength assessment when present with a non-empty value
    pub with_strength: Option<String>,
}

/// A query flag is on when it was sent with any non-empty value, so
/// `includeNumbers=false` still turns the feature on.
pub fn flag_is_set(flag: &Option<String>) -> bool {
    flag.as_deref().map_or(false, |v| !v.is_empty())
}

/// First value sent for `key`; later repeats are ignored.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

impl GenerateQuery {
    /// Build from raw query pairs, keeping the first value of a repeated key.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        GenerateQuery {
            text: first_value(pairs, "text"),
            include_numbers: first_value(pairs, "includeNumbers"),
            include_symbols: first_value(pairs, "includeSymbols"),
            min_length: first_value(pairs, "minLength"),
            with_strength: first_value(pairs, "withStrength"),
        }
    }

    /// The whitespace-free text, or `None` when nothing usable was sent.
    pub fn usable_text(&self) -> Option<String> {
        self.text
            .as_deref()
            .map(strip_whitespace)
            .filter(|t| !t.is_empty())
    }

    pub fn to_options(&self) -> GenerationOptions {
        let min_length = self
            .min_length
            .as_deref()
            .and_then(parse_leading_int)
            .unwrap_or(DEFAULT_MIN_LENGTH);

        GenerationOptions {
            include_numbers: flag_is_set(&self.include_numbers),
            include_symbols: flag_is_set(&self.include_symbols),
            min_length,
            duplicate_suffix: false,
        }
    }

    pub fn wants_strength(&self) -> bool {
        flag_is_set(&self.with_strength)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordResponse {
    /// Generated password
    pub password: String,
    /// Strength assessment (only when `withStrength` was requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<StrengthResponse>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StrengthQuery {
    /// Password to score (missing is treated as empty)
    pub password: Option<String>,
}

impl StrengthQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        StrengthQuery {
            password: first_value(pairs, "password"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StrengthResponse {
    /// Score between 0 and 100
    pub strength: f64,
    /// "Weak", "Medium", "Strong", or empty for an empty password
    pub label: String,
    /// Result of each individual check
    pub checks: StrengthChecks,
}

impl From<StrengthAssessment> for StrengthResponse {
    fn from(assessment: StrengthAssessment) -> Self {
        StrengthResponse {
            strength: assessment.score,
            label: assessment.label_text().to_string(),
            checks: assessment.checks,
        }
    }
}

// System responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the server is answering
    pub status: String,
    /// Crate version
    pub version: String,
}
