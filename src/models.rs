// src/models.rs
use std::fmt;
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Symbols inserted by the transformer and recognised by the scorer.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Digits inserted by the transformer.
pub const DIGITS: &str = "0123456789";

/// Alphabet the padding step draws filler characters from.
pub const FILLER_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// Length target used when `minLength` is missing or cannot be parsed.
pub const DEFAULT_MIN_LENGTH: i64 = 1;

// Options controlling a single transformation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationOptions {
    pub include_numbers: bool,
    pub include_symbols: bool,
    /// Best-effort lower bound on the output length. Kept signed: zero and
    /// negative targets are legal and simply disable hashing and padding.
    pub min_length: i64,
    /// Append the timestamp suffix twice, as the first web release did.
    pub duplicate_suffix: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_numbers: false,
            include_symbols: false,
            min_length: DEFAULT_MIN_LENGTH,
            duplicate_suffix: false,
        }
    }
}

impl GenerationOptions {
    /// The option set the browser form always submits.
    pub fn display_defaults() -> Self {
        Self {
            include_numbers: true,
            include_symbols: true,
            min_length: 12,
            duplicate_suffix: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn from_score(score: f64) -> Self {
        if score < 40.0 {
            StrengthLabel::Weak
        } else if score < 70.0 {
            StrengthLabel::Medium
        } else {
            StrengthLabel::Strong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of each individual strength check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StrengthChecks {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub no_repeats: bool,
}

impl StrengthChecks {
    pub const TOTAL: usize = 6;

    pub fn passed(&self) -> usize {
        [
            self.length,
            self.lowercase,
            self.uppercase,
            self.numbers,
            self.symbols,
            self.no_repeats,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }

    /// Names of the checks that did not pass, in display order.
    pub fn failed(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if !self.length {
            failed.push("length of at least 12 characters");
        }
        if !self.lowercase {
            failed.push("a lowercase letter");
        }
        if !self.uppercase {
            failed.push("an uppercase letter");
        }
        if !self.numbers {
            failed.push("a digit");
        }
        if !self.symbols {
            failed.push("a symbol");
        }
        if !self.no_repeats {
            failed.push("no character repeated three times in a row");
        }
        failed
    }
}

/// Heuristic strength of a generated password. `label` is `None` only for
/// the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthAssessment {
    pub score: f64,
    pub label: Option<StrengthLabel>,
    pub checks: StrengthChecks,
}

impl StrengthAssessment {
    pub fn label_text(&self) -> &'static str {
        self.label.map(|l| l.as_str()).unwrap_or("")
    }
}
