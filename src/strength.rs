// src/strength.rs
//
// Heuristic strength scoring for display. Six independent checks, each worth
// one sixth of the score. This is not an entropy estimate.

use crate::models::{StrengthAssessment, StrengthChecks, StrengthLabel, SYMBOLS};

const MIN_STRONG_LENGTH: usize = 12;
const MAX_RUN: usize = 2;

pub fn analyze_password_strength(password: &str) -> StrengthAssessment {
    if password.is_empty() {
        return StrengthAssessment {
            score: 0.0,
            label: None,
            checks: StrengthChecks::default(),
        };
    }

    let checks = StrengthChecks {
        length: password.chars().count() >= MIN_STRONG_LENGTH,
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        numbers: password.chars().any(|c| c.is_ascii_digit()),
        symbols: password.chars().any(|c| SYMBOLS.contains(c)),
        no_repeats: !has_repeated_run(password),
    };

    let score = checks.passed() as f64 / StrengthChecks::TOTAL as f64 * 100.0;

    StrengthAssessment {
        score,
        label: Some(StrengthLabel::from_score(score)),
        checks,
    }
}

// Line terminators never take part in a run
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// True when some character appears three or more times in a row.
fn has_repeated_run(password: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut run = 0;

    for c in password.chars() {
        if is_line_terminator(c) {
            prev = None;
            run = 0;
            continue;
        }
        if prev == Some(c) {
            run += 1;
            if run > MAX_RUN {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }

    false
}
