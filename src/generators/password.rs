use crate::core::config::Config;
use crate::generators::{transform, Result};
use crate::models::{GenerationOptions, StrengthAssessment};

/// Generation entry point used by the API and the CLI, carrying the
/// deployment-wide choices from [`Config`].
pub struct PasswordGenerator {
    duplicate_suffix: bool,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator {
            duplicate_suffix: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        PasswordGenerator {
            duplicate_suffix: config.duplicate_suffix,
        }
    }

    pub fn generate_password(&self, text: &str, options: &GenerationOptions) -> Result<String> {
        let options = GenerationOptions {
            duplicate_suffix: options.duplicate_suffix || self.duplicate_suffix,
            ..options.clone()
        };
        transform::generate(text, &options)
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthAssessment {
        crate::strength::analyze_password_strength(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
