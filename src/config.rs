//! Configuration schema for skill registration.

use serde::{Deserialize, Serialize};

use crate::matcher::REGEX_PARSE_SCORE_FACTOR;

/// Settings consumed at skill registration time.
///
/// Deserialized from the host application's config file; every field has a
/// default so an empty section is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Fallback score multiplier for regex and parse-format matchers that
    /// were built without an explicit score factor.
    #[serde(default = "default_score_factor")]
    pub regex_parse_score_factor: f64,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            regex_parse_score_factor: default_score_factor(),
        }
    }
}

fn default_score_factor() -> f64 {
    REGEX_PARSE_SCORE_FACTOR
}
