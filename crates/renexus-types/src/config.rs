//! Global configuration types for Renexus.
//!
//! `GlobalConfig` represents the top-level `config.toml` that tunes how
//! fast the companion learns and how trust evolves.

use serde::{Deserialize, Serialize};

/// Floor for the EMA learning rate; zero would freeze learning entirely.
pub const MIN_LEARNING_RATE: f64 = 0.01;

/// Ceiling for per-exchange trust gain; anything larger makes trust
/// saturate within a handful of messages.
pub const MAX_TRUST_GAIN: f64 = 0.1;

/// Top-level configuration for the Renexus platform.
///
/// Loaded from `{data_dir}/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// EMA learning rate for the style learner (alpha).
    #[serde(default = "default_style_learning_rate")]
    pub style_learning_rate: f64,

    /// Trust added per chat exchange.
    #[serde(default = "default_trust_gain")]
    pub trust_gain: f64,

    /// Below this trust level the companion stays reserved in its replies.
    #[serde(default = "default_reserved_trust_threshold")]
    pub reserved_trust_threshold: f64,
}

fn default_style_learning_rate() -> f64 {
    0.1
}

fn default_trust_gain() -> f64 {
    0.01
}

fn default_reserved_trust_threshold() -> f64 {
    0.3
}

impl GlobalConfig {
    /// Clamp every tunable into its workable range.
    pub fn sanitized(mut self) -> Self {
        self.style_learning_rate = self.style_learning_rate.clamp(MIN_LEARNING_RATE, 1.0);
        self.trust_gain = self.trust_gain.clamp(0.0, MAX_TRUST_GAIN);
        self.reserved_trust_threshold = self.reserved_trust_threshold.clamp(0.0, 1.0);
        self
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            style_learning_rate: default_style_learning_rate(),
            trust_gain: default_trust_gain(),
            reserved_trust_threshold: default_reserved_trust_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert!((config.style_learning_rate - 0.1).abs() < f64::EPSILON);
        assert!((config.trust_gain - 0.01).abs() < f64::EPSILON);
        assert!((config.reserved_trust_threshold - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let toml_str = "";
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert!((config.style_learning_rate - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
style_learning_rate = 0.25
trust_gain = 0.02
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert!((config.style_learning_rate - 0.25).abs() < f64::EPSILON);
        assert!((config.trust_gain - 0.02).abs() < f64::EPSILON);
        assert!((config.reserved_trust_threshold - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sanitized_clamps_extremes() {
        let config = GlobalConfig {
            style_learning_rate: 0.0,
            trust_gain: 5.0,
            reserved_trust_threshold: -1.0,
        }
        .sanitized();
        assert!((config.style_learning_rate - MIN_LEARNING_RATE).abs() < f64::EPSILON);
        assert!((config.trust_gain - MAX_TRUST_GAIN).abs() < f64::EPSILON);
        assert!((config.reserved_trust_threshold - 0.0).abs() < f64::EPSILON);
    }
}
