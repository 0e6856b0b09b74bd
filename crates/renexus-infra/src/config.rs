//! Global configuration loader for Renexus.
//!
//! Reads `config.toml` from the data directory (`~/.renexus/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to sensible defaults
//! when the file is missing or malformed, and clamps every tunable into its
//! workable range.

use std::path::Path;

use renexus_types::config::GlobalConfig;

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    let config = match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    };
    config.sanitized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert!((config.style_learning_rate - 0.1).abs() < f64::EPSILON);
        assert!((config.trust_gain - 0.01).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
style_learning_rate = 0.25
trust_gain = 0.02
reserved_trust_threshold = 0.4
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert!((config.style_learning_rate - 0.25).abs() < f64::EPSILON);
        assert!((config.trust_gain - 0.02).abs() < f64::EPSILON);
        assert!((config.reserved_trust_threshold - 0.4).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert!((config.style_learning_rate - 0.1).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn load_global_config_clamps_out_of_range_values() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
style_learning_rate = 0.0
trust_gain = 9.0
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert!(config.style_learning_rate > 0.0);
        assert!(config.trust_gain <= 0.1);
    }
}
