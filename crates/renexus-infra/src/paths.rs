//! Data directory and database location resolution.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "REN_DATA_DIR";

/// Resolve the data directory.
///
/// `$REN_DATA_DIR` wins when set; otherwise `~/.renexus`, or `./.renexus`
/// when no home directory can be determined.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".renexus"),
        None => PathBuf::from(".renexus"),
    }
}

/// Database URL for the SQLite file inside `data_dir`.
pub fn database_url(data_dir: &Path) -> String {
    format!("sqlite://{}/renexus.db", data_dir.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_points_at_renexus_db() {
        let url = database_url(Path::new("/tmp/data"));
        assert_eq!(url, "sqlite:///tmp/data/renexus.db");
    }
}
