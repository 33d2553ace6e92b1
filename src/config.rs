/// Runtime settings. Everything has a fixed default so the demo runs with
/// no environment at all; the variables exist for deployment overrides.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

/// Default assets directory, anchored to the crate root rather than the
/// process working directory.
pub(crate) fn default_static_dir() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string()
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            // mode=rwc creates the database file on first run.
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:database.db?mode=rwc".into()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("APP_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(3000),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| default_static_dir()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_static_dir_locates_the_shipped_assets() {
        let dir = std::path::PathBuf::from(default_static_dir());
        assert!(dir.is_absolute());
        assert!(dir.join("index.html").is_file());
    }
}
