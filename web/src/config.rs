use std::path::PathBuf;

/// Env var naming a catalog JSON file to serve instead of the bundled demo data.
pub const CATALOG_ENV: &str = "GAMEON_CATALOG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_path = lookup(CATALOG_ENV)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Self { catalog_path }
    }
}
