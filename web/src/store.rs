#[cfg(feature = "ssr")]
use crate::config::AppConfig;
#[cfg(feature = "ssr")]
use shared_types::{Catalog, CatalogError};
#[cfg(feature = "ssr")]
use std::sync::OnceLock;

#[cfg(feature = "ssr")]
static CATALOG: OnceLock<Catalog> = OnceLock::new();

#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("catalog already initialized")]
    AlreadyInitialized,
}

#[cfg(feature = "ssr")]
pub fn init_catalog(config: &AppConfig) -> Result<&'static Catalog, StoreError> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog from file");
            Catalog::load(path)?
        }
        None => {
            tracing::info!("no catalog configured, serving demo data");
            Catalog::demo()
        }
    };

    CATALOG
        .set(catalog)
        .map_err(|_| StoreError::AlreadyInitialized)?;

    Ok(get_catalog())
}

// Falls back to the demo data when called before `init_catalog`.
#[cfg(feature = "ssr")]
pub fn get_catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::demo)
}
