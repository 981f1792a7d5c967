use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

use crate::models::{Catalog, CatalogEntry, Product, RestockPolicy};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid catalog entry '{name}': {source}")]
    InvalidEntry {
        name: String,
        #[source]
        source: validator::ValidationErrors,
    },
    #[error("Catalog file {path} contains no products")]
    EmptyCatalog { path: PathBuf },
    #[error("Invalid CART_RESTOCK_POLICY: {0}")]
    InvalidRestockPolicy(String),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<CatalogEntry>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_file: Option<PathBuf>,
    pub restock_policy: RestockPolicy,
    pub log_level: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let restock_policy = match lookup("CART_RESTOCK_POLICY") {
            Some(value) => value
                .parse::<RestockPolicy>()
                .map_err(ConfigError::InvalidRestockPolicy)?,
            None => RestockPolicy::default(),
        };

        let config = Config {
            catalog_file: lookup("CART_CATALOG_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            restock_policy,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            environment: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
        };

        tracing::debug!("Config: loaded for {} environment", config.environment);
        Ok(config)
    }

    pub fn with_catalog_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_file = Some(path.into());
        self
    }

    /// The configured catalog file, or the built-in catalog when none is set.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_file {
            Some(path) => load_catalog_file(path),
            None => Ok(Catalog::default()),
        }
    }
}

pub fn load_catalog_file(path: &Path) -> Result<Catalog, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: CatalogFile = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if file.products.is_empty() {
        return Err(ConfigError::EmptyCatalog {
            path: path.to_path_buf(),
        });
    }

    let mut products = Vec::with_capacity(file.products.len());
    for entry in file.products {
        entry.validate().map_err(|source| ConfigError::InvalidEntry {
            name: entry.name.clone(),
            source,
        })?;
        products.push(Product::from(entry));
    }

    tracing::info!("Loaded {} products from {}", products.len(), path.display());
    Ok(Catalog::new(products))
}
