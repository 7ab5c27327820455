use crate::error::{Result, StoreError};

/// Store connection settings, sourced from the environment.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub mongodb_uri: String,
    pub database: String,
}

impl StoreConfig {
    /// Read `TASKDECK_MONGODB_URI` and `TASKDECK_DATABASE` from the
    /// environment.
    pub fn from_env() -> Result<Self> {
        let mongodb_uri = std::env::var("TASKDECK_MONGODB_URI").map_err(|_| {
            StoreError::Config("TASKDECK_MONGODB_URI environment variable is required".to_string())
        })?;
        let database = std::env::var("TASKDECK_DATABASE").map_err(|_| {
            StoreError::Config("TASKDECK_DATABASE environment variable is required".to_string())
        })?;

        Ok(Self {
            mongodb_uri,
            database,
        })
    }
}
