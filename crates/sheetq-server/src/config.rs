use std::env;
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Workbook file served by the query API
    pub workbook_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "9090".to_string())
            .parse()?;
        let workbook_path = env::var("WORKBOOK_PATH")
            .unwrap_or_else(|_| "Data/capbudg.xlsx".to_string())
            .into();

        Ok(Self {
            host,
            port,
            workbook_path,
        })
    }
}
