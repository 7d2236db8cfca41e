use crate::constants::{
    DEFAULT_DIRECTIONS_CACHE_TTL_SECONDS, DEFAULT_HOST, DEFAULT_PORT,
};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mapbox_api_key: String,
    /// Alternate directions endpoint (e.g. a proxy); direct Mapbox when unset.
    pub mapbox_base_url: Option<String>,
    pub directions_cache_ttl: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            mapbox_api_key: env::var("MAPBOX_API_KEY").map_err(|_| "MAPBOX_API_KEY must be set")?,
            mapbox_base_url: env::var("MAPBOX_BASE_URL").ok(),
            directions_cache_ttl: env::var("DIRECTIONS_CACHE_TTL")
                .unwrap_or_else(|_| DEFAULT_DIRECTIONS_CACHE_TTL_SECONDS.to_string())
                .parse()
                .map_err(|_| "Invalid DIRECTIONS_CACHE_TTL")?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
