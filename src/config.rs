use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub max_upload_size: usize,
    pub allowed_origin: String,
    pub generation_delay_ms: u64,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_required("JWT_SECRET")?;

        let host: IpAddr = env_or("STUDYVIDEO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid STUDYVIDEO_HOST: {e}"))?;

        let port: u16 = env_or("STUDYVIDEO_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid STUDYVIDEO_PORT: {e}"))?;

        let upload_dir = PathBuf::from(env_or("STUDYVIDEO_UPLOAD_DIR", "./uploads"));

        let max_upload_size: usize = env_or("STUDYVIDEO_MAX_UPLOAD_SIZE", "10485760")
            .parse()
            .map_err(|e| format!("Invalid STUDYVIDEO_MAX_UPLOAD_SIZE: {e}"))?;

        let allowed_origin = env_or("STUDYVIDEO_ALLOWED_ORIGIN", "http://localhost:3000");

        let generation_delay_ms: u64 = env_or("STUDYVIDEO_GENERATION_DELAY_MS", "10000")
            .parse()
            .map_err(|e| format!("Invalid STUDYVIDEO_GENERATION_DELAY_MS: {e}"))?;

        let log_level = env_or("STUDYVIDEO_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            jwt_secret,
            host,
            port,
            upload_dir,
            max_upload_size,
            allowed_origin,
            generation_delay_ms,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
