use std::env;
use std::path::PathBuf;

/// Runtime configuration, read from the environment once at startup and
/// carried through the application state.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Root directory for stored blobs (group photos, captures, temp sheets).
    pub uploads_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let db_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/roster.sqlite"));
        let uploads_dir = env::var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        Config {
            host,
            port,
            db_path,
            uploads_dir,
        }
    }
}
