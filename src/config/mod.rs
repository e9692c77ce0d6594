use std::env;

pub const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration, read once at startup. Database values stay optional:
/// their absence degrades the status report rather than failing the process.
#[derive(Debug, Clone, Default)]
pub struct ConsoleConfig {
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub port: u16,
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            database_name: env::var("DATABASE_NAME").ok().filter(|v| !v.is_empty()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Both database values are present.
    pub fn database_configured(&self) -> bool {
        self.database_url.is_some() && self.database_name.is_some()
    }
}
