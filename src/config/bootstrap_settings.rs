use std::env;

/// Process-level settings read from the environment before anything else.
///
/// Everything user-editable lives in the site_settings table; only the
/// pieces needed to reach that table belong here.
#[derive(Debug, Clone)]
pub struct BootstrapSettings {
    database_url: String,
}

impl BootstrapSettings {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://stagedoor.db?mode=rwc".to_string());
        Self { database_url }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}
