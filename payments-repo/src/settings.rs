//! Connection settings for the payment store.

use std::fmt;

/// Default PostgreSQL port.
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Where the store lives.
///
/// Either a full `url`, or discrete parts. Parts left unset fall back to the
/// driver's own defaults (for PostgreSQL, the libpq `PG*` variables).
#[derive(Clone)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub host: Option<String>,
    pub port: u16,
    pub name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            host: None,
            port: DEFAULT_DB_PORT,
            name: None,
            user: None,
            password: None,
        }
    }
}

impl DatabaseSettings {
    /// Settings pointing at a full connection URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Builds PostgreSQL connect options from these settings.
    #[cfg(feature = "postgres")]
    pub fn pg_connect_options(&self) -> Result<sqlx::postgres::PgConnectOptions, sqlx::Error> {
        use sqlx::postgres::PgConnectOptions;

        if let Some(url) = &self.url {
            return url.parse();
        }

        let mut options = PgConnectOptions::new().port(self.port);
        if let Some(host) = &self.host {
            options = options.host(host);
        }
        if let Some(name) = &self.name {
            options = options.database(name);
        }
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }

    /// Returns the SQLite URL, defaulting to a private in-memory database.
    #[cfg(feature = "sqlite")]
    pub fn sqlite_url(&self) -> &str {
        self.url.as_deref().unwrap_or("sqlite::memory:")
    }
}

// Never print the password or a URL that may embed one.
impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl fmt::Display for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.url.is_some() {
            return write!(f, "DATABASE_URL");
        }
        write!(
            f,
            "{}@{}:{}/{}",
            self.user.as_deref().unwrap_or("<default>"),
            self.host.as_deref().unwrap_or("<default>"),
            self.port,
            self.name.as_deref().unwrap_or("<default>"),
        )
    }
}
