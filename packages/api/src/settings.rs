use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    /// Serve built-in fixture data instead of connecting to PostgreSQL.
    pub memory: bool,
}

impl Database {
    /// `host:port/database`, for log lines. Never includes credentials.
    pub fn target(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.database)
    }
}

impl Default for Database {
    fn default() -> Self {
        Self {
            user: "quizboard".into(),
            password: "password".into(),
            host: "localhost".into(),
            port: 5432,
            database: "quizboard".into(),
            memory: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    /// Only send the session cookie over HTTPS.
    pub secure: bool,
    /// Seconds of inactivity before a session expires.
    pub timeout: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            secure: false,
            timeout: 30 * 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    pub server: Server,
    pub database: Database,
    pub session: Session,
}

impl Settings {
    /// Defaults, then `config.toml` if present, then `APP_*` environment variables
    /// (`APP_DATABASE_HOST` sets `database.host`).
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080_i64)?
            .set_default("database.user", "quizboard")?
            .set_default("database.password", "password")?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432_i64)?
            .set_default("database.database", "quizboard")?
            .set_default("database.memory", false)?
            .set_default("session.secure", false)?
            .set_default("session.timeout", 30 * 60_i64)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("APP").separator("_"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_settings() {
        set_var("APP_DATABASE_USER", "test_user_2");
        set_var("APP_DATABASE_PORT", "5433");
        set_var("APP_SERVER_PORT", "9090");
        set_var("APP_SESSION_SECURE", "true");
        let settings = Settings::new().unwrap();
        println!("Settings = {:?}", settings);
        assert_eq!(settings.database.user, "test_user_2");
        assert_eq!(settings.database.password, "password");
        assert_eq!(settings.database.target(), "localhost:5433/quizboard");
        assert_eq!(settings.server.address(), "127.0.0.1:9090");
        assert!(!settings.database.memory);
        assert!(settings.session.secure);
        assert_eq!(settings.session.timeout, 1800);
    }
}
