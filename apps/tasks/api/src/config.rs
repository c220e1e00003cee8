use core_config::{app_info, env_parse_or_default, server::ServerConfig, AppInfo, FromEnv};

use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` and `database` libraries
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Apply pending migrations before serving (`RUN_MIGRATIONS`, default false)
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=3333
        let run_migrations = env_parse_or_default("RUN_MIGRATIONS", false)?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            run_migrations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/tasks")),
                ("APP_ENV", None),
                ("PORT", None),
                ("RUN_MIGRATIONS", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "tasks_api");
                assert_eq!(config.server.port, 3333);
                assert_eq!(config.environment, Environment::Development);
                assert!(!config.run_migrations);
            },
        );
    }

    #[test]
    fn test_config_requires_database_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_config_rejects_invalid_port() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/tasks")),
                ("PORT", Some("not-a-port")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("PORT"));
            },
        );
    }
}
