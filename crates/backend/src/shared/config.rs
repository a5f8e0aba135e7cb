use contracts::dashboards::d100_overview::OverviewSettings;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Параметры расчёта главного дашборда
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub trend_months: u32,
    pub top_suppliers: usize,
    pub overdue_days: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let settings = OverviewSettings::default();
        Self {
            trend_months: settings.trend_months,
            top_suppliers: settings.top_suppliers,
            overdue_days: settings.overdue_days,
        }
    }
}

impl DashboardConfig {
    pub fn settings(&self) -> OverviewSettings {
        OverviewSettings {
            trend_months: self.trend_months.max(1),
            top_suppliers: self.top_suppliers,
            overdue_days: self.overdue_days,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                path: "target/db/app.db".to_string(),
            },
            server: ServerConfig::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/app.db"

[server]
host = "0.0.0.0"
port = 3000

[dashboard]
trend_months = 4
top_suppliers = 4
overdue_days = 21
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Запомнить загруженную конфигурацию для сервисов
pub fn set_global(config: Config) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Configuration already initialized, keeping the first one");
    }
}

/// Текущая конфигурация (встроенная по умолчанию, если `set_global` не вызывался)
pub fn global() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    // Fallback: use relative to current directory
    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str("[database]\npath = \"/var/lib/app.db\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.dashboard.overdue_days, 21);
        assert_eq!(
            get_database_path(&config).unwrap(),
            PathBuf::from("/var/lib/app.db")
        );
    }

    #[test]
    fn test_partial_dashboard_section() {
        let config: Config =
            toml::from_str("[database]\npath = \"a.db\"\n[dashboard]\ntrend_months = 0\n").unwrap();
        let settings = config.dashboard.settings();
        assert_eq!(settings.trend_months, 1);
        assert_eq!(settings.top_suppliers, 4);
    }
}
