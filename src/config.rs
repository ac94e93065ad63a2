use anyhow::{anyhow, Context, Result};
use simplelog::LevelFilter;
use url::Url;
use crate::utils::grades::StatsQuery;

pub const DEFAULT_BASE_URL: &str = "https://is.stuba.sk";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub stats: StatsQuery,
    pub log_level: LevelFilter,
}

impl Config {
    // Reads the process environment; call after `dotenv()` so `.env` values are visible.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("IS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url).with_context(|| format!("IS_BASE_URL is not a valid URL: {}", base_url))?;

        let defaults = StatsQuery::default();
        let stats = StatsQuery {
            faculty: lookup("IS_FACULTY").unwrap_or(defaults.faculty),
            term: lookup("IS_TERM").unwrap_or(defaults.term),
            subject: lookup("IS_SUBJECT").unwrap_or(defaults.subject),
        };

        let level = lookup("IS_LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let log_level = level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("IS_LOG_LEVEL has an unknown level: {}", level))?;

        Ok(Config { base_url, stats, log_level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_stuba() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.base_url.as_str(), "https://is.stuba.sk/");
        assert_eq!(config.stats, StatsQuery::default());
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn environment_overrides_filters_and_level() {
        let config = config_from(&[
            ("IS_BASE_URL", "http://localhost:8080"),
            ("IS_FACULTY", "10"),
            ("IS_TERM", "20"),
            ("IS_SUBJECT", "30"),
            ("IS_LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.stats.faculty, "10");
        assert_eq!(config.stats.term, "20");
        assert_eq!(config.stats.subject, "30");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn rejects_bad_base_url_and_level() {
        assert!(config_from(&[("IS_BASE_URL", "not a url")]).is_err());
        assert!(config_from(&[("IS_LOG_LEVEL", "loud")]).is_err());
    }
}
