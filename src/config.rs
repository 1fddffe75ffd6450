use std::path::PathBuf;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::Catalog;
use crate::error::{PlannerError, Result};
use crate::remote::HttpPlanClient;
use crate::state::load_catalog;

pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 20;

/// Runtime settings, resolved once at startup and passed down.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// `None` uses the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// `None` disables remote generation.
    pub remote_endpoint: Option<String>,
    pub remote_timeout: Duration,
    pub seed: Option<u64>,
    pub json_logs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            remote_endpoint: None,
            remote_timeout: Duration::from_secs(DEFAULT_REMOTE_TIMEOUT_SECS),
            seed: None,
            json_logs: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let remote_timeout = match get("CALORIE_PLANNER_REMOTE_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(v.trim().parse::<u64>().map_err(|_| {
                PlannerError::InvalidInput(format!("CALORIE_PLANNER_REMOTE_TIMEOUT_SECS: '{}'", v))
            })?),
            None => Duration::from_secs(DEFAULT_REMOTE_TIMEOUT_SECS),
        };

        let seed = get("CALORIE_PLANNER_SEED")
            .map(|v| {
                v.trim().parse::<u64>().map_err(|_| {
                    PlannerError::InvalidInput(format!("CALORIE_PLANNER_SEED: '{}'", v))
                })
            })
            .transpose()?;

        Ok(Self {
            catalog_path: get("CALORIE_PLANNER_CATALOG").map(PathBuf::from),
            remote_endpoint: get("CALORIE_PLANNER_REMOTE_URL"),
            remote_timeout,
            seed,
            json_logs: get("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
        })
    }

    /// Apply command-line values on top of the environment.
    pub fn with_overrides(
        mut self,
        catalog_path: Option<PathBuf>,
        remote_endpoint: Option<String>,
        seed: Option<u64>,
    ) -> Self {
        if catalog_path.is_some() {
            self.catalog_path = catalog_path;
        }
        if remote_endpoint.is_some() {
            self.remote_endpoint = remote_endpoint;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => load_catalog(path),
            None => Catalog::builtin(),
        }
    }

    pub fn remote_client(&self) -> Result<Option<HttpPlanClient>> {
        self.remote_endpoint
            .as_ref()
            .map(|url| HttpPlanClient::new(url.clone(), self.remote_timeout))
            .transpose()
    }

    /// Seeded when a seed is configured, otherwise from entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.remote_timeout, Duration::from_secs(20));
    }

    #[test]
    fn test_reads_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("CALORIE_PLANNER_CATALOG", "data/foods.csv"),
            ("CALORIE_PLANNER_REMOTE_URL", "http://localhost:8787/api/meal"),
            ("CALORIE_PLANNER_REMOTE_TIMEOUT_SECS", "5"),
            ("CALORIE_PLANNER_SEED", "42"),
            ("LOG_FORMAT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_path, Some(PathBuf::from("data/foods.csv")));
        assert_eq!(config.remote_endpoint.as_deref(), Some("http://localhost:8787/api/meal"));
        assert_eq!(config.remote_timeout, Duration::from_secs(5));
        assert_eq!(config.seed, Some(42));
        assert!(config.json_logs);
    }

    #[test]
    fn test_bad_seed_rejected() {
        let result = AppConfig::from_lookup(lookup(&[("CALORIE_PLANNER_SEED", "abc")]));
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = AppConfig::from_lookup(lookup(&[("CALORIE_PLANNER_REMOTE_URL", "  ")])).unwrap();
        assert!(config.remote_endpoint.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let config = AppConfig::default()
            .with_overrides(None, Some("http://x".to_string()), Some(7));
        assert!(config.catalog_path.is_none());
        assert_eq!(config.remote_endpoint.as_deref(), Some("http://x"));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_seeded_rng_repeats() {
        use rand::Rng;
        let config = AppConfig {
            seed: Some(9),
            ..AppConfig::default()
        };
        let a: u32 = config.rng().gen_range(0..1000);
        let b: u32 = config.rng().gen_range(0..1000);
        assert_eq!(a, b);
    }
}
