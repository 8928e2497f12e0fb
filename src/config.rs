//! Benchmark configuration
//!
//! Loaded from an optional JSON file. Every field has a default, so `{}` is a
//! complete configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Upper bound on `random_inputs`
pub const MAX_RANDOM_INPUTS: usize = 100_000_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Timed iterations per sample string
    pub iterations: u64,
    /// Fixed inputs, each timed on its own
    pub samples: Vec<String>,
    /// Size of the random mixed-length workload, 0 to skip it
    pub random_inputs: usize,
    /// Timed passes over the random workload
    pub random_passes: u32,
    /// Seed for the random workload, fixed so runs are comparable
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            samples: [
                "7",
                "874",
                "123456",
                "12345654666646",
                "16323949897939569634",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            random_inputs: 100_000,
            random_passes: 20,
            seed: 42,
        }
    }
}

impl BenchConfig {
    /// Read a config file, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let file = std::fs::File::open(path)?;
                let reader = std::io::BufReader::new(file);
                serde_json::from_reader(reader)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::Invalid("iterations must be positive".into()));
        }
        if self.samples.is_empty() && self.random_inputs == 0 {
            return Err(ConfigError::Invalid(
                "nothing to benchmark: no samples and no random inputs".into(),
            ));
        }
        if self.random_inputs > MAX_RANDOM_INPUTS {
            return Err(ConfigError::Invalid(format!(
                "random_inputs must be at most {}",
                MAX_RANDOM_INPUTS
            )));
        }
        if self.random_inputs > 0 && self.random_passes == 0 {
            return Err(ConfigError::Invalid("random_passes must be positive".into()));
        }
        // every parser under test must agree on the samples, including the
        // unchecked one, so they have to be valid u64 digit runs
        if let Some(bad) = self
            .samples
            .iter()
            .find(|s| !crate::atoi::parse_positive::<u64>(s.as_bytes()).valid)
        {
            return Err(ConfigError::Invalid(format!(
                "sample {:?} is not an unsigned 64-bit digit run",
                bad
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BenchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.samples.len(), 5);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(BenchConfig::from_json("{}").unwrap(), BenchConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = BenchConfig::from_json(r#"{"iterations": 10, "samples": ["1", "22"]}"#)
            .unwrap();
        assert_eq!(config.iterations, 10);
        assert_eq!(config.samples, vec!["1".to_string(), "22".to_string()]);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(
            BenchConfig::from_json(r#"{"iterations": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BenchConfig::from_json(r#"{"samples": [], "random_inputs": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BenchConfig::from_json(r#"{"samples": ["-1"]}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BenchConfig::from_json(r#"{"samples": ["18446744073709551616"]}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            BenchConfig::from_json(r#"{"iterations": "many"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_random_workload() {
        let json = format!(r#"{{"random_inputs": {}}}"#, usize::MAX);
        assert!(matches!(
            BenchConfig::from_json(&json),
            Err(ConfigError::Invalid(_))
        ));
        let json = format!(r#"{{"random_inputs": {}}}"#, MAX_RANDOM_INPUTS + 1);
        assert!(matches!(
            BenchConfig::from_json(&json),
            Err(ConfigError::Invalid(_))
        ));
        let json = format!(r#"{{"random_inputs": {}}}"#, MAX_RANDOM_INPUTS);
        assert!(BenchConfig::from_json(&json).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let result = BenchConfig::load(Some(Path::new("/nonexistent/bench.json")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
        assert!(BenchConfig::load(None).is_ok());
    }
}
