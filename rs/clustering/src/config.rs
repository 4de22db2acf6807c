use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn default_max_iteration() -> usize {
    100
}

fn default_tolerance() -> f32 {
    1e-4
}

fn default_seed() -> u64 {
    42
}

/// Hyperparameters for k-means.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct KMeansConfig {
    /// Number of clusters to build. Must be positive and no larger than the number of points
    /// passed to `fit`.
    pub num_clusters: usize,

    /// Maximum number of assign/update rounds.
    /// Default: 100
    #[serde(default = "default_max_iteration")]
    pub max_iteration: usize,

    /// Fitting stops after the first round whose largest centroid displacement is strictly
    /// below this value. Zero means always run `max_iteration` rounds.
    /// Default: 1e-4
    #[serde(default = "default_tolerance")]
    pub tolerance: f32,

    /// Seed for k-means++ initialization. Same seed and same data give the same clustering.
    /// Default: 42
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl KMeansConfig {
    pub fn new(num_clusters: usize) -> Self {
        Self {
            num_clusters,
            max_iteration: default_max_iteration(),
            tolerance: default_tolerance(),
            seed: default_seed(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_clusters == 0 {
            return Err(Error::InvalidInput(
                "number of clusters must be > 0".to_string(),
            ));
        }
        if self.max_iteration == 0 {
            return Err(Error::InvalidInput(
                "max iteration must be > 0".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidInput(format!(
                "tolerance must be a finite non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_yaml() {
        let config: KMeansConfig = serde_yaml::from_str("num_clusters: 5").unwrap();
        assert_eq!(config, KMeansConfig::new(5));
        assert_eq!(config.max_iteration, 100);
        assert_eq!(config.tolerance, 1e-4);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "num_clusters: 3\nmax_iteration: 10\ntolerance: 0.001\nseed: 7\n";
        let config: KMeansConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.num_clusters, 3);
        assert_eq!(config.max_iteration, 10);
        assert_eq!(config.tolerance, 1e-3);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_validate() {
        assert!(KMeansConfig::new(1).validate().is_ok());
        assert!(matches!(
            KMeansConfig::new(0).validate(),
            Err(Error::InvalidInput(_))
        ));

        let mut config = KMeansConfig::new(2);
        config.max_iteration = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidInput(_))));

        let mut config = KMeansConfig::new(2);
        config.tolerance = -1.0;
        assert!(matches!(config.validate(), Err(Error::InvalidInput(_))));

        config.tolerance = f32::NAN;
        assert!(matches!(config.validate(), Err(Error::InvalidInput(_))));

        config.tolerance = 0.0;
        assert!(config.validate().is_ok());
    }
}
