use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Pseudorandom transition function used to advance the generator state.
///
/// All algorithms are seeded from the 64-bit seed state with SplitMix64
/// expansion, so the same seed gives unrelated streams under different
/// algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// xoshiro256**: 256 bits of state, period 2^256 - 1.
    #[default]
    Xoshiro256StarStar,
    /// xoshiro256++: same state and period, different output scrambler.
    Xoshiro256PlusPlus,
    /// SplitMix64: 64 bits of state, period 2^64.
    SplitMix64,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Xoshiro256StarStar => "xoshiro256_star_star",
            Algorithm::Xoshiro256PlusPlus => "xoshiro256_plus_plus",
            Algorithm::SplitMix64 => "split_mix64",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Algorithm::Xoshiro256StarStar,
            Algorithm::Xoshiro256PlusPlus,
            Algorithm::SplitMix64,
        ]
        .into_iter()
        .find(|algorithm| algorithm.name() == s)
        .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_owned()))
    }
}

/// Options for deriving generator state.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
///
/// # Examples
///
/// ```
/// use plainlang_random::{Algorithm, GeneratorConfig};
///
/// let config = GeneratorConfig::from_json_str(r#"{"algorithm": "split_mix64"}"#).unwrap();
/// assert_eq!(config.algorithm, Algorithm::SplitMix64);
/// assert_eq!(GeneratorConfig::from_json_str("{}").unwrap(), GeneratorConfig::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub algorithm: Algorithm,
}

impl GeneratorConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        tracing::debug!(algorithm = %config.algorithm, "loaded generator config");
        Ok(config)
    }
}
