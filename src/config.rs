//! Pet configuration.
//!
//! Hosts hand each pet a bag of named [`Properties`] (for example
//! `"Flying-Height"`) and expose plugin-wide reward values through
//! [`PetsConfig`]. Both can be loaded together from a JSON [`PetProfile`].

use std::fs;
use std::path::Path;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::pet::PetError;

/// Errors raised while reading pet configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The profile file could not be read.
    #[error("failed to read pet profile: {0}")]
    Io(#[from] std::io::Error),
    /// The profile is not valid JSON for the expected shape.
    #[error("malformed pet profile: {0}")]
    Json(#[from] serde_json::Error),
    /// A property holds a value that cannot be read as a number.
    #[error("property `{key}` must be numeric, found {value}")]
    InvalidProperty {
        /// Property name.
        key: String,
        /// Offending value.
        value: Value,
    },
    /// A property violates a pet invariant.
    #[error(transparent)]
    Pet(#[from] PetError),
}

/// Property holding the ceiling a ridden pet may climb to above the terrain.
pub const FLYING_HEIGHT_PROPERTY: &str = "Flying-Height";

/// Named per-pet properties supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(HashMap<String, Value>);

impl Properties {
    /// Creates an empty property set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning the updated set.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Reads `key` as a number. Numeric strings are accepted.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidProperty`] when the value exists but is
    /// neither a finite number nor a string holding one.
    ///
    /// # Examples
    /// ```
    /// use hoverpet::config::Properties;
    /// let props = Properties::new().with("Flying-Height", "12.5");
    /// assert_eq!(props.number("Flying-Height")?, Some(12.5));
    /// assert_eq!(props.number("Speed")?, None);
    /// # Ok::<(), hoverpet::config::ConfigError>(())
    /// ```
    pub fn number(&self, key: &str) -> Result<Option<f64>, ConfigError> {
        let Some(value) = self.0.get(key) else {
            return Ok(None);
        };
        let parsed = match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed {
            Some(number) if number.is_finite() => Ok(Some(number)),
            _ => Err(ConfigError::InvalidProperty {
                key: key.to_owned(),
                value: value.clone(),
            }),
        }
    }
}

/// Plugin-wide reward settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetsConfig {
    /// Level points awarded when a pet kills a player.
    #[serde(rename = "Player-Experience-Points", default = "default_player_points")]
    pub player_experience_points: u32,
    /// Level points awarded when a pet kills any other entity.
    #[serde(rename = "Entity-Experience-Points", default = "default_entity_points")]
    pub entity_experience_points: u32,
}

const fn default_player_points() -> u32 {
    10
}

const fn default_entity_points() -> u32 {
    5
}

impl Default for PetsConfig {
    fn default() -> Self {
        Self {
            player_experience_points: default_player_points(),
            entity_experience_points: default_entity_points(),
        }
    }
}

/// Reward settings and per-pet properties stored together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetProfile {
    /// Plugin-wide reward settings.
    #[serde(default)]
    pub rewards: PetsConfig,
    /// Properties for the pet.
    #[serde(default)]
    pub properties: Properties,
}

impl PetProfile {
    /// Parses a profile from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] when the text is malformed.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a profile file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Json`] when it is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
