// Generator constants and options
//
// Options are handed verbatim to downstream generators. On disk they are
// JSON, with `precision` written as a string ("15").

use crate::{CodegenError, CodegenResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LANGUAGE: &str = "ufc";
pub const DEFAULT_DEBUG_LEVEL: u8 = 0;
pub const DEFAULT_PRECISION: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub optimize: bool,
    pub blas: bool,
    /// Significant digits for floating point literals
    #[serde(
        alias = "precision=",
        serialize_with = "precision_to_string",
        deserialize_with = "precision_from_string"
    )]
    pub precision: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            optimize: false,
            blas: false,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Options {
    /// Decode options from JSON. `source_name` only labels errors.
    pub fn from_json_str(source_name: &str, json: &str) -> CodegenResult<Self> {
        serde_json::from_str(json).map_err(|e| CodegenError::InvalidOptions {
            source_name: source_name.to_string(),
            details: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> CodegenResult<Self> {
        let source_name = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|e| CodegenError::InvalidOptions {
            source_name: source_name.clone(),
            details: e.to_string(),
        })?;
        let options = Self::from_json_str(&source_name, &json)?;
        tracing::debug!(path = %source_name, ?options, "loaded options");
        Ok(options)
    }

    pub fn to_json_pretty(&self) -> CodegenResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CodegenError::InvalidOptions {
            source_name: "<options>".to_string(),
            details: e.to_string(),
        })
    }
}

fn precision_to_string<S: Serializer>(precision: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&precision.to_string())
}

fn precision_from_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    // Older files carry a number instead of a string
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Precision {
        Text(String),
        Number(u32),
    }

    let precision = match Precision::deserialize(deserializer)? {
        Precision::Text(text) => text.trim().parse::<u32>().map_err(|_| {
            serde::de::Error::custom(format!("precision must be an integer, got {:?}", text))
        })?,
        Precision::Number(n) => n,
    };
    if precision == 0 {
        return Err(serde::de::Error::custom("precision must be positive"));
    }
    Ok(precision)
}
