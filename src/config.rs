use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use jsonschema::{JSONSchema, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::priority::{Breakers, CircuitBreaker, ConsiderationSettings, PriorityScale};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub scale: ScaleConfig,
    #[serde(default)]
    pub considerations: ConsiderationsConfig,
    /// Per-category additive score offsets, keyed by category key.
    #[serde(default)]
    pub policy: BTreeMap<String, f32>,
}

fn default_logging_dir() -> PathBuf {
    PathBuf::from("./logs/volition")
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_logging_retention_days() -> usize {
    14
}

fn default_enabled_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_logging_retention_days")]
    pub retention_days: usize,
    #[serde(default = "default_enabled_true")]
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            filter: default_logging_filter(),
            rotation: default_logging_rotation(),
            retention_days: default_logging_retention_days(),
            stderr_warn_enabled: true,
        }
    }
}

fn default_lowest_level() -> u8 {
    4
}

/// How many discrete priority levels the host exposes above "off".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleConfig {
    #[serde(default = "default_lowest_level")]
    pub lowest_level: u8,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            lowest_level: default_lowest_level(),
        }
    }
}

impl ScaleConfig {
    pub fn to_scale(&self) -> PriorityScale {
        PriorityScale::new(self.lowest_level)
    }
}

fn default_weight() -> f32 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsiderationsConfig {
    /// When set, score logs include neutral entries and override markers.
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_weight")]
    pub movement_speed_weight: f32,
    #[serde(default = "default_weight")]
    pub food_poisoning_weight: f32,
    #[serde(default = "default_weight")]
    pub own_room_weight: f32,
    #[serde(default = "default_weight")]
    pub plants_blighted_weight: f32,
    #[serde(default = "default_weight")]
    pub grove_pruning_weight: f32,
    #[serde(default = "default_enabled_true")]
    pub hunting_weapon_enabled: bool,
    #[serde(default = "default_enabled_true")]
    pub brawlers_not_hunting_enabled: bool,
    #[serde(default = "default_enabled_true")]
    pub interests_enabled: bool,
}

impl Default for ConsiderationsConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            movement_speed_weight: default_weight(),
            food_poisoning_weight: default_weight(),
            own_room_weight: default_weight(),
            plants_blighted_weight: default_weight(),
            grove_pruning_weight: default_weight(),
            hunting_weapon_enabled: true,
            brawlers_not_hunting_enabled: true,
            interests_enabled: true,
        }
    }
}

impl ConsiderationsConfig {
    pub fn to_settings(&self) -> ConsiderationSettings {
        ConsiderationSettings {
            verbose: self.verbose,
            movement_speed_weight: self.movement_speed_weight,
            food_poisoning_weight: self.food_poisoning_weight,
            own_room_weight: self.own_room_weight,
            plants_blighted_weight: self.plants_blighted_weight,
            grove_pruning_weight: self.grove_pruning_weight,
            breakers: Breakers {
                movement_speed: CircuitBreaker::default(),
                food_poisoning: CircuitBreaker::default(),
                own_room: CircuitBreaker::default(),
                plants_blighted: CircuitBreaker::default(),
                grove_pruning: CircuitBreaker::default(),
                hunting_weapon: CircuitBreaker::new(self.hunting_weapon_enabled),
                brawlers_not_hunting: CircuitBreaker::new(self.brawlers_not_hunting_enabled),
                interests: CircuitBreaker::new(self.interests_enabled),
            },
        }
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config_value: Value = json5::from_str(&config_content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        let config_base = config_path.parent().unwrap_or_else(|| Path::new("."));
        let schema_path = resolve_schema_path(config_base, &config_value)?;
        validate_against_schema(&config_value, &schema_path)?;

        let config: Config =
            serde_json::from_value(config_value).context("failed to deserialize config")?;
        Ok(config)
    }
}

fn resolve_schema_path(config_base: &Path, config_value: &Value) -> Result<PathBuf> {
    if let Some(path_text) = config_value.get("$schema").and_then(|value| value.as_str()) {
        let configured = PathBuf::from(path_text);
        if configured.is_absolute() {
            return Ok(configured);
        }
        return Ok(config_base.join(&configured));
    }

    let local_default = config_base.join("volition.schema.json");
    if local_default.exists() {
        return Ok(local_default);
    }

    Err(anyhow!(
        "unable to resolve schema path: expected $schema in config or volition.schema.json"
    ))
}

fn validate_against_schema(config_value: &Value, schema_path: &Path) -> Result<()> {
    let schema_content = fs::read_to_string(schema_path)
        .with_context(|| format!("failed to read schema {}", schema_path.display()))?;
    let schema: Value = serde_json::from_str(&schema_content)
        .with_context(|| format!("failed to parse schema {}", schema_path.display()))?;

    let compiled =
        JSONSchema::compile(&schema).map_err(|e| anyhow!("failed to compile schema: {e}"))?;

    match compiled.validate(config_value) {
        Ok(()) => Ok(()),
        Err(errors_iter) => {
            let validation_errors: Vec<ValidationError> = errors_iter.collect();
            let messages: Vec<String> = validation_errors
                .into_iter()
                .map(|error| error.to_string())
                .collect();
            Err(anyhow!("config validation failed: {}", messages.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use uuid::Uuid;

    use super::{Config, LoggingConfig, LoggingRotation};

    #[test]
    fn logging_config_defaults_match_contract() {
        let config = LoggingConfig::default();
        assert_eq!(config.dir, std::path::PathBuf::from("./logs/volition"));
        assert_eq!(config.filter, "info");
        assert_eq!(config.rotation, LoggingRotation::Daily);
        assert_eq!(config.retention_days, 14);
        assert!(config.stderr_warn_enabled);
    }

    #[test]
    fn logging_rotation_hourly_is_deserialized() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            logging: LoggingConfig,
        }

        let parsed: Wrapper = serde_json::from_value(serde_json::json!({
            "logging": {
                "rotation": "hourly"
            }
        }))
        .expect("wrapper should deserialize");
        assert_eq!(parsed.logging.rotation, LoggingRotation::Hourly);
    }

    #[test]
    fn config_load_rejects_zero_logging_retention_days() {
        let work_dir =
            std::env::temp_dir().join(format!("volition-config-test-{}", Uuid::now_v7()));
        fs::create_dir_all(&work_dir).expect("temp work dir should be created");

        let config_path = work_dir.join("volition.jsonc");
        let schema_path =
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("volition.schema.json");
        let config_text = format!(
            r#"{{
  "$schema": "{}",
  "logging": {{
    "retention_days": 0
  }}
}}"#,
            schema_path.display(),
        );
        fs::write(&config_path, config_text).expect("config should be written");

        let err = Config::load(&config_path).expect_err("retention_days=0 should fail schema");
        assert!(
            err.to_string().contains("minimum"),
            "unexpected error: {err}",
        );

        let _ = fs::remove_file(&config_path);
        let _ = fs::remove_dir(&work_dir);
    }

    #[test]
    fn config_load_rejects_unknown_top_level_fields() {
        let work_dir =
            std::env::temp_dir().join(format!("volition-config-test-{}", Uuid::now_v7()));
        fs::create_dir_all(&work_dir).expect("temp work dir should be created");

        let config_path = work_dir.join("volition.jsonc");
        let schema_path =
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("volition.schema.json");
        let config_text = format!(
            r#"{{
  "$schema": "{}",
  "weights": {{}}
}}"#,
            schema_path.display(),
        );
        fs::write(&config_path, config_text).expect("config should be written");

        let err =
            Config::load(&config_path).expect_err("unknown top-level field should fail schema");
        assert!(
            err.to_string().contains("Additional properties"),
            "unexpected error: {err}",
        );

        let _ = fs::remove_file(&config_path);
        let _ = fs::remove_dir(&work_dir);
    }
}
