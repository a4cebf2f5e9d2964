//! Configuration models and loaders for the JVL aircraft workspace.

pub mod airframe;
pub mod mass;
pub mod options;

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub use airframe::{
    AirplaneConfig, ControlSurfaceConfig, FuselageConfig, FuselageSectionConfig, JetControlConfig,
    JetParamConfig, LengthUnit, ReferenceConfig, SectionConfig, WingConfig,
};
pub use mass::{
    FixedItemConfig, ItemAnchor, MassBudgetConfig, MaterialConfig, MaterialsConfig,
    MotorArrayConfig, SparConfig,
};
pub use options::{
    AirplaneOptions, FuselageOptions, SectionOptions, Spacing, WingOptions, WriterOptions,
};

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load solver writer options from a YAML or TOML file.
pub fn load_writer_options<P: AsRef<Path>>(path: P) -> Result<WriterOptions, ConfigError> {
    load_record(path)
}

/// Load an airframe description from a YAML or TOML file.
pub fn load_airplane_config<P: AsRef<Path>>(path: P) -> Result<AirplaneConfig, ConfigError> {
    load_record(path)
}

/// Load mass budget inputs from a YAML or TOML file.
pub fn load_mass_budget<P: AsRef<Path>>(path: P) -> Result<MassBudgetConfig, ConfigError> {
    load_record(path)
}

/// Render writer options as YAML, e.g. to seed a new options file.
pub fn writer_options_to_yaml(options: &WriterOptions) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(options)?)
}

fn load_record<T, P>(path: P) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}
