//! Airframe descriptions loaded from scenario files.

use serde::Deserialize;

use jvl_core::units::INCH_M;

/// Length unit used by every coordinate and chord in an airframe file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Meters,
    Inches,
}

impl LengthUnit {
    /// Factor converting this unit to metres.
    pub fn to_meters(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Inches => INCH_M,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AirplaneConfig {
    pub name: String,
    #[serde(default)]
    pub units: LengthUnit,
    #[serde(default)]
    pub xyz_ref: [f64; 3],
    #[serde(default)]
    pub reference: Option<ReferenceConfig>,
    #[serde(default)]
    pub wings: Vec<WingConfig>,
    #[serde(default)]
    pub fuselages: Vec<FuselageConfig>,
}

/// Explicit reference quantities, in the file's length unit.
#[derive(Debug, Deserialize, Clone)]
pub struct ReferenceConfig {
    pub s_ref: f64,
    pub c_ref: f64,
    pub b_ref: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WingConfig {
    pub name: String,
    #[serde(default = "default_true")]
    pub symmetric: bool,
    #[serde(default)]
    pub translate: [f64; 3],
    #[serde(default)]
    pub jet_param: Option<JetParamConfig>,
    pub sections: Vec<SectionConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SectionConfig {
    pub xyz_le: [f64; 3],
    pub chord: f64,
    #[serde(default)]
    pub twist: f64,
    /// NACA 4-digit designation or path to a `.dat` file.
    pub airfoil: String,
    #[serde(default)]
    pub controls: Vec<ControlSurfaceConfig>,
    #[serde(default)]
    pub jet_controls: Vec<JetControlConfig>,
    #[serde(default)]
    pub jet_params: Vec<JetParamConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ControlSurfaceConfig {
    pub name: String,
    #[serde(default = "default_true")]
    pub symmetric: bool,
    #[serde(default)]
    pub deflection: f64,
    #[serde(default = "default_hinge_point")]
    pub hinge_point: f64,
    #[serde(default = "default_true")]
    pub trailing_edge: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JetControlConfig {
    pub name: String,
    #[serde(default = "default_one")]
    pub gain: f64,
    #[serde(default = "default_one")]
    pub sgn_dup: f64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct JetParamConfig {
    pub name: String,
    pub hdisk: f64,
    pub fh: f64,
    pub djet0: f64,
    pub djet1: f64,
    pub djet3: f64,
}

impl Default for JetParamConfig {
    fn default() -> Self {
        Self {
            name: "JET".to_string(),
            hdisk: 0.45,
            fh: 1.0,
            djet0: -2.0,
            djet1: -0.2,
            djet3: -0.0003,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FuselageConfig {
    pub name: String,
    pub sections: Vec<FuselageSectionConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FuselageSectionConfig {
    pub xyz_c: [f64; 3],
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_shape")]
    pub shape: f64,
}

fn default_true() -> bool {
    true
}

fn default_one() -> f64 {
    1.0
}

fn default_hinge_point() -> f64 {
    0.75
}

fn default_shape() -> f64 {
    2.0
}
