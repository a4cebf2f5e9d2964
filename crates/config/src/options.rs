//! Analysis options consumed by the JVL input writer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Vortex distribution along a chord or span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Spacing {
    #[serde(rename = "uniform")]
    Uniform,
    #[default]
    #[serde(rename = "cosine")]
    Cosine,
    #[serde(rename = "sine")]
    Sine,
    #[serde(rename = "-sine")]
    NegativeSine,
    #[serde(rename = "equal")]
    Equal,
}

impl Spacing {
    /// Numeric spacing parameter written into the input file.
    pub fn code(self) -> i32 {
        match self {
            Spacing::Uniform | Spacing::Equal => 0,
            Spacing::Cosine => 1,
            Spacing::Sine => 2,
            Spacing::NegativeSine => -2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirplaneOptions {
    pub profile_drag_coefficient: f64,
}

impl Default for AirplaneOptions {
    fn default() -> Self {
        Self {
            profile_drag_coefficient: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WingOptions {
    /// Spanwise paneling set once for the surface instead of per section.
    pub wing_level_spanwise_spacing: bool,
    pub spanwise_resolution: u32,
    pub spanwise_spacing: Spacing,
    pub chordwise_resolution: u32,
    pub chordwise_spacing: Spacing,
    pub component: Option<u32>,
    pub no_wake: bool,
    pub no_alpha_beta: bool,
    pub no_load: bool,
}

impl Default for WingOptions {
    fn default() -> Self {
        Self {
            wing_level_spanwise_spacing: true,
            spanwise_resolution: 12,
            spanwise_spacing: Spacing::Cosine,
            chordwise_resolution: 12,
            chordwise_spacing: Spacing::Cosine,
            component: None,
            no_wake: false,
            no_alpha_beta: false,
            no_load: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionOptions {
    pub spanwise_resolution: u32,
    pub spanwise_spacing: Spacing,
    /// Lift-slope scaling; derived from airfoil thickness when unset.
    pub cl_alpha_factor: Option<f64>,
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            spanwise_resolution: 12,
            spanwise_spacing: Spacing::Cosine,
            cl_alpha_factor: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuselageOptions {
    pub panel_resolution: u32,
    pub panel_spacing: Spacing,
}

impl Default for FuselageOptions {
    fn default() -> Self {
        Self {
            panel_resolution: 24,
            panel_spacing: Spacing::Cosine,
        }
    }
}

/// Everything the input writer needs besides the geometry itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    pub airplane: AirplaneOptions,
    pub wing: WingOptions,
    pub section: SectionOptions,
    pub fuselage: FuselageOptions,
    /// Per-wing replacements for `wing`, keyed by wing name.
    pub wing_overrides: BTreeMap<String, WingOptions>,
    /// Emit a `CLAF` block for every section.
    pub claf: bool,
    /// Emit `JETPARAM` and `JETCONTROL` blocks.
    pub jet: bool,
    /// Run-case moment reference; the airplane's own reference point when unset.
    pub xyz_ref: Option<[f64; 3]>,
    pub ground_effect: bool,
    pub ground_effect_height: f64,
    /// Points per surface when writing companion airfoil files.
    pub airfoil_points_per_side: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            airplane: AirplaneOptions::default(),
            wing: WingOptions::default(),
            section: SectionOptions::default(),
            fuselage: FuselageOptions::default(),
            wing_overrides: BTreeMap::new(),
            claf: true,
            jet: true,
            xyz_ref: None,
            ground_effect: false,
            ground_effect_height: 0.0,
            airfoil_points_per_side: 50,
        }
    }
}

impl WriterOptions {
    /// Options used for the blown-wing demonstrator: finer 25x25 paneling
    /// on every surface and no `CLAF` blocks.
    pub fn blown_wing() -> Self {
        Self {
            wing: WingOptions {
                spanwise_resolution: 25,
                chordwise_resolution: 25,
                ..WingOptions::default()
            },
            claf: false,
            ..Self::default()
        }
    }

    /// Options for the named wing, falling back to the shared defaults.
    pub fn wing_options(&self, wing_name: &str) -> &WingOptions {
        self.wing_overrides.get(wing_name).unwrap_or(&self.wing)
    }
}
