//! Inputs for the component mass estimate.

use serde::Deserialize;

use jvl_core::units::inches;

/// Distributed motor and fan layout.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MotorArrayConfig {
    pub count: usize,
    pub inboard_offset_m: f64,
    pub spacing_m: f64,
    pub motor_mass_kg: f64,
    pub fan_mass_total_kg: f64,
}

impl Default for MotorArrayConfig {
    fn default() -> Self {
        Self {
            count: 12,
            inboard_offset_m: inches(10.0),
            spacing_m: inches(5.0),
            motor_mass_kg: 0.02,
            fan_mass_total_kg: 0.36,
        }
    }
}

/// Where a fixed item's centre of gravity sits.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "at", rename_all = "snake_case")]
pub enum ItemAnchor {
    /// Explicit coordinates in metres.
    Point {
        x: f64,
        #[serde(default)]
        y: f64,
        #[serde(default)]
        z: f64,
    },
    /// Half the main wing root chord aft of the origin.
    MainWingMidChord,
    /// Distance from the main wing root leading edge to the horizontal tail
    /// root leading edge.
    TailArm,
}

/// A component of known mass (avionics, batteries, servos...).
#[derive(Debug, Deserialize, Clone)]
pub struct FixedItemConfig {
    pub name: String,
    pub mass_kg: f64,
    #[serde(flatten)]
    pub anchor: ItemAnchor,
}

impl FixedItemConfig {
    fn at_x(name: &str, mass_kg: f64, x: f64) -> Self {
        Self {
            name: name.to_string(),
            mass_kg,
            anchor: ItemAnchor::Point { x, y: 0.0, z: 0.0 },
        }
    }

    fn anchored(name: &str, mass_kg: f64, anchor: ItemAnchor) -> Self {
        Self {
            name: name.to_string(),
            mass_kg,
            anchor,
        }
    }
}

/// Bulk density and resin weight factor of a structural material.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct MaterialConfig {
    pub density_kg_m3: f64,
    #[serde(default = "default_layup_factor")]
    pub layup_epoxy_factor: f64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MaterialsConfig {
    pub foam: MaterialConfig,
    pub fiberglass: MaterialConfig,
    pub carbon_fiber: MaterialConfig,
    pub balsa: MaterialConfig,
}

impl Default for MaterialsConfig {
    fn default() -> Self {
        Self {
            foam: MaterialConfig {
                density_kg_m3: 4.8,
                layup_epoxy_factor: 1.0,
            },
            fiberglass: MaterialConfig {
                density_kg_m3: 2_600.0,
                layup_epoxy_factor: 2.2,
            },
            carbon_fiber: MaterialConfig {
                density_kg_m3: 1_750.0,
                layup_epoxy_factor: 2.2,
            },
            balsa: MaterialConfig {
                density_kg_m3: 160.0,
                layup_epoxy_factor: 1.2,
            },
        }
    }
}

/// Balsa-cored spar with carbon caps and a fiberglass wrap.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SparConfig {
    pub width_m: f64,
    pub cap_height_m: f64,
}

impl Default for SparConfig {
    fn default() -> Self {
        Self {
            width_m: 0.005,
            cap_height_m: 0.001,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MassBudgetConfig {
    pub motors: MotorArrayConfig,
    pub fixed_items: Vec<FixedItemConfig>,
    pub materials: MaterialsConfig,
    pub layup_thickness_m: f64,
    /// Fraction of the main wing planform covered by fiberglass skin.
    pub wing_skin_fraction: f64,
    pub spar: SparConfig,
    /// Add the spar estimate to the budget instead of only reporting it.
    pub include_spar: bool,
    pub main_wing: String,
    pub horizontal_tail: String,
    pub vertical_tail: String,
}

impl Default for MassBudgetConfig {
    fn default() -> Self {
        Self {
            motors: MotorArrayConfig::default(),
            fixed_items: vec![
                FixedItemConfig::anchored("fuselage", 0.2, ItemAnchor::MainWingMidChord),
                FixedItemConfig::at_x("servos", 0.3, 0.25),
                FixedItemConfig::at_x("motor wiring", 0.18, 0.1),
                FixedItemConfig::at_x("avionics", 0.18, 0.25),
                FixedItemConfig::at_x("lipos", 1.1, 0.25),
                FixedItemConfig::anchored("boom", 0.7, ItemAnchor::TailArm),
            ],
            materials: MaterialsConfig::default(),
            layup_thickness_m: 0.000_04,
            wing_skin_fraction: 0.1,
            spar: SparConfig::default(),
            include_spar: false,
            main_wing: "Main Wing".to_string(),
            horizontal_tail: "Horizontal Tail".to_string(),
            vertical_tail: "Vertical Tail".to_string(),
        }
    }
}

fn default_layup_factor() -> f64 {
    1.0
}
