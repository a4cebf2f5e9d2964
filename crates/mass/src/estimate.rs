//! Component mass estimate for a foam-core, fiberglass-skinned airframe with
//! a distributed electric motor array.

use jvl_config::{ItemAnchor, MassBudgetConfig, MaterialConfig};
use jvl_geometry::{Airplane, AreaType, Wing, WingXSec};
use jvl_propulsion::MotorArray;

use crate::{MassBudget, MassError, MassProperties};

/// Build the mass budget of `airplane` from the configured components and
/// materials.
pub fn estimate(airplane: &Airplane, config: &MassBudgetConfig) -> Result<MassBudget, MassError> {
    let main = find_wing(airplane, &config.main_wing)?;
    let htail = find_wing(airplane, &config.horizontal_tail)?;
    let vtail = find_wing(airplane, &config.vertical_tail)?;
    let main_root = root(main)?;
    let htail_root = root(htail)?;
    let vtail_root = root(vtail)?;

    let mut budget = MassBudget::new();

    let motors = MotorArray {
        count: config.motors.count,
        inboard_offset_m: config.motors.inboard_offset_m,
        spacing_m: config.motors.spacing_m,
        motor_mass_kg: config.motors.motor_mass_kg,
        fan_mass_total_kg: config.motors.fan_mass_total_kg,
    };
    let stations = motors.stations()?;
    let motor_props: MassProperties = stations
        .iter()
        .map(|&y| MassProperties::point(motors.motor_mass_kg, [0.0, y, 0.0]))
        .sum();
    let fan_props: MassProperties = stations
        .iter()
        .map(|&y| MassProperties::point(motors.fan_mass_kg(), [0.0, y, 0.0]))
        .sum();
    budget.push("motors", motor_props)?;
    budget.push("fans", fan_props)?;

    for item in &config.fixed_items {
        let xyz = match item.anchor {
            ItemAnchor::Point { x, y, z } => [x, y, z],
            ItemAnchor::MainWingMidChord => [main_root.chord * 0.5, 0.0, 0.0],
            ItemAnchor::TailArm => [htail_root.xyz_le[0] - main_root.xyz_le[0], 0.0, 0.0],
        };
        budget.push(item.name.clone(), MassProperties::point(item.mass_kg, xyz))?;
    }

    let fiberglass = &config.materials.fiberglass;
    let foam = &config.materials.foam;
    let t = config.layup_thickness_m;

    let wing_skin = skin_mass(airplane.s_ref, fiberglass, t) * config.wing_skin_fraction;
    let wing_core = core_mass(main, foam);
    log::debug!(
        "main wing: skin {:.4} kg, foam core {:.4} kg",
        wing_skin,
        wing_core
    );
    budget.push(
        "main wing structure",
        MassProperties::point(wing_skin + wing_core, [main_root.chord * 0.5, 0.0, 0.0]),
    )?;

    for (label, wing, section) in [
        ("horizontal tail structure", htail, htail_root),
        ("vertical tail structure", vtail, vtail_root),
    ] {
        let skin = skin_mass(wing.area(AreaType::Wetted), fiberglass, t);
        let core = core_mass(wing, foam);
        log::debug!("{label}: skin {skin:.4} kg, foam core {core:.4} kg");
        budget.push(
            label,
            MassProperties::point(
                skin + core,
                [section.chord * 0.5 + section.xyz_le[0], 0.0, 0.0],
            ),
        )?;
    }

    let spar = spar_mass(airplane, main_root, config);
    if config.include_spar {
        budget.push(
            "spar",
            MassProperties::point(spar, [main_root.chord * 0.25, 0.0, 0.0]),
        )?;
    } else {
        log::info!("spar estimate {spar:.4} kg not included in the budget");
    }

    let total = budget.total();
    log::info!(
        "estimated {} items, total mass {:.4} kg, cg x = {:.4} m",
        budget.len(),
        total.mass,
        total.x_cg
    );
    Ok(budget)
}

fn find_wing<'a>(airplane: &'a Airplane, name: &str) -> Result<&'a Wing, MassError> {
    airplane
        .wing(name)
        .ok_or_else(|| MassError::MissingWing(name.to_string()))
}

fn root(wing: &Wing) -> Result<&WingXSec, MassError> {
    wing.xsecs
        .first()
        .ok_or_else(|| MassError::MissingWing(wing.name.clone()))
}

/// Mass of a resin-wetted laminate covering `area`.
fn skin_mass(area: f64, material: &MaterialConfig, thickness: f64) -> f64 {
    area * material.density_kg_m3 * thickness * material.layup_epoxy_factor
}

fn core_mass(wing: &Wing, material: &MaterialConfig) -> f64 {
    wing.volume() * material.density_kg_m3 * material.layup_epoxy_factor
}

/// Full-span spar: balsa core, fiberglass wrap and carbon caps top and
/// bottom, sized by the root section depth.
fn spar_mass(airplane: &Airplane, root: &WingXSec, config: &MassBudgetConfig) -> f64 {
    let materials = &config.materials;
    let span = airplane.b_ref;
    let width = config.spar.width_m;
    let height = root.airfoil.max_thickness() * root.chord;

    let core = height * width * span * materials.balsa.density_kg_m3 * materials.balsa.layup_epoxy_factor;
    let wrap = skin_mass(
        2.0 * (height + width) * span,
        &materials.fiberglass,
        config.layup_thickness_m,
    );
    let caps = 2.0
        * width
        * config.spar.cap_height_m
        * span
        * materials.carbon_fiber.density_kg_m3
        * materials.carbon_fiber.layup_epoxy_factor;
    log::debug!("spar: core {core:.4} kg, wrap {wrap:.4} kg, caps {caps:.4} kg");
    core + wrap + caps
}
