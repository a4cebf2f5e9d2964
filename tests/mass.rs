use std::fs;

use approx::assert_relative_eq;
use jvl_aircraft::aircraft::initial_aircraft;
use jvl_aircraft::common::units::{INCH_M, inches};
use jvl_aircraft::config::{ItemAnchor, MassBudgetConfig};
use jvl_aircraft::export::{MassFileOptions, render_mass_file, write_breakdown, write_mass_file};
use jvl_aircraft::geometry::{Airfoil, Airplane};
use jvl_aircraft::mass::{MassBudget, MassError, MassProperties, estimate};
use jvl_aircraft::propulsion::{MotorArray, PropulsionError};

fn demonstrator() -> Airplane {
    initial_aircraft(Airfoil::naca4("NACA2412").unwrap(), false).unwrap()
}

#[test]
fn point_masses_combine_with_parallel_axis_terms() {
    let a = MassProperties::point(1.0, [1.0, 1.0, 0.0]);
    let b = MassProperties::point(1.0, [-1.0, -1.0, 0.0]);
    let sum = a + b;
    assert_relative_eq!(sum.mass, 2.0);
    assert_eq!(sum.xyz_cg(), [0.0, 0.0, 0.0]);
    assert_relative_eq!(sum.ixx, 2.0);
    assert_relative_eq!(sum.iyy, 2.0);
    assert_relative_eq!(sum.izz, 4.0);
    assert_relative_eq!(sum.ixy, 2.0);
    assert_relative_eq!(sum.ixz, 0.0);

    let heavy = MassProperties::point(3.0, [4.0, 0.0, 0.0]) + MassProperties::point(1.0, [0.0; 3]);
    assert_relative_eq!(heavy.x_cg, 3.0);
    assert_relative_eq!(heavy.iyy, 3.0 * 1.0 + 1.0 * 9.0);

    let about_origin = heavy.inertia_about([0.0; 3]);
    assert_relative_eq!(about_origin[1], 48.0);
    assert_relative_eq!(about_origin[0], 0.0);
}

#[test]
fn summing_nothing_gives_an_empty_body() {
    let total: MassProperties = Vec::<MassProperties>::new().into_iter().sum();
    assert_eq!(total, MassProperties::default());
    assert_eq!(MassBudget::new().total().mass, 0.0);
}

#[test]
fn budgets_reject_negative_masses() {
    let mut budget = MassBudget::new();
    budget
        .push("battery", MassProperties::point(1.0, [0.2, 0.0, 0.0]))
        .unwrap();
    let err = budget
        .push("balloon", MassProperties::point(-0.1, [0.0; 3]))
        .unwrap_err();
    assert!(matches!(err, MassError::NegativeMass { ref name, .. } if name == "balloon"));
    assert_eq!(budget.len(), 1);
    assert!(budget.item("battery").is_some());
}

#[test]
fn motor_stations_mirror_about_the_centreline() {
    let motors = MotorArray {
        count: 4,
        inboard_offset_m: 0.2,
        spacing_m: 0.1,
        motor_mass_kg: 0.02,
        fan_mass_total_kg: 0.12,
    };
    let stations = motors.stations().unwrap();
    assert_eq!(stations.len(), 4);
    assert_relative_eq!(stations[0], 0.2);
    assert_relative_eq!(stations[1], -0.2);
    assert_relative_eq!(stations[2], 0.3, epsilon = 1e-12);
    assert_relative_eq!(stations[3], -0.3, epsilon = 1e-12);
    assert_relative_eq!(motors.fan_mass_kg(), 0.03);

    let odd = MotorArray { count: 3, ..motors };
    assert!(matches!(odd.stations(), Err(PropulsionError::UnpairedMotors(3))));
}

#[test]
fn demonstrator_estimate_lists_every_component() {
    let plane = demonstrator();
    let budget = estimate(&plane, &MassBudgetConfig::default()).unwrap();
    let names: Vec<&str> = budget.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "motors",
            "fans",
            "fuselage",
            "servos",
            "motor wiring",
            "avionics",
            "lipos",
            "boom",
            "main wing structure",
            "horizontal tail structure",
            "vertical tail structure",
        ]
    );

    let motors = budget.item("motors").unwrap().properties;
    assert_relative_eq!(motors.mass, 0.24, epsilon = 1e-12);
    assert_relative_eq!(motors.y_cg, 0.0, epsilon = 1e-12);
    assert_relative_eq!(motors.ixx, 0.04 * 3475.0 * INCH_M * INCH_M, epsilon = 1e-12);
    assert_relative_eq!(motors.iyy, 0.0, epsilon = 1e-12);
    assert_relative_eq!(budget.item("fans").unwrap().properties.mass, 0.36, epsilon = 1e-12);

    let fuselage = budget.item("fuselage").unwrap().properties;
    assert_relative_eq!(fuselage.x_cg, inches(7.5), epsilon = 1e-12);
    let boom = budget.item("boom").unwrap().properties;
    assert_relative_eq!(boom.x_cg, inches(65.0), epsilon = 1e-12);
    let htail = budget.item("horizontal tail structure").unwrap().properties;
    assert_relative_eq!(htail.x_cg, inches(71.0), epsilon = 1e-12);
    let vtail = budget.item("vertical tail structure").unwrap().properties;
    assert_relative_eq!(vtail.x_cg, inches(60.0), epsilon = 1e-12);

    let wing = budget.item("main wing structure").unwrap().properties;
    let main = plane.wing("Main Wing").unwrap();
    let skin = plane.s_ref * 2_600.0 * 4.0e-5 * 2.2 * 0.1;
    let core = main.volume() * 4.8;
    assert_relative_eq!(wing.mass, skin + core, epsilon = 1e-12);
    assert!(htail.mass > 0.0 && vtail.mass > 0.0);

    let fixed: f64 = 0.2 + 0.3 + 0.18 + 0.18 + 1.1 + 0.7;
    let structure = wing.mass + htail.mass + vtail.mass;
    assert_relative_eq!(
        budget.total().mass,
        0.24 + 0.36 + fixed + structure,
        epsilon = 1e-9
    );
    assert!(budget.item("spar").is_none());
}

#[test]
fn spar_joins_the_budget_when_requested() {
    let plane = demonstrator();
    let config = MassBudgetConfig {
        include_spar: true,
        ..MassBudgetConfig::default()
    };
    let budget = estimate(&plane, &config).unwrap();
    let spar = budget.items().last().unwrap();
    assert_eq!(spar.name, "spar");
    assert!(spar.properties.mass > 0.0);
    assert_relative_eq!(spar.properties.x_cg, inches(3.75), epsilon = 1e-12);
}

#[test]
fn estimate_reports_layout_problems() {
    let plane = demonstrator();
    let renamed = MassBudgetConfig {
        horizontal_tail: "Canard".to_string(),
        ..MassBudgetConfig::default()
    };
    assert!(matches!(
        estimate(&plane, &renamed),
        Err(MassError::MissingWing(name)) if name == "Canard"
    ));

    let mut odd = MassBudgetConfig::default();
    odd.motors.count = 5;
    assert!(matches!(
        estimate(&plane, &odd),
        Err(MassError::Propulsion(PropulsionError::UnpairedMotors(5)))
    ));

    let mut custom = MassBudgetConfig::default();
    custom.fixed_items[3].anchor = ItemAnchor::Point {
        x: 0.5,
        y: 0.0,
        z: -0.1,
    };
    let budget = estimate(&plane, &custom).unwrap();
    let avionics = budget.item("avionics").unwrap().properties;
    assert_eq!(avionics.xyz_cg(), [0.5, 0.0, -0.1]);
}

fn small_budget() -> MassBudget {
    let mut budget = MassBudget::new();
    budget
        .push("nose", MassProperties::point(1.0, [2.0, 0.0, 0.0]))
        .unwrap();
    budget
        .push("tail", MassProperties::point(1.0, [4.0, 0.0, 0.0]))
        .unwrap();
    budget
}

#[test]
fn mass_file_has_units_gravity_and_rows() {
    let budget = small_budget();
    let text = render_mass_file(&budget, &MassFileOptions::default());
    assert!(text.contains("\nLunit = 1 m\nMunit = 1 kg\nTunit = 1 s\n"));
    assert!(text.contains("\ng   = 9.81\nrho = 1.225\n"));
    assert!(text.contains("#  mass   x     y     z       Ixx   Iyy   Izz    Ixy  Ixz  Iyz\n"));

    let rows: Vec<&str> = text
        .lines()
        .filter(|line| !line.starts_with('#') && line.starts_with("   "))
        .collect();
    assert_eq!(rows, vec!["   2   3   0   0   0   2   2   0   0   0"]);

    let per_item = render_mass_file(
        &budget,
        &MassFileOptions {
            per_item: true,
            ..MassFileOptions::default()
        },
    );
    assert!(per_item.contains("   1   2   0   0   0   0   0   0   0   0   ! nose\n"));
    assert!(per_item.contains("   1   4   0   0   0   0   0   0   0   0   ! tail\n"));
}

#[test]
fn mass_and_breakdown_files_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let budget = small_budget();

    let mass_path = dir.path().join("plane.mass");
    write_mass_file(&mass_path, &budget, &MassFileOptions::default()).unwrap();
    assert!(fs::read_to_string(&mass_path).unwrap().starts_with("#---"));

    let csv_path = dir.path().join("breakdown.csv");
    write_breakdown(&csv_path, &budget).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("name,mass_kg,x_cg_m,y_cg_m,z_cg_m,ixx,iyy,izz,ixy,ixz,iyz")
    );
    assert!(lines.next().unwrap().starts_with("nose,1.0,2.0,"));
    assert!(lines.last().unwrap().starts_with("total,2.0,3.0,"));

    let json_path = dir.path().join("breakdown.json");
    write_breakdown(&json_path, &budget).unwrap();
    let json = fs::read_to_string(&json_path).unwrap();
    assert!(json.contains("\"name\": \"tail\""));
    assert!(json.contains("\"total\": {"));
}
