use std::f64::consts::PI;
use std::fs;

use approx::assert_relative_eq;
use jvl_aircraft::aircraft::{
    self, HORIZONTAL_TAIL, MAIN_WING, VERTICAL_TAIL, generate_fuselage_xsecs, initial_aircraft,
};
use jvl_aircraft::common::units::{INCH_M, inches};
use jvl_aircraft::geometry::{
    Airfoil, Airplane, AreaType, ControlSurface, Fuselage, FuselageXSec, GeometryError, Wing,
    WingXSec,
};

const DIAMOND_SELIG: &str = "Diamond\n1.0 0.0\n0.5 0.05\n0.0 0.0\n0.5 -0.05\n1.0 0.0\n";
const DIAMOND_LEDNICER: &str =
    "Diamond L\n3. 3.\n\n0.0 0.0\n0.5 0.05\n1.0 0.0\n\n0.0 0.0\n0.5 -0.05\n1.0 0.0\n";

fn rectangle(name: &str, half_span: f64, chord: f64) -> Wing {
    let airfoil = Airfoil::naca4("NACA0012").unwrap();
    Wing::new(
        name,
        vec![
            WingXSec::new([0.0, 0.0, 0.0], chord, 0.0, airfoil.clone()),
            WingXSec::new([0.0, half_span, 0.0], chord, 0.0, airfoil),
        ],
    )
}

#[test]
fn naca_sections_have_expected_thickness_and_camber() {
    let symmetric = Airfoil::naca4("NACA0012").unwrap();
    assert_eq!(symmetric.name, "NACA0012");
    assert_relative_eq!(symmetric.max_thickness(), 0.12, epsilon = 1e-3);
    assert_relative_eq!(symmetric.area(), 0.0822, epsilon = 1e-3);
    assert_relative_eq!(symmetric.perimeter(), 2.04, epsilon = 0.01);

    let cambered = Airfoil::naca4("naca 2412").unwrap();
    let upper_mid = cambered
        .upper()
        .into_iter()
        .min_by(|a, b| (a[0] - 0.4).abs().total_cmp(&(b[0] - 0.4).abs()))
        .unwrap();
    let lower_mid = cambered
        .lower()
        .into_iter()
        .min_by(|a, b| (a[0] - 0.4).abs().total_cmp(&(b[0] - 0.4).abs()))
        .unwrap();
    assert!(upper_mid[1] + lower_mid[1] > 0.0, "2412 should be cambered upwards");
}

#[test]
fn non_naca_names_are_rejected() {
    assert!(matches!(
        Airfoil::naca4("clarky"),
        Err(GeometryError::UnknownAirfoil(_))
    ));
    assert!(matches!(
        Airfoil::new("tiny", vec![[0.0, 0.0], [1.0, 0.0]]),
        Err(GeometryError::DegenerateAirfoil { points: 2, .. })
    ));
}

#[test]
fn selig_and_lednicer_files_parse_to_the_same_outline() {
    let selig = Airfoil::from_dat_str(DIAMOND_SELIG, "fallback").unwrap();
    let lednicer = Airfoil::from_dat_str(DIAMOND_LEDNICER, "fallback").unwrap();
    assert_eq!(selig.name, "Diamond");
    assert_eq!(lednicer.name, "Diamond L");
    assert_eq!(selig.coordinates, lednicer.coordinates);
    assert_relative_eq!(selig.area(), 0.05, epsilon = 1e-12);
    assert_relative_eq!(selig.max_thickness(), 0.1, epsilon = 1e-3);

    let nameless = Airfoil::from_dat_str("1 0\n0 0.1\n0 -0.1\n1 0\n", "stem").unwrap();
    assert_eq!(nameless.name, "stem");

    let broken = Airfoil::from_dat_str("name\n1 0\noops\n", "x");
    assert!(matches!(broken, Err(GeometryError::ParseDat { line: 3, .. })));
}

#[test]
fn dat_files_load_from_disk_and_repanel() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diamond.dat");
    fs::write(&path, DIAMOND_SELIG).unwrap();

    let airfoil = Airfoil::load_dat(&path).unwrap();
    let repaneled = airfoil.repanel(50);
    assert_eq!(repaneled.coordinates.len(), 99);
    assert_relative_eq!(repaneled.max_thickness(), 0.1, epsilon = 5e-3);

    let dat = repaneled.to_dat(true);
    let mut lines = dat.lines();
    assert_eq!(lines.next(), Some("Diamond"));
    assert_eq!(lines.next(), Some("1.000000 0.000000"));

    let missing = Airfoil::load_dat(dir.path().join("missing.dat"));
    assert!(matches!(missing, Err(GeometryError::Io { .. })));
}

#[test]
fn control_surfaces_encode_hinge_side_and_duplication() {
    let flap = ControlSurface::new("Flap", 0.7);
    assert_eq!(flap.hinge_x(), 0.7);
    assert_eq!(flap.sgn_dup(), 1);

    let slat = ControlSurface::new("Slat", 0.1).leading_edge().antisymmetric();
    assert_eq!(slat.hinge_x(), -0.1);
    assert_eq!(slat.sgn_dup(), -1);
}

#[test]
fn mirrored_wings_double_span_area_and_volume() {
    let half = rectangle("Half", 1.0, 0.5).with_symmetry(false);
    let full = rectangle("Full", 1.0, 0.5);

    assert_relative_eq!(half.span(), 1.0);
    assert_relative_eq!(full.span(), 2.0);
    assert_relative_eq!(full.area(AreaType::Planform), 1.0, epsilon = 1e-12);
    assert_relative_eq!(
        full.area(AreaType::Wetted),
        2.0 * half.area(AreaType::Wetted),
        epsilon = 1e-12
    );
    assert_relative_eq!(full.mean_aerodynamic_chord(), 0.5, epsilon = 1e-12);

    let section_area = Airfoil::naca4("NACA0012").unwrap().area() * 0.25;
    assert_relative_eq!(half.volume(), section_area, epsilon = 1e-9);
    assert_relative_eq!(full.volume(), 2.0 * section_area, epsilon = 1e-9);
}

#[test]
fn panel_span_is_measured_in_the_yz_plane() {
    let airfoil = Airfoil::naca4("NACA0012").unwrap();
    let swept_dihedral = Wing::new(
        "Dihedral",
        vec![
            WingXSec::new([0.0, 0.0, 0.0], 1.0, 0.0, airfoil.clone()),
            WingXSec::new([0.5, 3.0, 4.0], 1.0, 0.0, airfoil),
        ],
    );
    assert_relative_eq!(swept_dihedral.span(), 10.0, epsilon = 1e-12);
    assert_relative_eq!(swept_dihedral.area(AreaType::Planform), 10.0, epsilon = 1e-12);
}

#[test]
fn translation_moves_every_leading_edge() {
    let wing = rectangle("Tail", 1.0, 0.3).translate([2.0, 0.0, 0.5]);
    assert_eq!(wing.xsecs[0].xyz_le, [2.0, 0.0, 0.5]);
    assert_eq!(wing.xsecs[1].xyz_le, [2.0, 1.0, 0.5]);
}

#[test]
fn airplane_validates_and_derives_references() {
    let single = Wing::new("Stub", vec![rectangle("x", 1.0, 1.0).xsecs[0].clone()]);
    let err = Airplane::new("bad", [0.0; 3], vec![single], Vec::new()).unwrap_err();
    assert!(matches!(err, GeometryError::TooFewSections { count: 1, .. }));

    let mut zero_chord = rectangle("Zero", 1.0, 1.0);
    zero_chord.xsecs[1].chord = 0.0;
    let err = Airplane::new("bad", [0.0; 3], vec![zero_chord], Vec::new()).unwrap_err();
    assert!(matches!(err, GeometryError::NonPositiveChord { index: 1, .. }));

    let plane = Airplane::new(
        "Plane",
        [0.1, 0.0, 0.0],
        vec![rectangle("Main", 1.5, 0.4), rectangle("Tail", 0.5, 0.2)],
        Vec::new(),
    )
    .unwrap();
    assert_relative_eq!(plane.s_ref, 1.2, epsilon = 1e-12);
    assert_relative_eq!(plane.c_ref, 0.4, epsilon = 1e-12);
    assert_relative_eq!(plane.b_ref, 3.0, epsilon = 1e-12);
    assert!(plane.wing("tail").is_some());
    assert!(plane.wing("canard").is_none());

    let empty = Airplane::new("Empty", [0.0; 3], Vec::new(), Vec::new()).unwrap();
    assert_eq!((empty.s_ref, empty.c_ref, empty.b_ref), (1.0, 1.0, 1.0));
}

#[test]
fn superellipse_sections_span_ellipse_to_rectangle() {
    let ellipse = FuselageXSec::new([0.0; 3], 2.0, 1.0, 2.0);
    assert_relative_eq!(ellipse.area(), PI / 2.0, epsilon = 1e-9);
    assert_relative_eq!(ellipse.equivalent_radius(), (0.5_f64).sqrt(), epsilon = 1e-9);

    let boxy = FuselageXSec::new([0.0; 3], 2.0, 1.0, 50.0);
    assert!(boxy.area() > 1.9 && boxy.area() < 2.0);

    assert_eq!(FuselageXSec::new([0.0; 3], 0.0, 1.0, 2.0).area(), 0.0);
}

#[test]
fn fuselage_profile_runs_top_then_bottom() {
    let fuselage = Fuselage::new(
        "Pod",
        vec![
            FuselageXSec::new([0.0, 0.2, 0.0], 2.0, 2.0, 2.0),
            FuselageXSec::new([1.0, 0.2, 0.0], 2.0, 2.0, 2.0),
            FuselageXSec::new([2.0, 0.2, 0.0], 2.0, 2.0, 2.0),
        ],
    );
    fuselage.validate().unwrap();
    assert_relative_eq!(fuselage.mean_y(), 0.2, epsilon = 1e-12);

    let profile = fuselage.profile();
    assert_eq!(profile.len(), 5);
    let xs: Vec<f64> = profile.iter().map(|p| p[0]).collect();
    assert_eq!(xs, vec![2.0, 1.0, 0.0, 1.0, 2.0]);
    assert_relative_eq!(profile[0][1], 1.0, epsilon = 1e-9);
    assert_relative_eq!(profile[4][1], -1.0, epsilon = 1e-9);

    let stub = Fuselage::new("Stub", fuselage.xsecs[..1].to_vec());
    assert!(matches!(
        stub.validate(),
        Err(GeometryError::TooFewFuselageSections(_))
    ));
}

#[test]
fn demonstrator_matches_drawing_dimensions() {
    let plane = initial_aircraft(Airfoil::naca4("NACA2412").unwrap(), true).unwrap();
    assert_eq!(plane.name, aircraft::AIRCRAFT_NAME);
    let names: Vec<&str> = plane.wings.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec![MAIN_WING, VERTICAL_TAIL, HORIZONTAL_TAIL]);

    assert_relative_eq!(plane.b_ref, inches(120.0), epsilon = 1e-9);
    assert_relative_eq!(plane.s_ref, 1705.0 * INCH_M * INCH_M, epsilon = 1e-9);

    let main = plane.wing(MAIN_WING).unwrap();
    assert_eq!(main.xsecs.len(), 4);
    assert!(main.jet_param.is_some());
    let tip = main.xsecs.last().unwrap();
    assert_eq!(tip.control_surfaces[0].name, "Aileron");
    assert_eq!(tip.jet_controls[0].sgn_dup, -1.0);

    let vtail = plane.wing(VERTICAL_TAIL).unwrap();
    assert!(!vtail.symmetric);
    assert_relative_eq!(vtail.xsecs[0].xyz_le[0], inches(52.5), epsilon = 1e-12);

    let htail = plane.wing(HORIZONTAL_TAIL).unwrap();
    assert_relative_eq!(htail.xsecs[1].xyz_le[0], inches(68.0), epsilon = 1e-12);
    assert_relative_eq!(htail.xsecs[1].xyz_le[2], inches(15.0), epsilon = 1e-12);

    assert_eq!(plane.fuselages.len(), 1);
    assert_eq!(plane.fuselages[0].xsecs.len(), aircraft::FUSELAGE_STATIONS);

    let bare = initial_aircraft(Airfoil::naca4("NACA2412").unwrap(), false).unwrap();
    assert!(bare.fuselages.is_empty());
}

#[test]
fn generated_fuselage_follows_station_tables() {
    let xsecs = generate_fuselage_xsecs(10);
    let nose = &xsecs[0];
    let tail = xsecs.last().unwrap();
    assert_relative_eq!(nose.xyz_c[0], inches(-43.0), epsilon = 1e-12);
    assert_relative_eq!(nose.xyz_c[2], inches(-12.0), epsilon = 1e-12);
    assert_relative_eq!(nose.width, inches(3.0), epsilon = 1e-12);
    assert_relative_eq!(nose.shape, 2.0, epsilon = 1e-12);
    assert_relative_eq!(tail.xyz_c[0], inches(60.0), epsilon = 1e-12);
    assert_relative_eq!(tail.height, inches(2.0), epsilon = 1e-12);
    assert_relative_eq!(tail.shape, 50.0, epsilon = 1e-12);
}
