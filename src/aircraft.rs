//! The blown-wing demonstrator: a constant-chord main wing with distributed
//! jet flaps, a conventional tail and an optional pod fuselage.
//!
//! Dimensions are specified in inches, as drawn, and converted to metres.

use jvl_core::interp::{interp, linspace};
use jvl_core::units::{inches, inches3};
use jvl_geometry::{
    Airfoil, Airplane, ControlSurface, Fuselage, FuselageXSec, GeometryError, JetControl,
    JetParam, Wing, WingXSec,
};

pub const AIRCRAFT_NAME: &str = "Initial Aircraft";
pub const MAIN_WING: &str = "Main Wing";
pub const VERTICAL_TAIL: &str = "Vertical Tail";
pub const HORIZONTAL_TAIL: &str = "Horizontal Tail";
pub const FUSELAGE: &str = "Fuselage";
pub const TAIL_AIRFOIL: &str = "NACA0012";
pub const FUSELAGE_STATIONS: usize = 10;

/// Assemble the demonstrator around `main_airfoil`.
pub fn initial_aircraft(main_airfoil: Airfoil, with_fuselage: bool) -> Result<Airplane, GeometryError> {
    let tail_airfoil = Airfoil::naca4(TAIL_AIRFOIL)?;
    let wings = vec![
        main_wing(main_airfoil),
        vertical_tail(tail_airfoil.clone()),
        horizontal_tail(tail_airfoil),
    ];
    let fuselages = if with_fuselage {
        vec![Fuselage::new(
            FUSELAGE,
            generate_fuselage_xsecs(FUSELAGE_STATIONS),
        )]
    } else {
        Vec::new()
    };
    Airplane::new(AIRCRAFT_NAME, [0.0; 3], wings, fuselages)
}

/// Four-section main wing. Flap1, Flap2 and the aileron each span one panel
/// and are declared on both bounding sections, together with the jet
/// variable blowing over them.
pub fn main_wing(airfoil: Airfoil) -> Wing {
    let flap1 = || ControlSurface::new("Flap1", 0.66);
    let flap2 = || ControlSurface::new("Flap2", 0.66);
    let aileron = || ControlSurface::new("Aileron", 0.66).antisymmetric();

    let xsecs = vec![
        WingXSec::new(inches3([0.0, 0.0, 0.0]), inches(15.0), 0.0, airfoil.clone())
            .with_control(flap1())
            .with_jet_control(JetControl::symmetric("FlapJet1")),
        WingXSec::new(inches3([0.0, 23.0, 0.0]), inches(15.0), 0.0, airfoil.clone())
            .with_control(flap1())
            .with_control(flap2())
            .with_jet_control(JetControl::symmetric("FlapJet1"))
            .with_jet_control(JetControl::symmetric("FlapJet2")),
        WingXSec::new(inches3([0.0, 41.0, 0.0]), inches(15.0), 0.0, airfoil.clone())
            .with_control(flap2())
            .with_control(aileron())
            .with_jet_control(JetControl::symmetric("FlapJet2"))
            .with_jet_control(JetControl::differential("AilJet")),
        WingXSec::new(inches3([6.0, 60.0, 0.0]), inches(10.0), 0.0, airfoil)
            .with_control(aileron())
            .with_jet_control(JetControl::differential("AilJet")),
    ];

    Wing::new(MAIN_WING, xsecs).with_jet_param(JetParam {
        hdisk: 0.188,
        fh: 0.0,
        djet0: 0.0,
        djet1: 0.0,
        djet3: 0.0,
        ..JetParam::default()
    })
}

pub fn vertical_tail(airfoil: Airfoil) -> Wing {
    let rudder = || ControlSurface::new("Rudder", 0.66);
    Wing::new(
        VERTICAL_TAIL,
        vec![
            WingXSec::new(inches3([0.0, 0.0, 0.0]), inches(15.0), 0.0, airfoil.clone())
                .with_control(rudder()),
            WingXSec::new(inches3([10.5, 0.0, 15.0]), inches(11.0), 0.0, airfoil)
                .with_control(rudder()),
        ],
    )
    .with_symmetry(false)
    .translate(inches3([52.5, 0.0, 0.0]))
}

pub fn horizontal_tail(airfoil: Airfoil) -> Wing {
    let elevator = || ControlSurface::new("Elevator", 0.5);
    Wing::new(
        HORIZONTAL_TAIL,
        vec![
            WingXSec::new(inches3([0.0, 0.0, 0.0]), inches(12.0), 0.0, airfoil.clone())
                .with_control(elevator()),
            WingXSec::new(inches3([3.0, 25.0, 0.0]), inches(7.0), 0.0, airfoil)
                .with_control(elevator()),
        ],
    )
    .translate(inches3([65.0, 0.0, 15.0]))
}

/// `n` fuselage stations from the nose at -43 in to the tail at 60 in:
/// a small round nose blending into a tall, nearly square cabin that tapers
/// to a small square tail.
pub fn generate_fuselage_xsecs(n: usize) -> Vec<FuselageXSec> {
    const Z_STATIONS: [f64; 4] = [-43.0, -20.0, 25.0, 52.0];
    const SIZE_STATIONS: [f64; 5] = [-43.0, -20.0, 25.0, 52.0, 60.0];

    linspace(-43.0, 60.0, n)
        .into_iter()
        .map(|x| {
            let z = interp(x, &Z_STATIONS, &[-12.0, -12.0, -5.0, -5.0]);
            let width = interp(x, &SIZE_STATIONS, &[3.0, 10.0, 10.0, 3.0, 1.0]);
            let height = interp(x, &SIZE_STATIONS, &[5.0, 15.0, 15.0, 5.0, 2.0]);
            let shape = interp(x, &Z_STATIONS, &[2.0, 50.0, 50.0, 50.0]);
            FuselageXSec::new(inches3([x, 0.0, z]), inches(width), inches(height), shape)
        })
        .collect()
}
