//! Geometry model for vortex-lattice input generation.
//!
//! Wings are built from spanwise sections, each carrying its airfoil,
//! control surfaces and jet control bindings. Fuselages are described by
//! superellipse cross-sections. The types hold plain data plus the handful
//! of derived quantities (span, areas, volume, section thickness) that the
//! solver file writer and the mass estimate need.

pub mod airfoil;
pub mod airplane;
pub mod fuselage;
pub mod wing;

use std::path::PathBuf;

use thiserror::Error;

pub use airfoil::Airfoil;
pub use airplane::Airplane;
pub use fuselage::{Fuselage, FuselageXSec};
pub use jvl_propulsion::{JetControl, JetParam};
pub use wing::{AreaType, ControlSurface, Wing, WingXSec};

/// Errors surfaced while building or validating geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("wing `{wing}` needs at least two sections, found {count}")]
    TooFewSections { wing: String, count: usize },
    #[error("wing `{wing}` section {index} has non-positive chord {chord}")]
    NonPositiveChord {
        wing: String,
        index: usize,
        chord: f64,
    },
    #[error("airfoil `{name}` has {points} coordinates, at least 3 are required")]
    DegenerateAirfoil { name: String, points: usize },
    #[error("airfoil name `{0}` is not a NACA 4-digit designation")]
    UnknownAirfoil(String),
    #[error("malformed airfoil coordinate on line {line}: `{content}`")]
    ParseDat { line: usize, content: String },
    #[error("failed to read airfoil file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("fuselage `{0}` needs at least two cross-sections")]
    TooFewFuselageSections(String),
}
