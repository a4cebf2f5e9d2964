//! Aircraft geometry definition and JVL input generation.
//!
//! The workspace crates hold the geometry model, configuration, mass
//! bookkeeping and file writers. This crate ties them together: the built-in
//! demonstrator airframe, conversion of airframe files into geometry, and
//! the command-line front-ends.

pub mod aircraft;
pub mod airframe;
pub mod logging;

pub use jvl_config as config;
pub use jvl_core as common;
pub use jvl_export as export;
pub use jvl_geometry as geometry;
pub use jvl_mass as mass;
pub use jvl_propulsion as propulsion;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
