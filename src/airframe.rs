//! Conversion of airframe files into geometry.

use std::path::{Path, PathBuf};

use jvl_config::{
    AirplaneConfig, ConfigError, FuselageConfig, JetParamConfig, SectionConfig, WingConfig,
    load_airplane_config,
};
use jvl_core::vector::{Vector3, scale};
use jvl_geometry::{
    Airfoil, Airplane, ControlSurface, Fuselage, FuselageXSec, GeometryError, JetControl,
    JetParam, Wing, WingXSec,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirframeError {
    #[error("failed to load airframe: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid airframe geometry: {0}")]
    Geometry(#[from] GeometryError),
}

/// Resolve an airfoil reference: a NACA 4-digit designation, or a `.dat`
/// path relative to `base_dir`.
pub fn resolve_airfoil(reference: &str, base_dir: &Path) -> Result<Airfoil, GeometryError> {
    if reference.trim().to_ascii_lowercase().starts_with("naca") {
        return Airfoil::naca4(reference);
    }
    let path = Path::new(reference);
    let path: PathBuf = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    };
    Airfoil::load_dat(path)
}

/// Load an airframe file and build its geometry. Relative airfoil paths
/// resolve against the file's directory.
pub fn load_airplane(path: impl AsRef<Path>) -> Result<Airplane, AirframeError> {
    let path = path.as_ref();
    let config = load_airplane_config(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(from_config(&config, base_dir)?)
}

/// Load the airframe at `config`, or build the built-in demonstrator around
/// `main_airfoil` when no file is given.
pub fn load_or_default(
    config: Option<&Path>,
    main_airfoil: &str,
    with_fuselage: bool,
) -> Result<Airplane, AirframeError> {
    match config {
        Some(path) => load_airplane(path),
        None => {
            let airfoil = resolve_airfoil(main_airfoil, Path::new("."))?;
            Ok(crate::aircraft::initial_aircraft(airfoil, with_fuselage)?)
        }
    }
}

/// Convert an [`AirplaneConfig`] into an [`Airplane`], scaling lengths to
/// metres.
pub fn from_config(config: &AirplaneConfig, base_dir: &Path) -> Result<Airplane, GeometryError> {
    let k = config.units.to_meters();
    let wings = config
        .wings
        .iter()
        .map(|wing| wing_from_config(wing, k, base_dir))
        .collect::<Result<Vec<_>, _>>()?;
    let fuselages = config
        .fuselages
        .iter()
        .map(|fuselage| fuselage_from_config(fuselage, k))
        .collect();

    let airplane = Airplane::new(
        config.name.clone(),
        scale(&config.xyz_ref, k),
        wings,
        fuselages,
    )?;
    Ok(match &config.reference {
        Some(r) => airplane.with_reference(r.s_ref * k * k, r.c_ref * k, r.b_ref * k),
        None => airplane,
    })
}

fn wing_from_config(config: &WingConfig, k: f64, base_dir: &Path) -> Result<Wing, GeometryError> {
    let xsecs = config
        .sections
        .iter()
        .map(|section| section_from_config(section, k, base_dir))
        .collect::<Result<Vec<_>, _>>()?;
    let mut wing = Wing::new(config.name.clone(), xsecs)
        .with_symmetry(config.symmetric)
        .translate(scale(&config.translate, k));
    if let Some(param) = &config.jet_param {
        wing = wing.with_jet_param(jet_param(param));
    }
    Ok(wing)
}

fn section_from_config(
    config: &SectionConfig,
    k: f64,
    base_dir: &Path,
) -> Result<WingXSec, GeometryError> {
    let airfoil = resolve_airfoil(&config.airfoil, base_dir)?;
    let mut xsec = WingXSec::new(scale(&config.xyz_le, k), config.chord * k, config.twist, airfoil);
    xsec.control_surfaces = config
        .controls
        .iter()
        .map(|c| ControlSurface {
            name: c.name.clone(),
            symmetric: c.symmetric,
            deflection: c.deflection,
            hinge_point: c.hinge_point,
            trailing_edge: c.trailing_edge,
        })
        .collect();
    xsec.jet_controls = config
        .jet_controls
        .iter()
        .map(|j| JetControl::new(j.name.clone(), j.gain, j.sgn_dup))
        .collect();
    xsec.jet_params = config.jet_params.iter().map(jet_param).collect();
    Ok(xsec)
}

fn fuselage_from_config(config: &FuselageConfig, k: f64) -> Fuselage {
    let xsecs = config
        .sections
        .iter()
        .map(|s| {
            let center: Vector3 = scale(&s.xyz_c, k);
            FuselageXSec::new(center, s.width * k, s.height * k, s.shape)
        })
        .collect();
    Fuselage::new(config.name.clone(), xsecs)
}

fn jet_param(config: &JetParamConfig) -> JetParam {
    JetParam {
        name: config.name.clone(),
        hdisk: config.hdisk,
        fh: config.fh,
        djet0: config.djet0,
        djet1: config.djet1,
        djet3: config.djet3,
    }
}
