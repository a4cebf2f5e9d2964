//! Mass file and mass breakdown writers.

use std::io::Write;
use std::path::Path;

use jvl_core::constants::{G0, RHO_SEA_LEVEL};
use jvl_core::format::g8;
use jvl_mass::{MassBudget, MassProperties};
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{ExportError, write_text, writer_for_path};

/// Unit scalings and defaults written at the top of the mass file.
#[derive(Debug, Clone)]
pub struct MassFileOptions {
    pub lunit_m: f64,
    pub munit_kg: f64,
    pub tunit_s: f64,
    pub g: f64,
    pub rho: f64,
    /// One row per budget item instead of a single aggregate row.
    pub per_item: bool,
}

impl Default for MassFileOptions {
    fn default() -> Self {
        Self {
            lunit_m: 1.0,
            munit_kg: 1.0,
            tunit_s: 1.0,
            g: G0,
            rho: RHO_SEA_LEVEL,
            per_item: false,
        }
    }
}

/// Render the solver mass file for `budget`.
pub fn render_mass_file(budget: &MassBudget, options: &MassFileOptions) -> String {
    let mut out = String::new();
    out.push_str("#-------------------------------------------------\n");
    out.push_str("#  Run-case mass file\n");
    out.push_str("#\n");
    out.push_str("#  Dimensional unit and parameter data.\n");
    out.push_str("#  Mass & Inertia breakdown.\n");
    out.push_str("#-------------------------------------------------\n");
    out.push('\n');
    out.push_str("#  Names and scalings for units to be used for trim and eigenmode calculations.\n");
    out.push_str("#  The Lunit and Munit values scale the mass, xyz, and inertia table data below.\n");
    out.push_str("#  Lunit value will also scale all lengths and areas in the input file.\n");
    out.push_str(&format!("Lunit = {} m\n", g8(options.lunit_m)));
    out.push_str(&format!("Munit = {} kg\n", g8(options.munit_kg)));
    out.push_str(&format!("Tunit = {} s\n", g8(options.tunit_s)));
    out.push('\n');
    out.push_str("#-------------------------\n");
    out.push_str("#  Gravity and density to be used as default values in trim setup.\n");
    out.push_str("#  Must be in the unit names given above (m, kg, s).\n");
    out.push_str(&format!("g   = {}\n", g8(options.g)));
    out.push_str(&format!("rho = {}\n", g8(options.rho)));
    out.push('\n');
    out.push_str("#-------------------------\n");
    out.push_str("#  Mass & Inertia breakdown.\n");
    out.push_str("#  x y z  is location of item's own CG.\n");
    out.push_str("#  Ixx... are item's inertias about item's own CG.\n");
    out.push_str("#\n");
    out.push_str("#  x,y,z system here must be exactly the same one used in the input file\n");
    out.push_str("#     (same orientation, same origin location, same length units)\n");
    out.push_str("#\n");
    out.push_str("#  mass   x     y     z       Ixx   Iyy   Izz    Ixy  Ixz  Iyz\n");

    if options.per_item {
        for item in budget.items() {
            out.push_str(&mass_row(&item.properties));
            out.push_str(&format!("   ! {}\n", item.name));
        }
    } else {
        out.push_str(&mass_row(&budget.total()));
        out.push('\n');
    }
    out
}

fn mass_row(p: &MassProperties) -> String {
    [
        p.mass, p.x_cg, p.y_cg, p.z_cg, p.ixx, p.iyy, p.izz, p.ixy, p.ixz, p.iyz,
    ]
    .iter()
    .map(|v| format!("   {}", g8(*v)))
    .collect()
}

/// Write the solver mass file.
pub fn write_mass_file(
    path: &Path,
    budget: &MassBudget,
    options: &MassFileOptions,
) -> Result<(), ExportError> {
    write_text(path, &render_mass_file(budget, options))?;
    log::info!(
        "wrote mass file {} ({} items, {:.4} kg)",
        path.display(),
        budget.len(),
        budget.total().mass
    );
    Ok(())
}

/// Row of the exported mass breakdown table.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownRow<'a> {
    pub name: &'a str,
    pub mass_kg: f64,
    pub x_cg_m: f64,
    pub y_cg_m: f64,
    pub z_cg_m: f64,
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,
    pub ixy: f64,
    pub ixz: f64,
    pub iyz: f64,
}

impl<'a> BreakdownRow<'a> {
    fn new(name: &'a str, p: &MassProperties) -> Self {
        Self {
            name,
            mass_kg: p.mass,
            x_cg_m: p.x_cg,
            y_cg_m: p.y_cg,
            z_cg_m: p.z_cg,
            ixx: p.ixx,
            iyy: p.iyy,
            izz: p.izz,
            ixy: p.ixy,
            ixz: p.ixz,
            iyz: p.iyz,
        }
    }
}

#[derive(Serialize)]
struct BreakdownSidecar<'a> {
    items: Vec<BreakdownRow<'a>>,
    total: BreakdownRow<'a>,
}

/// Write the per-item breakdown plus the aggregate, as JSON when the path
/// ends in `.json` and CSV otherwise (`-` writes CSV to stdout).
pub fn write_breakdown(path: &Path, budget: &MassBudget) -> Result<(), ExportError> {
    let total = budget.total();
    let items: Vec<BreakdownRow<'_>> = budget
        .items()
        .iter()
        .map(|item| BreakdownRow::new(&item.name, &item.properties))
        .collect();
    let total_row = BreakdownRow::new("total", &total);

    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = writer_for_path(path).map_err(io_err)?;

    if path.extension().map(|ext| ext == "json").unwrap_or(false) {
        to_writer_pretty(
            &mut writer,
            &BreakdownSidecar {
                items,
                total: total_row,
            },
        )?;
        writer.flush().map_err(io_err)?;
    } else {
        let mut csv = csv::Writer::from_writer(writer);
        for row in items.iter().chain(std::iter::once(&total_row)) {
            csv.serialize(row)?;
        }
        csv.flush().map_err(io_err)?;
    }
    log::info!("wrote mass breakdown {}", path.display());
    Ok(())
}
