//! Lifting surfaces built from spanwise sections.

use jvl_core::vector::{Vector3, add, norm, sub};
use jvl_propulsion::{JetControl, JetParam};

use crate::{Airfoil, GeometryError};

/// Hinged control surface declared on a wing section.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSurface {
    pub name: String,
    /// Deflects the same way on both sides of a mirrored wing.
    pub symmetric: bool,
    pub deflection: f64,
    /// Hinge location as a fraction of the local chord.
    pub hinge_point: f64,
    pub trailing_edge: bool,
}

impl Default for ControlSurface {
    fn default() -> Self {
        Self {
            name: "Untitled".to_string(),
            symmetric: true,
            deflection: 0.0,
            hinge_point: 0.75,
            trailing_edge: true,
        }
    }
}

impl ControlSurface {
    pub fn new(name: impl Into<String>, hinge_point: f64) -> Self {
        Self {
            name: name.into(),
            hinge_point,
            ..Self::default()
        }
    }

    /// Mark the surface as deflecting differentially across the mirror plane.
    pub fn antisymmetric(mut self) -> Self {
        self.symmetric = false;
        self
    }

    pub fn leading_edge(mut self) -> Self {
        self.trailing_edge = false;
        self
    }

    /// Hinge position as the solver expects it: negative for leading-edge
    /// surfaces.
    pub fn hinge_x(&self) -> f64 {
        if self.trailing_edge {
            self.hinge_point
        } else {
            -self.hinge_point
        }
    }

    /// Duplicate-sign for the mirrored surface.
    pub fn sgn_dup(&self) -> i32 {
        if self.symmetric { 1 } else { -1 }
    }
}

/// One spanwise station of a wing.
#[derive(Debug, Clone, PartialEq)]
pub struct WingXSec {
    pub xyz_le: Vector3,
    pub chord: f64,
    /// Incidence in degrees.
    pub twist: f64,
    pub airfoil: Airfoil,
    pub control_surfaces: Vec<ControlSurface>,
    pub jet_controls: Vec<JetControl>,
    /// Section-level jet parameters, emitted after the jet controls.
    pub jet_params: Vec<JetParam>,
}

impl WingXSec {
    pub fn new(xyz_le: Vector3, chord: f64, twist: f64, airfoil: Airfoil) -> Self {
        Self {
            xyz_le,
            chord,
            twist,
            airfoil,
            control_surfaces: Vec::new(),
            jet_controls: Vec::new(),
            jet_params: Vec::new(),
        }
    }

    pub fn with_control(mut self, surface: ControlSurface) -> Self {
        self.control_surfaces.push(surface);
        self
    }

    pub fn with_jet_control(mut self, control: JetControl) -> Self {
        self.jet_controls.push(control);
        self
    }

    pub fn with_jet_param(mut self, param: JetParam) -> Self {
        self.jet_params.push(param);
        self
    }
}

/// Which surface area a wing query reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaType {
    Planform,
    Wetted,
}

/// A lifting surface, optionally mirrored about the XZ plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Wing {
    pub name: String,
    pub xsecs: Vec<WingXSec>,
    pub symmetric: bool,
    pub jet_param: Option<JetParam>,
}

impl Wing {
    pub fn new(name: impl Into<String>, xsecs: Vec<WingXSec>) -> Self {
        Self {
            name: name.into(),
            xsecs,
            symmetric: true,
            jet_param: None,
        }
    }

    pub fn with_symmetry(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    pub fn with_jet_param(mut self, param: JetParam) -> Self {
        self.jet_param = Some(param);
        self
    }

    /// Shift every section's leading edge by `offset`.
    pub fn translate(mut self, offset: Vector3) -> Self {
        for xsec in &mut self.xsecs {
            xsec.xyz_le = add(&xsec.xyz_le, &offset);
        }
        self
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.xsecs.len() < 2 {
            return Err(GeometryError::TooFewSections {
                wing: self.name.clone(),
                count: self.xsecs.len(),
            });
        }
        for (index, xsec) in self.xsecs.iter().enumerate() {
            if xsec.chord <= 0.0 {
                return Err(GeometryError::NonPositiveChord {
                    wing: self.name.clone(),
                    index,
                    chord: xsec.chord,
                });
            }
        }
        Ok(())
    }

    fn mirror_factor(&self) -> f64 {
        if self.symmetric { 2.0 } else { 1.0 }
    }

    /// Span of each panel, measured in the YZ plane.
    fn panel_spans(&self) -> Vec<f64> {
        self.xsecs
            .windows(2)
            .map(|w| {
                let [_, dy, dz] = sub(&w[1].xyz_le, &w[0].xyz_le);
                norm(&[0.0, dy, dz])
            })
            .collect()
    }

    /// Total span in the YZ plane, both halves for mirrored wings.
    pub fn span(&self) -> f64 {
        self.panel_spans().iter().sum::<f64>() * self.mirror_factor()
    }

    pub fn area(&self, kind: AreaType) -> f64 {
        let one_side: f64 = self
            .xsecs
            .windows(2)
            .zip(self.panel_spans())
            .map(|(w, span)| {
                let (a, b) = (&w[0], &w[1]);
                match kind {
                    AreaType::Planform => 0.5 * (a.chord + b.chord) * span,
                    AreaType::Wetted => {
                        0.5 * (a.chord * a.airfoil.perimeter() + b.chord * b.airfoil.perimeter())
                            * span
                    }
                }
            })
            .sum();
        one_side * self.mirror_factor()
    }

    /// Area-weighted mean aerodynamic chord of the trapezoidal panels.
    pub fn mean_aerodynamic_chord(&self) -> f64 {
        let mut weighted = 0.0;
        let mut total = 0.0;
        for (w, span) in self.xsecs.windows(2).zip(self.panel_spans()) {
            let (ca, cb) = (w[0].chord, w[1].chord);
            let area = 0.5 * (ca + cb) * span;
            let mac = 2.0 / 3.0 * (ca + cb - ca * cb / (ca + cb));
            weighted += area * mac;
            total += area;
        }
        if total > 0.0 {
            weighted / total
        } else {
            self.xsecs.first().map(|x| x.chord).unwrap_or(0.0)
        }
    }

    /// Enclosed volume, treating each panel as a frustum between its
    /// section cross-sections.
    pub fn volume(&self) -> f64 {
        let one_side: f64 = self
            .xsecs
            .windows(2)
            .zip(self.panel_spans())
            .map(|(w, span)| {
                let sa = w[0].airfoil.area() * w[0].chord.powi(2);
                let sb = w[1].airfoil.area() * w[1].chord.powi(2);
                span / 3.0 * (sa + sb + (sa * sb).sqrt())
            })
            .sum();
        one_side * self.mirror_factor()
    }
}
