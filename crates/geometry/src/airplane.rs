use jvl_core::vector::Vector3;

use crate::wing::AreaType;
use crate::{Fuselage, GeometryError, Wing};

/// Complete airframe: wings, fuselages and reference quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct Airplane {
    pub name: String,
    pub xyz_ref: Vector3,
    pub wings: Vec<Wing>,
    pub fuselages: Vec<Fuselage>,
    pub s_ref: f64,
    pub c_ref: f64,
    pub b_ref: f64,
}

impl Airplane {
    /// Validate the components and derive reference area, chord and span
    /// from the first wing. Without wings the references fall back to 1.
    pub fn new(
        name: impl Into<String>,
        xyz_ref: Vector3,
        wings: Vec<Wing>,
        fuselages: Vec<Fuselage>,
    ) -> Result<Self, GeometryError> {
        for wing in &wings {
            wing.validate()?;
        }
        for fuselage in &fuselages {
            fuselage.validate()?;
        }

        let (s_ref, c_ref, b_ref) = match wings.first() {
            Some(main) => (
                main.area(AreaType::Planform),
                main.mean_aerodynamic_chord(),
                main.span(),
            ),
            None => (1.0, 1.0, 1.0),
        };

        Ok(Self {
            name: name.into(),
            xyz_ref,
            wings,
            fuselages,
            s_ref,
            c_ref,
            b_ref,
        })
    }

    /// Override the derived reference quantities.
    pub fn with_reference(mut self, s_ref: f64, c_ref: f64, b_ref: f64) -> Self {
        self.s_ref = s_ref;
        self.c_ref = c_ref;
        self.b_ref = b_ref;
        self
    }

    /// Look up a wing by name (case-insensitive).
    pub fn wing(&self, name: &str) -> Option<&Wing> {
        self.wings.iter().find(|w| w.name.eq_ignore_ascii_case(name))
    }
}
