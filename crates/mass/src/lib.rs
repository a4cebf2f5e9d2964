//! Mass properties of point masses and rigid assemblies.
//!
//! Products of inertia follow the solver's mass-file convention
//! (`Ixy = ∫ x y dm`), and every inertia is taken about the item's own
//! centre of gravity.

pub mod estimate;

use std::iter::Sum;
use std::ops::Add;

use jvl_core::vector::{Vector3, scale, sub};
use thiserror::Error;

pub use estimate::estimate;

#[derive(Debug, Error)]
pub enum MassError {
    #[error("item `{name}` has negative mass {mass}")]
    NegativeMass { name: String, mass: f64 },
    #[error("wing `{0}` not found on the airplane")]
    MissingWing(String),
    #[error("motor layout rejected: {0}")]
    Propulsion(#[from] jvl_propulsion::PropulsionError),
}

/// Mass, centre of gravity and inertia tensor about that centre.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MassProperties {
    pub mass: f64,
    pub x_cg: f64,
    pub y_cg: f64,
    pub z_cg: f64,
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,
    pub ixy: f64,
    pub iyz: f64,
    pub ixz: f64,
}

impl MassProperties {
    /// A point mass with no inertia about its own centre.
    pub fn point(mass: f64, xyz: Vector3) -> Self {
        Self {
            mass,
            x_cg: xyz[0],
            y_cg: xyz[1],
            z_cg: xyz[2],
            ..Self::default()
        }
    }

    pub fn xyz_cg(&self) -> Vector3 {
        [self.x_cg, self.y_cg, self.z_cg]
    }

    /// Inertia about `point` via the parallel-axis theorem, ordered
    /// `[Ixx, Iyy, Izz, Ixy, Iyz, Ixz]`.
    pub fn inertia_about(&self, point: Vector3) -> [f64; 6] {
        let [dx, dy, dz] = sub(&self.xyz_cg(), &point);
        let m = self.mass;
        [
            self.ixx + m * (dy * dy + dz * dz),
            self.iyy + m * (dx * dx + dz * dz),
            self.izz + m * (dx * dx + dy * dy),
            self.ixy + m * dx * dy,
            self.iyz + m * dy * dz,
            self.ixz + m * dx * dz,
        ]
    }
}

impl Add for MassProperties {
    type Output = MassProperties;

    fn add(self, other: MassProperties) -> MassProperties {
        let mass = self.mass + other.mass;
        let cg = if mass == 0.0 {
            self.xyz_cg()
        } else {
            let a = scale(&self.xyz_cg(), self.mass);
            let b = scale(&other.xyz_cg(), other.mass);
            [
                (a[0] + b[0]) / mass,
                (a[1] + b[1]) / mass,
                (a[2] + b[2]) / mass,
            ]
        };
        let ia = self.inertia_about(cg);
        let ib = other.inertia_about(cg);
        MassProperties {
            mass,
            x_cg: cg[0],
            y_cg: cg[1],
            z_cg: cg[2],
            ixx: ia[0] + ib[0],
            iyy: ia[1] + ib[1],
            izz: ia[2] + ib[2],
            ixy: ia[3] + ib[3],
            iyz: ia[4] + ib[4],
            ixz: ia[5] + ib[5],
        }
    }
}

impl Sum for MassProperties {
    fn sum<I: Iterator<Item = MassProperties>>(iter: I) -> Self {
        iter.fold(MassProperties::default(), |acc, item| acc + item)
    }
}

/// A named contribution to the aircraft mass.
#[derive(Debug, Clone, PartialEq)]
pub struct MassItem {
    pub name: String,
    pub properties: MassProperties,
}

/// Ordered list of named mass items.
#[derive(Debug, Clone, Default)]
pub struct MassBudget {
    items: Vec<MassItem>,
}

impl MassBudget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        name: impl Into<String>,
        properties: MassProperties,
    ) -> Result<(), MassError> {
        let name = name.into();
        if properties.mass < 0.0 {
            return Err(MassError::NegativeMass {
                name,
                mass: properties.mass,
            });
        }
        self.items.push(MassItem { name, properties });
        Ok(())
    }

    pub fn items(&self) -> &[MassItem] {
        &self.items
    }

    pub fn item(&self, name: &str) -> Option<&MassItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Aggregate of every item.
    pub fn total(&self) -> MassProperties {
        self.items.iter().map(|item| item.properties).sum()
    }
}
