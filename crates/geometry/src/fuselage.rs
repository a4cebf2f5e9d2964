//! Bodies described by superellipse cross-sections.

use std::f64::consts::PI;

use jvl_core::interp::mean;
use jvl_core::vector::Vector3;

use crate::GeometryError;

/// A fuselage station. `shape` is the superellipse exponent: 2 gives an
/// ellipse, large values approach a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct FuselageXSec {
    pub xyz_c: Vector3,
    pub xyz_normal: Vector3,
    pub width: f64,
    pub height: f64,
    pub shape: f64,
}

impl FuselageXSec {
    pub fn new(xyz_c: Vector3, width: f64, height: f64, shape: f64) -> Self {
        Self {
            xyz_c,
            xyz_normal: [1.0, 0.0, 0.0],
            width,
            height,
            shape,
        }
    }

    /// Cross-section area of the superellipse `|y/a|^s + |z/b|^s = 1`.
    pub fn area(&self) -> f64 {
        if self.width <= 0.0 || self.height <= 0.0 || self.shape <= 0.0 {
            return 0.0;
        }
        let s = self.shape;
        self.width * self.height * gamma(1.0 + 1.0 / s).powi(2) / gamma(1.0 + 2.0 / s)
    }

    /// Radius of the circle with the same area.
    pub fn equivalent_radius(&self) -> f64 {
        (self.area() / PI).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fuselage {
    pub name: String,
    pub xsecs: Vec<FuselageXSec>,
}

impl Fuselage {
    pub fn new(name: impl Into<String>, xsecs: Vec<FuselageXSec>) -> Self {
        Self {
            name: name.into(),
            xsecs,
        }
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.xsecs.len() < 2 {
            return Err(GeometryError::TooFewFuselageSections(self.name.clone()));
        }
        Ok(())
    }

    /// Mean lateral offset of the station centres.
    pub fn mean_y(&self) -> f64 {
        let ys: Vec<f64> = self.xsecs.iter().map(|x| x.xyz_c[1]).collect();
        mean(&ys)
    }

    /// Side-view outline of the area-equivalent body of revolution: top
    /// from tail to nose, then bottom from nose back to the tail.
    pub fn profile(&self) -> Vec<[f64; 2]> {
        let stations: Vec<(f64, f64, f64)> = self
            .xsecs
            .iter()
            .map(|x| (x.xyz_c[0], x.xyz_c[2], x.equivalent_radius()))
            .collect();
        let mut points: Vec<[f64; 2]> = stations.iter().rev().map(|&(x, z, r)| [x, z + r]).collect();
        points.extend(stations.iter().skip(1).map(|&(x, z, r)| [x, z - r]));
        points
    }
}

/// Lanczos approximation of the gamma function.
fn gamma(x: f64) -> f64 {
    const G: f64 = 7.0;
    const COEF: [f64; 9] = [
        0.999_999_999_999_809_9,
        676.520_368_121_885_1,
        -1_259.139_216_722_402_8,
        771.323_428_777_653_1,
        -176.615_029_162_140_6,
        12.507_343_278_686_905,
        -0.138_571_095_265_720_12,
        9.984_369_578_019_572e-6,
        1.505_632_735_149_311_6e-7,
    ];
    if x < 0.5 {
        return PI / ((PI * x).sin() * gamma(1.0 - x));
    }
    let x = x - 1.0;
    let t = x + G + 0.5;
    let sum = COEF
        .iter()
        .enumerate()
        .skip(1)
        .fold(COEF[0], |acc, (i, c)| acc + c / (x + i as f64));
    (2.0 * PI).sqrt() * t.powf(x + 0.5) * (-t).exp() * sum
}
