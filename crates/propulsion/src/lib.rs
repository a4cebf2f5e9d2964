//! Jet propulsion descriptors and distributed motor layout.

use thiserror::Error;

/// Jet model parameters emitted as a `JETPARAM` block.
#[derive(Debug, Clone, PartialEq)]
pub struct JetParam {
    pub name: String,
    /// Disk height scaling factor.
    pub hdisk: f64,
    /// Propulsor type: 0 for a long duct, 1 for no duct.
    pub fh: f64,
    /// Jet deviation angle due to the trailing-edge wedge angle.
    pub djet0: f64,
    /// Incomplete jet turning due to finite jet height to flap ratio.
    pub djet1: f64,
    /// Boundary-layer separation effect on jet turning.
    pub djet3: f64,
}

impl Default for JetParam {
    fn default() -> Self {
        Self {
            name: "JET".to_string(),
            hdisk: 0.45,
            fh: 1.0,
            djet0: -2.0,
            djet1: -0.2,
            djet3: -0.0003,
        }
    }
}

/// Binding of a jet control variable to a wing section (`JETCONTROL`).
#[derive(Debug, Clone, PartialEq)]
pub struct JetControl {
    pub jet_name: String,
    /// Delta_Vjet/Vinf per unit of the jet variable.
    pub gain: f64,
    /// 1 for symmetric blowing, -1 for differential blowing.
    pub sgn_dup: f64,
}

impl JetControl {
    pub fn new(jet_name: impl Into<String>, gain: f64, sgn_dup: f64) -> Self {
        Self {
            jet_name: jet_name.into(),
            gain,
            sgn_dup,
        }
    }

    /// Symmetric binding with unit gain.
    pub fn symmetric(jet_name: impl Into<String>) -> Self {
        Self::new(jet_name, 1.0, 1.0)
    }

    /// Differential binding with unit gain.
    pub fn differential(jet_name: impl Into<String>) -> Self {
        Self::new(jet_name, 1.0, -1.0)
    }
}

#[derive(Debug, Error)]
pub enum PropulsionError {
    #[error("motor count {0} cannot be split into mirrored pairs")]
    UnpairedMotors(usize),
    #[error("motor spacing must be non-negative")]
    NegativeSpacing,
}

/// Distributed electric motors mounted in mirrored pairs along the span.
#[derive(Debug, Clone)]
pub struct MotorArray {
    pub count: usize,
    /// Spanwise distance from the centerline to the innermost motor (m).
    pub inboard_offset_m: f64,
    /// Spanwise distance between neighbouring motors on one side (m).
    pub spacing_m: f64,
    pub motor_mass_kg: f64,
    /// Combined mass of every fan in the array (kg).
    pub fan_mass_total_kg: f64,
}

impl MotorArray {
    pub fn validate(&self) -> Result<(), PropulsionError> {
        if self.count % 2 != 0 {
            return Err(PropulsionError::UnpairedMotors(self.count));
        }
        if self.spacing_m < 0.0 {
            return Err(PropulsionError::NegativeSpacing);
        }
        Ok(())
    }

    /// Spanwise station of every motor, starboard then port for each pair.
    pub fn stations(&self) -> Result<Vec<f64>, PropulsionError> {
        self.validate()?;
        let mut stations = Vec::with_capacity(self.count);
        for i in 0..self.count / 2 {
            let y = self.inboard_offset_m + self.spacing_m * i as f64;
            stations.push(y);
            stations.push(-y);
        }
        Ok(stations)
    }

    /// Mass of a single fan.
    pub fn fan_mass_kg(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.fan_mass_total_kg / self.count as f64
        }
    }
}
