use crate::prelude::KeplerSolution;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ECEF [Position], in meters
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// X coordinate (m)
    pub x: f64,
    /// Y coordinate (m)
    pub y: f64,
    /// Z coordinate (m)
    pub z: f64,
}

impl Position {
    /// Builds a new [Position] from ECEF coordinates in meters.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Geocentric distance (m)
    pub fn norm(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// True if all coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from(xyz: (f64, f64, f64)) -> Self {
        Self::new(xyz.0, xyz.1, xyz.2)
    }
}

/// [OrbitalState] gathers the intermediate quantities resolved
/// at one epoch, from which the ECEF [Position] is deduced.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitalState {
    /// Elapsed time from the reference epoch (s)
    pub t_k: f64,
    /// Semi major axis (m)
    pub a: f64,
    /// Corrected mean motion (rad.s⁻¹)
    pub n: f64,
    /// Mean anomaly, in [0, 2π[ (rad)
    pub m_k: f64,
    /// Kepler's equation solution (eccentric anomaly)
    pub solution: KeplerSolution,
    /// True anomaly, in ]-π, π] (rad)
    pub v_k: f64,
    /// Argument of latitude (rad)
    pub u_k: f64,
    /// Orbital radius (m)
    pub r_k: f64,
    /// Corrected inclination (rad)
    pub i_k: f64,
    /// Longitude of ascending node, corrected for Earth rotation (rad)
    pub omega_k: f64,
}

impl OrbitalState {
    /// Position within the orbital plane (m)
    pub fn orbital_plane_position(&self) -> (f64, f64) {
        let (sin_u_k, cos_u_k) = self.u_k.sin_cos();
        (self.r_k * cos_u_k, self.r_k * sin_u_k)
    }

    /// Rotates the orbital plane position into the ECEF frame.
    pub fn ecef_position(&self) -> Position {
        let (x, y) = self.orbital_plane_position();
        let (sin_omega_k, cos_omega_k) = self.omega_k.sin_cos();
        let (sin_i_k, cos_i_k) = self.i_k.sin_cos();
        Position {
            x: x * cos_omega_k - y * cos_i_k * sin_omega_k,
            y: x * sin_omega_k + y * cos_i_k * cos_omega_k,
            z: y * sin_i_k,
        }
    }
}
