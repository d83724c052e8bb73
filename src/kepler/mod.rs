//! Keplerian elements to ECEF position
mod solver;
mod state;

pub use solver::{KeplerSolution, KeplerSolver};
pub use state::{OrbitalState, Position};

#[cfg(feature = "log")]
use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f64::consts::TAU;

use crate::{
    constants::{Omega, GM},
    prelude::{Channel, Error, ParameterFrame},
};

/// Keplerian [Elements] and first order perturbations, at one epoch.
/// All angles in radians, distances in meters.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Elements {
    /// Square root of the semi major axis (m^1/2)
    pub sqrt_a: f64,
    /// Eccentricity
    pub e: f64,
    /// Inclination angle at reference time (rad)
    pub i_0: f64,
    /// Argument of perigee (rad)
    pub omega: f64,
    /// Longitude of ascending node at reference time (rad)
    pub omega_0: f64,
    /// Mean anomaly at reference time (rad)
    pub m_0: f64,
    /// Mean motion difference (rad.s⁻¹)
    pub dn: f64,
    /// Rate of right ascension (rad.s⁻¹)
    pub omega_dot: f64,
    /// Rate of inclination angle (rad.s⁻¹)
    pub i_dot: f64,
    /// Elapsed time from the reference epoch (s)
    pub t_k: f64,
}

impl Elements {
    /// Resolves the [OrbitalState] at this epoch.
    /// Only elliptical orbits are supported: eccentricities close to 1
    /// lead to very large or non finite results.
    pub fn orbital_state(&self, solver: &KeplerSolver) -> OrbitalState {
        let t_k = self.t_k;
        let a = self.sqrt_a.powi(2);

        let n0 = (GM::GPS / a.powi(3)).sqrt();
        let n = n0 + self.dn;

        let mut m_k = (self.m_0 + n * t_k).rem_euclid(TAU);
        if m_k >= TAU {
            // rounding of tiny negative values
            m_k = 0.0;
        }

        let solution = solver.solve(m_k, self.e);
        let (sin_e_k, cos_e_k) = solution.eccentric_anomaly.sin_cos();
        let denom = 1.0 - self.e * cos_e_k;

        let sin_v_k = (1.0 - self.e.powi(2)).sqrt() * sin_e_k / denom;
        let cos_v_k = (cos_e_k - self.e) / denom;
        let v_k = sin_v_k.atan2(cos_v_k);

        OrbitalState {
            t_k,
            a,
            n,
            m_k,
            solution,
            v_k,
            u_k: v_k + self.omega,
            r_k: a * denom,
            i_k: self.i_0 + self.i_dot * t_k,
            omega_k: self.omega_0 + (self.omega_dot - Omega::GPS) * t_k,
        }
    }

    /// ECEF [Position] at this epoch.
    pub fn position(&self, solver: &KeplerSolver) -> Position {
        self.orbital_state(solver).ecef_position()
    }
}

/// [Positions] resolved over many epochs, stored column wise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Positions {
    /// ECEF X coordinates (m)
    pub x: Vec<f64>,
    /// ECEF Y coordinates (m)
    pub y: Vec<f64>,
    /// ECEF Z coordinates (m)
    pub z: Vec<f64>,
    /// Kepler's equation solution, per epoch
    pub solutions: Vec<KeplerSolution>,
}

impl Positions {
    fn with_capacity(n: usize) -> Self {
        Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
            solutions: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, state: &OrbitalState) {
        let p = state.ecef_position();
        self.x.push(p.x);
        self.y.push(p.y);
        self.z.push(p.z);
        self.solutions.push(state.solution);
    }

    /// Number of epochs
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if no epoch was resolved
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates [Position]s in epoch order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .zip(self.z.iter())
            .map(|((x, y), z)| Position::new(*x, *y, *z))
    }

    /// True if Kepler's equation converged at every epoch.
    pub fn converged(&self) -> bool {
        self.solutions.iter().all(|sol| sol.converged)
    }

    /// Largest number of Kepler iterations over all epochs.
    pub fn max_iterations(&self) -> u32 {
        self.solutions
            .iter()
            .map(|sol| sol.iterations)
            .max()
            .unwrap_or(0)
    }
}

/// Returns values of this [Channel], aligned to `size`.
/// Compatibility shim with legacy processing, not a correctness guarantee:
/// absent channels are zero filled and NaN values are replaced by zero.
fn aligned_channel(
    frame: &ParameterFrame,
    channel: Channel,
    size: usize,
) -> Result<Vec<f64>, Error> {
    match frame.get(channel) {
        Some(values) => {
            if values.len() != size {
                return Err(Error::UnalignedFrame(channel));
            }
            let missing = values.iter().filter(|v| v.is_nan()).count();
            if missing > 0 {
                #[cfg(feature = "log")]
                debug!("{}: {} missing values replaced by zero", channel, missing);
            }
            Ok(values
                .iter()
                .map(|v| if v.is_nan() { 0.0 } else { *v })
                .collect())
        },
        None => {
            #[cfg(feature = "log")]
            warn!("{}: channel is absent, zero filled", channel);
            Ok(vec![0.0; size])
        },
    }
}

/// Resolves the ECEF [Positions] described by this [ParameterFrame],
/// using the default [KeplerSolver].
///
/// The frame must contain the elapsed time channel ([Channel::Tk]), which
/// defines the number of epochs. Other channels must have the same length.
/// ```
/// use brdc_orbit::prelude::{compute_position, Channel, ParameterFrame};
///
/// let frame = ParameterFrame::from_values([
///     (Channel::SqrtA, vec![5153.795]),
///     (Channel::E, vec![0.0]),
///     (Channel::Tk, vec![0.0]),
/// ]);
///
/// let positions = compute_position(&frame).unwrap();
/// let r = positions.iter().next().unwrap().norm();
/// assert!((r - 5153.795_f64.powi(2)).abs() < 1e-6);
/// ```
pub fn compute_position(frame: &ParameterFrame) -> Result<Positions, Error> {
    compute_position_with(frame, &KeplerSolver::default())
}

/// Resolves the ECEF [Positions] described by this [ParameterFrame],
/// with desired [KeplerSolver]. Epochs are independent from one another.
pub fn compute_position_with(
    frame: &ParameterFrame,
    solver: &KeplerSolver,
) -> Result<Positions, Error> {
    let size = frame
        .get(Channel::Tk)
        .map(|tk| tk.len())
        .ok_or(Error::InvalidEphemeris)?;

    let t_k = aligned_channel(frame, Channel::Tk, size)?;
    let sqrt_a = aligned_channel(frame, Channel::SqrtA, size)?;
    let e = aligned_channel(frame, Channel::E, size)?;
    let i_0 = aligned_channel(frame, Channel::I0, size)?;
    let omega = aligned_channel(frame, Channel::Omega, size)?;
    let omega_0 = aligned_channel(frame, Channel::Omega0, size)?;
    let m_0 = aligned_channel(frame, Channel::M0, size)?;
    let dn = aligned_channel(frame, Channel::DeltaN, size)?;
    let omega_dot = aligned_channel(frame, Channel::OmegaDot, size)?;
    let i_dot = aligned_channel(frame, Channel::Idot, size)?;

    let mut positions = Positions::with_capacity(size);

    for k in 0..size {
        let elements = Elements {
            sqrt_a: sqrt_a[k],
            e: e[k],
            i_0: i_0[k],
            omega: omega[k],
            omega_0: omega_0[k],
            m_0: m_0[k],
            dn: dn[k],
            omega_dot: omega_dot[k],
            i_dot: i_dot[k],
            t_k: t_k[k],
        };
        positions.push(&elements.orbital_state(solver));
    }

    if !positions.converged() {
        #[cfg(feature = "log")]
        warn!("kepler solver did not converge for every epoch");
    }

    Ok(positions)
}
