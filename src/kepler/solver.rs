//! Kepler's equation solver
use crate::constants::Kepler;

#[cfg(feature = "log")]
use log::error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [KeplerSolution] of `E - e.sin(E) = M`
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeplerSolution {
    /// Eccentric anomaly (rad)
    pub eccentric_anomaly: f64,
    /// Number of Newton iterations that were performed
    pub iterations: u32,
    /// True if the last update fell below the solver tolerance.
    /// The estimate is returned regardless.
    pub converged: bool,
}

/// [KeplerSolver] solves Kepler's equation with Newton-Raphson iterations,
/// starting from `E0 = M`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KeplerSolver {
    /// Convergence threshold on the update magnitude (rad)
    pub tolerance: f64,
    /// Maximal number of iterations
    pub max_iter: u32,
}

impl Default for KeplerSolver {
    /// Builds a [KeplerSolver] with 1E-12 rad tolerance
    /// and at most 100 iterations.
    fn default() -> Self {
        Self {
            tolerance: Kepler::TOLERANCE,
            max_iter: Kepler::MAX_ITER,
        }
    }
}

impl KeplerSolver {
    /// Returns a new [KeplerSolver] with desired tolerance (rad).
    pub fn with_tolerance(&self, tolerance: f64) -> Self {
        let mut s = *self;
        s.tolerance = tolerance;
        s
    }

    /// Returns a new [KeplerSolver] with desired maximal number of iterations.
    pub fn with_max_iter(&self, max_iter: u32) -> Self {
        let mut s = *self;
        s.max_iter = max_iter;
        s
    }

    /// Solves `E - e.sin(E) = M` for the eccentric anomaly `E`.
    ///
    /// ## Input
    /// - mean_anomaly: M (rad)
    /// - e: eccentricity, elliptical orbits only (0 <= e < 1)
    ///
    /// This never fails: once the iteration budget is exhausted, the current
    /// estimate is returned with [KeplerSolution::converged] set to false.
    /// ```
    /// use brdc_orbit::prelude::KeplerSolver;
    ///
    /// let solution = KeplerSolver::default().solve(1.0, 0.1);
    /// assert!(solution.converged);
    ///
    /// let e_k = solution.eccentric_anomaly;
    /// assert!((e_k - 0.1 * e_k.sin() - 1.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, mean_anomaly: f64, e: f64) -> KeplerSolution {
        let mut e_k = mean_anomaly;
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iter {
            let (sin_e_k, cos_e_k) = e_k.sin_cos();
            let de_k = (e_k - e * sin_e_k - mean_anomaly) / (1.0 - e * cos_e_k);
            e_k -= de_k;
            iterations += 1;
            if de_k.abs() < self.tolerance {
                converged = true;
                break;
            }
        }

        if !converged {
            #[cfg(feature = "log")]
            error!(
                "kepler iteration overflow: M={} e={} after {} iterations",
                mean_anomaly, e, iterations
            );
        }

        KeplerSolution {
            eccentric_anomaly: e_k,
            iterations,
            converged,
        }
    }
}

#[cfg(test)]
mod test {
    use super::KeplerSolver;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f64::consts::TAU;

    #[test]
    fn defaults() {
        let solver = KeplerSolver::default();
        assert_eq!(solver.tolerance, 1.0E-12);
        assert_eq!(solver.max_iter, 100);

        let solver = solver.with_tolerance(1.0E-6).with_max_iter(10);
        assert_eq!(solver.tolerance, 1.0E-6);
        assert_eq!(solver.max_iter, 10);
    }

    #[test]
    fn circular_orbit() {
        let solver = KeplerSolver::default();
        for m_k in [0.0, 0.5, 1.0, 3.0, 6.0] {
            let solution = solver.solve(m_k, 0.0);
            assert!(solution.converged);
            assert_eq!(solution.iterations, 1);
            assert_eq!(solution.eccentric_anomaly, m_k);
        }
    }

    #[test]
    fn round_trip() {
        let solver = KeplerSolver::default();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            let e = rng.gen_range(0.0..0.3);
            let e_k = rng.gen_range(0.0..TAU);
            let m_k = e_k - e * e_k.sin();
            let solution = solver.solve(m_k, e);
            assert!(solution.converged, "e={} E={}", e, e_k);
            assert!(
                (solution.eccentric_anomaly - e_k).abs() < 1.0E-9,
                "e={} E={} E'={}",
                e,
                e_k,
                solution.eccentric_anomaly
            );
        }
    }

    #[test]
    fn iteration_budget() {
        let solver = KeplerSolver::default().with_max_iter(1);
        let solution = solver.solve(1.0, 0.2);
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 1);
        // one Newton step from E0 = M
        let expected = 1.0 - (1.0 - 0.2 * 1.0_f64.sin() - 1.0) / (1.0 - 0.2 * 1.0_f64.cos());
        assert!((solution.eccentric_anomaly - expected).abs() < 1.0E-15);

        let solution = KeplerSolver::default().with_max_iter(0).solve(1.0, 0.2);
        assert!(!solution.converged);
        assert_eq!(solution.eccentric_anomaly, 1.0);
    }
}
