//! Satellite trajectory
use crate::prelude::{
    compute_position_with, interpolate, Duration, EphemerisBook, Epoch, Ephemeris, Error,
    KeplerSolver, Position, Positions, Sampling, SV,
};

#[cfg(feature = "log")]
use log::{debug, info};

/// [Trajectory] of one satellite: ECEF [Position]s resolved
/// over a set of [Epoch]s, from a single [Ephemeris].
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Satellite
    pub sv: SV,
    /// Time of issue of the [Ephemeris] in use
    pub toe: Epoch,
    /// Target [Epoch]s
    pub epochs: Vec<Epoch>,
    /// Resolved [Positions], one per target [Epoch]
    pub positions: Positions,
}

/// Sampling knots the [Ephemeris] parameters are replicated on.
/// The interpolation requires two distinct knots, which a single target cannot provide.
fn replication_knots(targets: &[Epoch], toe: Epoch) -> Vec<Epoch> {
    match targets.first() {
        Some(t0) if targets.iter().any(|t| t != t0) => targets.to_vec(),
        _ => vec![toe, toe + Duration::from_seconds(1.0)],
    }
}

impl Trajectory {
    /// Propagates this [Ephemeris] over the target [Epoch]s.
    ///
    /// The ephemeris parameters are replicated and interpolated onto
    /// the targets, the elapsed time being counted from the time of issue.
    /// Each target is then resolved independently.
    /// ```
    /// use brdc_orbit::prelude::{Channel, Duration, Ephemeris, Epoch, KeplerSolver, Trajectory, SV};
    /// use std::str::FromStr;
    ///
    /// let toe = Epoch::from_gpst_seconds(1.0E9);
    /// let sv = SV::from_str("G01").unwrap();
    ///
    /// let eph = Ephemeris::new(sv, toe)
    ///     .with_param(Channel::SqrtA, 5153.795)
    ///     .with_param(Channel::E, 0.0)
    ///     .with_param(Channel::I0, 0.0)
    ///     .with_param(Channel::Omega, 0.0)
    ///     .with_param(Channel::Omega0, 0.0)
    ///     .with_param(Channel::M0, 0.0);
    ///
    /// let targets = [toe, toe + Duration::from_seconds(600.0)];
    ///
    /// let trajectory = Trajectory::propagate(&eph, &targets, &KeplerSolver::default())
    ///     .unwrap();
    ///
    /// assert!(trajectory.converged());
    /// for (_, position) in trajectory.iter() {
    ///     assert!((position.norm() - 5153.795_f64.powi(2)).abs() < 1e-3);
    /// }
    /// ```
    pub fn propagate(
        ephemeris: &Ephemeris,
        targets: &[Epoch],
        solver: &KeplerSolver,
    ) -> Result<Self, Error> {
        if targets.is_empty() {
            return Err(Error::EmptyInput);
        }

        ephemeris.validate()?;

        let knots = replication_knots(targets, ephemeris.toe);
        let channels = ephemeris.replicate(&knots);

        let frame = interpolate(&channels, targets)?.with_elapsed_time(ephemeris.toe);
        let positions = compute_position_with(&frame, solver)?;

        #[cfg(feature = "log")]
        debug!(
            "{}(toe={}) - resolved {} epochs (max. {} iterations)",
            ephemeris.sv,
            ephemeris.toe,
            positions.len(),
            positions.max_iterations()
        );

        Ok(Self {
            sv: ephemeris.sv,
            toe: ephemeris.toe,
            epochs: targets.to_vec(),
            positions,
        })
    }

    /// Selects the [Ephemeris] of this satellite that is the closest
    /// to `start` and propagates it over one [Sampling] window.
    pub fn from_book(
        book: &EphemerisBook,
        sv: SV,
        start: Epoch,
        sampling: &Sampling,
        solver: &KeplerSolver,
    ) -> Result<Self, Error> {
        let ephemeris = book.closest(sv, start)?;
        let targets = sampling.window(start)?;

        #[cfg(feature = "log")]
        info!(
            "{}({}) - propagating over {} epochs",
            start,
            sv,
            targets.len()
        );

        Self::propagate(ephemeris, &targets, solver)
    }

    /// Number of [Epoch]s
    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    /// True if this [Trajectory] is empty
    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    /// Iterates ([Epoch], [Position]) in target order.
    pub fn iter(&self) -> impl Iterator<Item = (Epoch, Position)> + '_ {
        self.epochs.iter().copied().zip(self.positions.iter())
    }

    /// True if Kepler's equation converged at every [Epoch].
    pub fn converged(&self) -> bool {
        self.positions.converged()
    }

    /// Largest number of Kepler iterations over all [Epoch]s.
    pub fn max_kepler_iterations(&self) -> u32 {
        self.positions.max_iterations()
    }
}

#[cfg(test)]
mod test {
    use super::{replication_knots, Trajectory};
    use crate::prelude::{
        Channel, Constellation, Duration, Ephemeris, EphemerisBook, Epoch, Error, KeplerSolver,
        Sampling, SV,
    };

    fn ephemeris(toe: Epoch) -> Ephemeris {
        Ephemeris::new(SV::new(Constellation::GPS, 7), toe)
            .with_param(Channel::SqrtA, 5153.795)
            .with_param(Channel::E, 0.01)
            .with_param(Channel::I0, 0.94)
            .with_param(Channel::Omega, 1.0)
            .with_param(Channel::Omega0, 0.5)
            .with_param(Channel::M0, 0.1)
            .with_param(Channel::DeltaN, 1.0E-4)
            .with_param(Channel::OmegaDot, -8.0E-9)
            .with_param(Channel::Idot, 0.0)
    }

    #[test]
    fn knots() {
        let t0 = Epoch::from_gpst_seconds(1.0E9);
        let t1 = t0 + Duration::from_seconds(30.0);

        assert_eq!(replication_knots(&[t0, t1], t0), vec![t0, t1]);
        assert_eq!(
            replication_knots(&[t1], t0),
            vec![t0, t0 + Duration::from_seconds(1.0)]
        );
        assert_eq!(replication_knots(&[t1, t1], t0).len(), 2);
    }

    #[test]
    fn single_target() {
        let toe = Epoch::from_gpst_seconds(1.0E9);
        let eph = ephemeris(toe);
        let solver = KeplerSolver::default();

        let t = toe + Duration::from_seconds(3600.0);
        let trajectory = Trajectory::propagate(&eph, &[t], &solver).unwrap();
        assert_eq!(trajectory.len(), 1);

        let expected = eph.elements(t).position(&solver);
        let (epoch, position) = trajectory.iter().next().unwrap();
        assert_eq!(epoch, t);
        assert!((position.x - expected.x).abs() < 1.0E-6);
        assert!((position.y - expected.y).abs() < 1.0E-6);
        assert!((position.z - expected.z).abs() < 1.0E-6);
    }

    #[test]
    fn propagation_matches_elements() {
        let toe = Epoch::from_gpst_seconds(1.0E9);
        let eph = ephemeris(toe);
        let solver = KeplerSolver::default();

        let targets = Sampling::default()
            .with_interval_s(300.0)
            .with_duration_s(7200.0)
            .window(toe - Duration::from_seconds(3600.0))
            .unwrap();

        let trajectory = Trajectory::propagate(&eph, &targets, &solver).unwrap();
        assert_eq!(trajectory.len(), targets.len());
        assert!(trajectory.converged());
        assert!(trajectory.max_kepler_iterations() > 0);

        for (t, position) in trajectory.iter() {
            let expected = eph.elements(t).position(&solver);
            assert!((position.x - expected.x).abs() < 1.0E-6, "{}", t);
            assert!((position.y - expected.y).abs() < 1.0E-6, "{}", t);
            assert!((position.z - expected.z).abs() < 1.0E-6, "{}", t);
        }
    }

    #[test]
    fn invalid_propagation() {
        let toe = Epoch::from_gpst_seconds(1.0E9);
        let solver = KeplerSolver::default();

        let eph = ephemeris(toe);
        assert_eq!(
            Trajectory::propagate(&eph, &[], &solver),
            Err(Error::EmptyInput)
        );

        let eph = eph.with_param(Channel::SqrtA, f64::NAN);
        assert_eq!(
            Trajectory::propagate(&eph, &[toe], &solver),
            Err(Error::MissingParameter(eph.sv, Channel::SqrtA))
        );
    }

    #[test]
    fn book_propagation() {
        let t0 = Epoch::from_gpst_seconds(1.0E9);
        let solver = KeplerSolver::default();
        let sampling = Sampling::default().with_duration_s(3600.0);

        let book: EphemerisBook = [
            ephemeris(t0),
            ephemeris(t0 + Duration::from_hours(2.0)).with_param(Channel::M0, 0.2),
        ]
        .into_iter()
        .collect();

        let sv = SV::new(Constellation::GPS, 7);
        let start = t0 + Duration::from_hours(1.5);

        let trajectory = Trajectory::from_book(&book, sv, start, &sampling, &solver).unwrap();
        assert_eq!(trajectory.sv, sv);
        assert_eq!(trajectory.toe, t0 + Duration::from_hours(2.0));
        assert_eq!(trajectory.len(), 121);
        assert_eq!(trajectory.epochs[0], start);

        let g01 = SV::new(Constellation::GPS, 1);
        assert_eq!(
            Trajectory::from_book(&book, g01, start, &sampling, &solver),
            Err(Error::NoEphemeris(g01))
        );
    }
}
