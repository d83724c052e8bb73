mod test {
    use crate::{
        prelude::{
            compute_position, interpolate, Channel, ChannelSeries, Duration, EphemerisBook,
            KeplerSolver, Sampling, Trajectory,
        },
        tests::toolkit::{epochs, gps_ephemeris, semi_major_axis},
    };
    use std::collections::BTreeMap;

    #[test]
    fn interpolation_to_positions() {
        let eph = gps_ephemeris();
        let samples = epochs(eph.toe, 3600.0, 3);
        let targets = epochs(eph.toe, 300.0, 25);

        let mut channels = eph.replicate(&samples);

        // slowly varying node, one sample missing
        let mut node = ChannelSeries::new();
        node.push(samples[0], Some(0.5));
        node.push(samples[1], None);
        node.push(samples[2], Some(0.5 - 8.0E-9 * 7200.0));
        channels.insert(Channel::Omega0, node);

        let frame = interpolate(&channels, &targets)
            .unwrap()
            .with_elapsed_time(eph.toe);

        assert_eq!(frame.len(), targets.len());
        for (channel, values) in frame.channels.iter() {
            assert_eq!(values.len(), targets.len(), "{}", channel);
        }

        let omega_0 = frame.get(Channel::Omega0).unwrap();
        assert!((omega_0[12] - (0.5 - 8.0E-9 * 3600.0)).abs() < 1.0E-12);

        let tk = frame.get(Channel::Tk).unwrap();
        assert_eq!(tk[0], 0.0);
        assert_eq!(tk[24], 7200.0);

        let positions = compute_position(&frame).unwrap();
        assert_eq!(positions.len(), targets.len());
        assert!(positions.converged());
        assert!(positions.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn missing_channel_fallback() {
        let eph = gps_ephemeris();
        let targets = epochs(eph.toe, 30.0, 10);

        let mut channels: BTreeMap<Channel, ChannelSeries> = eph.replicate(&targets);
        let mut single = ChannelSeries::new();
        single.push(eph.toe, Some(1.0E-10));
        channels.insert(Channel::Idot, single);

        let frame = interpolate(&channels, &targets).unwrap();
        let idot = frame.get(Channel::Idot).unwrap();
        assert_eq!(idot.len(), targets.len());
        assert!(idot.iter().all(|v| v.is_nan()));

        // zero filled by the transform
        let frame = frame.with_elapsed_time(eph.toe);
        let positions = compute_position(&frame).unwrap();
        assert!(positions.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn daily_trajectory() {
        let eph = gps_ephemeris();
        let a = semi_major_axis(&eph);
        let e = eph.get(Channel::E).unwrap();

        let book: EphemerisBook = [eph.clone()].into_iter().collect();
        let trajectory = Trajectory::from_book(
            &book,
            eph.sv,
            eph.toe,
            &Sampling::default(),
            &KeplerSolver::default(),
        )
        .unwrap();

        assert_eq!(trajectory.len(), 2880);
        assert!(trajectory.converged());
        assert!(trajectory.max_kepler_iterations() <= 10);

        let (t_last, _) = trajectory.iter().last().unwrap();
        assert_eq!(t_last - eph.toe, Duration::from_seconds(86370.0));

        for (t, position) in trajectory.iter() {
            let r = position.norm();
            assert!(r > a * (1.0 - e) - 1.0, "{}: r={}", t, r);
            assert!(r < a * (1.0 + e) + 1.0, "{}: r={}", t, r);
        }
    }

    #[test]
    fn deterministic() {
        let eph = gps_ephemeris();
        let targets = epochs(eph.toe, 600.0, 12);
        let solver = KeplerSolver::default();

        let t1 = Trajectory::propagate(&eph, &targets, &solver).unwrap();
        let t2 = Trajectory::propagate(&eph, &targets, &solver).unwrap();
        assert_eq!(t1, t2);
    }
}
