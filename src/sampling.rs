//! Propagation time grid
use crate::prelude::{Duration, Epoch, Error, TimeSeries};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default sampling interval (in seconds)
const DEFAULT_INTERVAL_SECONDS: f64 = 30.0;

/// Default propagation duration: 23h59'59''
const DEFAULT_DURATION_SECONDS: f64 = 86_399.0;

/// [Sampling] describes the evenly spaced time grid
/// a satellite trajectory is resolved on.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sampling {
    /// Interval between two successive [Epoch]s
    pub interval: Duration,
    /// Total propagation [Duration]
    pub duration: Duration,
}

impl Default for Sampling {
    /// Creates a default [Sampling] of 30s, spanning one day
    /// (23h59'59'', so the next midnight is excluded).
    fn default() -> Self {
        Self {
            interval: Duration::from_seconds(DEFAULT_INTERVAL_SECONDS),
            duration: Duration::from_seconds(DEFAULT_DURATION_SECONDS),
        }
    }
}

impl Sampling {
    /// Returns a new [Sampling] with desired interval [Duration].
    pub fn with_interval(&self, interval: Duration) -> Self {
        let mut s = *self;
        s.interval = interval;
        s
    }

    /// Returns a new [Sampling] with desired interval in seconds.
    pub fn with_interval_s(&self, interval_s: f64) -> Self {
        self.with_interval(Duration::from_seconds(interval_s))
    }

    /// Returns a new [Sampling] with desired total [Duration].
    pub fn with_duration(&self, duration: Duration) -> Self {
        let mut s = *self;
        s.duration = duration;
        s
    }

    /// Returns a new [Sampling] with desired total duration in seconds.
    pub fn with_duration_s(&self, duration_s: f64) -> Self {
        self.with_duration(Duration::from_seconds(duration_s))
    }

    /// Returns every [Epoch] from `start` to `end` (both included when
    /// aligned on the interval).
    /// ```
    /// use brdc_orbit::prelude::{Duration, Epoch, Sampling};
    ///
    /// let t0 = Epoch::from_gpst_seconds(1.0E9);
    /// let t1 = t0 + Duration::from_seconds(120.0);
    ///
    /// let epochs = Sampling::default()
    ///     .epochs(t0, t1)
    ///     .unwrap();
    ///
    /// assert_eq!(epochs.len(), 5);
    /// assert_eq!(epochs[4], t1);
    /// ```
    pub fn epochs(&self, start: Epoch, end: Epoch) -> Result<Vec<Epoch>, Error> {
        if start > end || self.interval <= Duration::ZERO {
            return Err(Error::InvalidSampling);
        }
        Ok(TimeSeries::inclusive(start, end, self.interval).collect())
    }

    /// Returns every [Epoch] of the time window starting at `start`.
    pub fn window(&self, start: Epoch) -> Result<Vec<Epoch>, Error> {
        self.epochs(start, start + self.duration)
    }

    /// Number of [Epoch]s within one window.
    pub fn len(&self) -> usize {
        if self.interval <= Duration::ZERO || self.duration < Duration::ZERO {
            0
        } else {
            (self.duration.to_seconds() / self.interval.to_seconds()).floor() as usize + 1
        }
    }

    /// True if this [Sampling] cannot produce any [Epoch].
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::Sampling;
    use crate::prelude::{Duration, Epoch, Error};

    #[test]
    fn default_sampling() {
        let sampling = Sampling::default();
        assert_eq!(sampling.interval.to_seconds(), 30.0);
        assert_eq!(sampling.duration.to_seconds(), 86_399.0);
        assert_eq!(sampling.len(), 2880);

        let t0 = Epoch::from_gpst_seconds(1.0E9);
        let epochs = sampling.window(t0).unwrap();
        assert_eq!(epochs.len(), 2880);
        assert_eq!(epochs[0], t0);
        assert_eq!(epochs[2879], t0 + Duration::from_seconds(86_370.0));
    }

    #[test]
    fn custom_sampling() {
        let sampling = Sampling::default()
            .with_interval_s(900.0)
            .with_duration_s(3600.0);
        assert_eq!(sampling.len(), 5);

        let t0 = Epoch::from_gpst_seconds(1.0E9);
        let epochs = sampling.window(t0).unwrap();
        assert_eq!(epochs.len(), 5);
        assert!(epochs
            .windows(2)
            .all(|w| w[1] - w[0] == Duration::from_seconds(900.0)));
    }

    #[test]
    fn invalid_sampling() {
        let t0 = Epoch::from_gpst_seconds(1.0E9);
        let t1 = t0 + Duration::from_seconds(60.0);

        let sampling = Sampling::default();
        assert_eq!(sampling.epochs(t1, t0), Err(Error::InvalidSampling));

        let sampling = sampling.with_interval(Duration::ZERO);
        assert!(sampling.is_empty());
        assert_eq!(sampling.epochs(t0, t1), Err(Error::InvalidSampling));
    }
}
