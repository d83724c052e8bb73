//! Time series of one ephemeris channel
use crate::prelude::Epoch;

/// [ChannelSeries] gathers the (time, value) samples of one [crate::prelude::Channel].
/// Missing values are stored as NaN and never take part in a fit.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ChannelSeries {
    /// Internal buffer, in chronological order
    samples: Vec<(Epoch, f64)>,
}

impl ChannelSeries {
    /// Allocates a new empty [ChannelSeries].
    pub fn new() -> Self {
        Self {
            samples: Vec::with_capacity(16),
        }
    }

    /// Builds a [ChannelSeries] from possibly unsorted samples.
    pub fn from_samples(samples: Vec<(Epoch, f64)>) -> Self {
        let mut s = Self { samples };
        s.sort();
        s
    }

    /// Latches a new sample. None stands for "no data" at this [Epoch].
    /// Samples may be provided in any order.
    pub fn push(&mut self, t: Epoch, value: Option<f64>) {
        let value = value.unwrap_or(f64::NAN);
        let sorted = self.samples.last().map_or(true, |(last, _)| *last <= t);
        self.samples.push((t, value));
        if !sorted {
            self.sort();
        }
    }

    fn sort(&mut self) {
        // stable: equal epochs keep their insertion order
        self.samples.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    /// Total number of samples, including missing ones.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if no sample was latched.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Earliest [Epoch] of this series, valid or not.
    pub fn first_epoch(&self) -> Option<Epoch> {
        self.samples.first().map(|(t, _)| *t)
    }

    /// Iterates all samples in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &(Epoch, f64)> + '_ {
        self.samples.iter()
    }

    /// Iterates the valid (non missing) samples in chronological order.
    pub fn valid(&self) -> impl Iterator<Item = (Epoch, f64)> + '_ {
        self.samples
            .iter()
            .filter(|(_, value)| !value.is_nan())
            .copied()
    }
}

impl FromIterator<(Epoch, Option<f64>)> for ChannelSeries {
    fn from_iter<I: IntoIterator<Item = (Epoch, Option<f64>)>>(iter: I) -> Self {
        let mut s = Self::new();
        for (t, value) in iter {
            s.push(t, value);
        }
        s
    }
}
