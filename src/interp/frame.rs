use std::collections::BTreeMap;

use crate::prelude::{Channel, Epoch};

/// [ParameterFrame] obtained by interpolating many [crate::prelude::ChannelSeries]
/// onto a common set of target [Epoch]s. Every channel holds exactly one value
/// per target [Epoch]; NaN marks a value that could not be interpolated.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParameterFrame {
    /// Target [Epoch]s. May be empty when the frame was built from raw values.
    pub epochs: Vec<Epoch>,
    /// Interpolated values, per channel
    pub channels: BTreeMap<Channel, Vec<f64>>,
}

impl ParameterFrame {
    /// Creates an empty [ParameterFrame] aligned to these target [Epoch]s.
    pub fn new(epochs: Vec<Epoch>) -> Self {
        Self {
            epochs,
            channels: BTreeMap::new(),
        }
    }

    /// Builds a [ParameterFrame] directly from channel values,
    /// without any epoch information.
    /// ```
    /// use brdc_orbit::prelude::{Channel, ParameterFrame};
    ///
    /// let frame = ParameterFrame::from_values([
    ///     (Channel::Tk, vec![0.0, 30.0]),
    ///     (Channel::E, vec![0.01, 0.01]),
    /// ]);
    /// assert_eq!(frame.len(), 2);
    /// ```
    pub fn from_values<I: IntoIterator<Item = (Channel, Vec<f64>)>>(values: I) -> Self {
        Self {
            epochs: Vec::new(),
            channels: values.into_iter().collect(),
        }
    }

    /// Number of epochs described by this [ParameterFrame]:
    /// the number of target [Epoch]s, otherwise the length
    /// of the elapsed time channel.
    pub fn len(&self) -> usize {
        if self.epochs.is_empty() {
            self.channels.get(&Channel::Tk).map_or(0, |tk| tk.len())
        } else {
            self.epochs.len()
        }
    }

    /// True if this frame does not describe a single epoch.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns values of this [Channel], if it exists.
    pub fn get(&self, channel: Channel) -> Option<&[f64]> {
        self.channels.get(&channel).map(|values| values.as_slice())
    }

    /// Inserts (or replaces) values of this [Channel].
    pub fn insert(&mut self, channel: Channel, values: Vec<f64>) {
        self.channels.insert(channel, values);
    }

    /// Returns a new [ParameterFrame] where the elapsed time channel
    /// is the number of seconds from the `reference` [Epoch] to each target [Epoch].
    /// Typically, `reference` is the ephemeris time of issue.
    pub fn with_elapsed_time(&self, reference: Epoch) -> Self {
        let mut s = self.clone();
        let tk = self
            .epochs
            .iter()
            .map(|t| (*t - reference).to_seconds())
            .collect();
        s.insert(Channel::Tk, tk);
        s
    }

    /// Returns a new [ParameterFrame] where the elapsed time channel
    /// is counted from the first target [Epoch].
    pub fn with_elapsed_time_from_first(&self) -> Self {
        match self.epochs.first() {
            Some(t0) => self.with_elapsed_time(*t0),
            None => self.clone(),
        }
    }
}
