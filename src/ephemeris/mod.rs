//! Broadcast ephemeris record
mod book;

pub use book::{EphemerisBook, EphemerisSelection};

use std::collections::BTreeMap;

use crate::prelude::{Channel, ChannelSeries, Elements, Epoch, Error, SV};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Ephemeris] holds the already decoded Keplerian parameters
/// broadcast by one satellite, valid around its time of issue.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ephemeris {
    /// Satellite
    pub sv: SV,
    /// Time of issue of ephemeris (reference epoch)
    pub toe: Epoch,
    /// Keplerian parameters (rad, m, s)
    pub params: BTreeMap<Channel, f64>,
}

impl Ephemeris {
    /// Creates a new [Ephemeris] with no parameters.
    pub fn new(sv: SV, toe: Epoch) -> Self {
        Self {
            sv,
            toe,
            params: BTreeMap::new(),
        }
    }

    /// Returns a new [Ephemeris] with this parameter value.
    pub fn with_param(&self, channel: Channel, value: f64) -> Self {
        let mut s = self.clone();
        s.set(channel, value);
        s
    }

    /// Returns value of this parameter, if it is defined and finite.
    pub fn get(&self, channel: Channel) -> Option<f64> {
        self.params
            .get(&channel)
            .copied()
            .filter(|value| value.is_finite())
    }

    /// Defines (or replaces) a parameter value.
    /// The elapsed time channel is derived, it cannot be stored.
    pub fn set(&mut self, channel: Channel, value: f64) {
        if channel != Channel::Tk {
            self.params.insert(channel, value);
        }
    }

    /// Defines (or replaces) a parameter by name.
    /// Navigation file name variants are accepted (see [Channel::from_name]).
    pub fn set_by_name(&mut self, name: &str, value: f64) -> Result<(), Error> {
        let channel = Channel::from_name(name)?;
        self.set(channel, value);
        Ok(())
    }

    /// Verifies that all critical parameters are defined.
    /// Optional ones (rates and mean motion difference) may be missing.
    pub fn validate(&self) -> Result<(), Error> {
        match Channel::keplerian()
            .filter(|ch| ch.is_critical())
            .find(|ch| self.get(*ch).is_none())
        {
            Some(missing) => Err(Error::MissingParameter(self.sv, missing)),
            None => Ok(()),
        }
    }

    /// Replicates every Keplerian parameter over the target [Epoch]s.
    /// Undefined parameters are replicated as missing values.
    pub fn replicate(&self, targets: &[Epoch]) -> BTreeMap<Channel, ChannelSeries> {
        Channel::keplerian()
            .map(|channel| {
                let value = self.get(channel);
                let series: ChannelSeries = targets.iter().map(|t| (*t, value)).collect();
                (channel, series)
            })
            .collect()
    }

    /// Keplerian [Elements] at this [Epoch], without interpolation.
    /// Undefined parameters are zero filled.
    pub fn elements(&self, t: Epoch) -> Elements {
        let value = |channel| self.get(channel).unwrap_or(0.0);
        Elements {
            sqrt_a: value(Channel::SqrtA),
            e: value(Channel::E),
            i_0: value(Channel::I0),
            omega: value(Channel::Omega),
            omega_0: value(Channel::Omega0),
            m_0: value(Channel::M0),
            dn: value(Channel::DeltaN),
            omega_dot: value(Channel::OmegaDot),
            i_dot: value(Channel::Idot),
            t_k: (t - self.toe).to_seconds(),
        }
    }
}
