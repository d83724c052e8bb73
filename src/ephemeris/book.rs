//! Ephemeris selection
use std::collections::HashMap;

#[cfg(feature = "log")]
use log::{debug, warn};

use crate::prelude::{Duration, Epoch, Ephemeris, Error, SV};

/// Default tolerated ephemeris age, in hours
const DEFAULT_MAX_AGE_HOURS: f64 = 4.0;

/// [EphemerisSelection] defines how an [Ephemeris] is picked
/// for a given epoch.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EphemerisSelection {
    /// Beyond this age (absolute distance between the time of issue
    /// and the epoch of interest), the selected [Ephemeris] is reported as outdated.
    pub max_age: Duration,
}

impl Default for EphemerisSelection {
    /// Builds a default [EphemerisSelection] tolerating 4 hour old ephemerides.
    fn default() -> Self {
        Self {
            max_age: Duration::from_hours(DEFAULT_MAX_AGE_HOURS),
        }
    }
}

impl EphemerisSelection {
    /// Returns a new [EphemerisSelection] with desired maximal age.
    pub fn with_max_age(&self, max_age: Duration) -> Self {
        let mut s = *self;
        s.max_age = max_age;
        s
    }
}

/// [EphemerisBook] stores the [Ephemeris] records of many satellites.
#[derive(Default, Debug, Clone)]
pub struct EphemerisBook {
    /// Internal buffer, in chronological order per [SV]
    records: HashMap<SV, Vec<Ephemeris>>,
    /// Selection method
    selection: EphemerisSelection,
}

impl EphemerisBook {
    /// Allocate new [EphemerisBook]
    pub fn new() -> Self {
        Self {
            records: HashMap::with_capacity(8),
            selection: EphemerisSelection::default(),
        }
    }

    /// Define an [EphemerisBook] with desired [EphemerisSelection].
    pub fn with_selection(&self, selection: EphemerisSelection) -> Self {
        let mut s = self.clone();
        s.selection = selection;
        s
    }

    /// Stores a new [Ephemeris].
    pub fn insert(&mut self, ephemeris: Ephemeris) {
        let records = self.records.entry(ephemeris.sv).or_default();
        let index = records.partition_point(|eph| eph.toe <= ephemeris.toe);
        records.insert(index, ephemeris);
    }

    /// Iterates the satellites we have ephemerides for.
    pub fn sv(&self) -> impl Iterator<Item = SV> + '_ {
        self.records.keys().copied()
    }

    /// Iterates all [Ephemeris] of this satellite, in chronological order.
    pub fn ephemerides(&self, sv: SV) -> impl Iterator<Item = &Ephemeris> + '_ {
        self.records.get(&sv).into_iter().flatten()
    }

    /// Total number of [Ephemeris] records
    pub fn len(&self) -> usize {
        self.records.values().map(|records| records.len()).sum()
    }

    /// True if no [Ephemeris] was stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the [Ephemeris] of this satellite whose time of issue is the
    /// closest to `t`. Outdated ephemerides are still returned, but reported.
    pub fn closest(&self, sv: SV, t: Epoch) -> Result<&Ephemeris, Error> {
        let eph = self
            .ephemerides(sv)
            .min_by_key(|eph| (eph.toe - t).abs())
            .ok_or(Error::NoEphemeris(sv))?;

        let age = (eph.toe - t).abs();
        if age > self.selection.max_age {
            #[cfg(feature = "log")]
            warn!("{}({}) - ephemeris is {} old", t, sv, age);
        } else {
            #[cfg(feature = "log")]
            debug!("{}({}) - selected toe={}", t, sv, eph.toe);
        }

        Ok(eph)
    }

    /// Returns the [Ephemeris] selection method in use.
    pub fn selection(&self) -> EphemerisSelection {
        self.selection
    }
}

impl FromIterator<Ephemeris> for EphemerisBook {
    fn from_iter<I: IntoIterator<Item = Ephemeris>>(iter: I) -> Self {
        let mut s = Self::new();
        for eph in iter {
            s.insert(eph);
        }
        s
    }
}
