//! Ephemeris parameter channels
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Channel] identifies one orbital parameter of the broadcast model.
/// [Channel::to_string] returns the canonical name, while parsing also
/// accepts the field names found in navigation data tools.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Channel {
    /// Square root of the semi major axis (m^1/2)
    #[strum(to_string = "sqrtA", serialize = "sqrtSemiMajorAxis")]
    SqrtA,
    /// Eccentricity
    #[strum(to_string = "e", serialize = "Eccentricity", serialize = "ecc")]
    E,
    /// Inclination angle at reference time (rad)
    #[strum(to_string = "i0", serialize = "Io", serialize = "Inclination")]
    I0,
    /// Argument of perigee (rad)
    #[strum(to_string = "omega", serialize = "Omega", serialize = "ArgPerigee")]
    Omega,
    /// Longitude of ascending node at reference time (rad)
    #[strum(
        to_string = "OMEGA",
        serialize = "Omega0",
        serialize = "OMEGA0",
        serialize = "LongAscNode"
    )]
    Omega0,
    /// Mean anomaly at reference time (rad)
    #[strum(to_string = "M0", serialize = "MeanAnomaly")]
    M0,
    /// Mean motion difference from computed value (rad.s⁻¹)
    #[strum(
        to_string = "delta_n",
        serialize = "DeltaN",
        serialize = "deltaN",
        serialize = "MeanMotionDifference"
    )]
    DeltaN,
    /// Rate of right ascension (rad.s⁻¹)
    #[strum(
        to_string = "OMEGA_DOT",
        serialize = "OmegaDot",
        serialize = "OMEGADOT",
        serialize = "RateRightAscension"
    )]
    OmegaDot,
    /// Rate of inclination angle (rad.s⁻¹)
    #[strum(to_string = "IDOT", serialize = "Idot", serialize = "InclinationRate")]
    Idot,
    /// Elapsed time from the reference epoch (s)
    #[strum(to_string = "tk")]
    Tk,
}

impl Channel {
    /// Resolves a channel name, either canonical or one of its known variants.
    /// ```
    /// use brdc_orbit::prelude::Channel;
    ///
    /// assert_eq!(Channel::from_name("OMEGA").unwrap(), Channel::Omega0);
    /// assert_eq!(Channel::from_name("LongAscNode").unwrap(), Channel::Omega0);
    /// assert_eq!(Channel::Omega0.to_string(), "OMEGA");
    /// assert!(Channel::from_name("Crs").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, Error> {
        name.trim()
            .parse::<Self>()
            .map_err(|_| Error::UnknownChannel(name.to_string()))
    }

    /// Iterates the nine physical parameters of the Keplerian model
    /// (every [Channel] but [Channel::Tk]).
    pub fn keplerian() -> impl Iterator<Item = Self> {
        Self::iter().filter(|ch| *ch != Self::Tk)
    }

    /// True for the parameters without which a record
    /// cannot describe an orbit at all.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            Self::SqrtA | Self::E | Self::I0 | Self::Omega | Self::Omega0 | Self::M0
        )
    }
}
