#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

pub mod constants;

mod channel;
mod ephemeris;
mod errors;
mod interp;
mod kepler;
mod sampling;
mod trajectory;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::{
        channel::Channel,
        ephemeris::{Ephemeris, EphemerisBook, EphemerisSelection},
        errors::Error,
        interp::{interpolate, ChannelSeries, LinearInterpolant, ParameterFrame},
        kepler::{
            compute_position, compute_position_with, Elements, KeplerSolution, KeplerSolver,
            OrbitalState, Position, Positions,
        },
        sampling::Sampling,
        trajectory::Trajectory,
    };

    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale, TimeSeries};
}
