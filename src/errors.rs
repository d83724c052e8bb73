use thiserror::Error;

use crate::prelude::{Channel, SV};

/// Errors raised while interpolating ephemeris channels
/// or resolving them into satellite positions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No channels or no target epochs were provided.
    #[error("empty input: channels and target epochs are both required")]
    EmptyInput,
    /// Fewer than two valid samples for this channel.
    /// [crate::prelude::interpolate] absorbs this error and fills
    /// the channel with missing values instead.
    #[error("{0}: at least 2 valid samples are required to interpolate")]
    InsufficientSamples(Channel),
    /// The elapsed time channel (`tk`) is missing from the transform input.
    #[error("invalid ephemeris: missing elapsed time (tk) channel")]
    InvalidEphemeris,
    /// Channel length does not match the elapsed time channel.
    #[error("{0}: channel length does not match tk")]
    UnalignedFrame(Channel),
    /// Name does not resolve to any known channel.
    #[error("unknown channel \"{0}\"")]
    UnknownChannel(String),
    /// Critical Keplerian parameter is missing from an ephemeris record.
    #[error("{0}: missing {1} parameter")]
    MissingParameter(SV, Channel),
    /// No ephemeris record for this satellite.
    #[error("{0}: no ephemeris available")]
    NoEphemeris(SV),
    /// Sampling window is inverted or the interval is not strictly positive.
    #[error("invalid sampling: start must precede end and interval must be positive")]
    InvalidSampling,
}
