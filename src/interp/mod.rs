//! Ephemeris channels interpolation
mod frame;
mod series;

pub use frame::ParameterFrame;
pub use series::ChannelSeries;

#[cfg(feature = "log")]
use log::{debug, warn};

use itertools::Itertools;
use std::collections::BTreeMap;

use crate::prelude::{Channel, Epoch, Error};

/// Slope and offset of the line passing through two points
fn linear_reg_2d(i: (f64, f64), j: (f64, f64)) -> (f64, f64) {
    let (x_i, y_i) = i;
    let (x_j, y_j) = j;
    let a = (y_j - y_i) / (x_j - x_i);
    let b = y_j - a * x_j;
    (a, b)
}

/// [LinearInterpolant] is a piecewise linear function
/// fitted over the valid samples of one channel.
/// Evaluation outside the sampled span extrapolates
/// the nearest boundary segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolant {
    /// Knots (x: seconds, y: value), strictly increasing in x
    knots: Vec<(f64, f64)>,
}

impl LinearInterpolant {
    /// Fits a [LinearInterpolant] over the valid samples of this [ChannelSeries].
    /// Sample times are expressed in seconds elapsed since `origin`.
    /// When several samples share the same [Epoch], the last one is retained.
    pub fn new(
        channel: Channel,
        series: &ChannelSeries,
        origin: Epoch,
    ) -> Result<Self, Error> {
        let knots = series
            .valid()
            .map(|(t, value)| ((t - origin).to_seconds(), value))
            .coalesce(|prev, next| {
                if prev.0 == next.0 {
                    Ok(next)
                } else {
                    Err((prev, next))
                }
            })
            .collect::<Vec<_>>();

        if knots.len() < 2 {
            return Err(Error::InsufficientSamples(channel));
        }

        Ok(Self { knots })
    }

    /// Evaluates this [LinearInterpolant] at `x` seconds from the time origin.
    pub fn eval(&self, x: f64) -> f64 {
        let last = self.knots.len() - 1;
        // index of the first knot strictly after x
        let upper = self.knots.partition_point(|(x_k, _)| *x_k <= x);
        let segment = upper.clamp(1, last) - 1;
        let (a, b) = linear_reg_2d(self.knots[segment], self.knots[segment + 1]);
        a * x + b
    }
}

/// Interpolates each channel onto the target [Epoch]s.
///
/// ## Input
/// - channels: [ChannelSeries] per [Channel]. Cannot be empty.
/// - targets: desired [Epoch]s, in any order, possibly outside the sampled span.
/// Cannot be empty.
///
/// ## Output
/// - [ParameterFrame] holding one value per target [Epoch] for each channel.
/// Channels with fewer than two valid samples are entirely filled with NaN.
///
/// All channels share the same time origin: the earliest sample of the whole set.
/// ```
/// use std::collections::BTreeMap;
/// use brdc_orbit::prelude::{interpolate, Channel, ChannelSeries, Duration, Epoch};
///
/// let t0 = Epoch::from_gpst_seconds(1.0E9);
/// let t1 = t0 + Duration::from_seconds(10.0);
///
/// let mut series = ChannelSeries::new();
/// series.push(t0, Some(1.0));
/// series.push(t1, Some(2.0));
///
/// let channels = BTreeMap::from([(Channel::M0, series)]);
/// let targets = [t1 + Duration::from_seconds(10.0)];
///
/// let frame = interpolate(&channels, &targets).unwrap();
/// assert!((frame.get(Channel::M0).unwrap()[0] - 3.0).abs() < 1e-12);
/// ```
pub fn interpolate(
    channels: &BTreeMap<Channel, ChannelSeries>,
    targets: &[Epoch],
) -> Result<ParameterFrame, Error> {
    if channels.is_empty() || targets.is_empty() {
        return Err(Error::EmptyInput);
    }

    // shared time origin
    let origin = channels
        .values()
        .filter_map(|series| series.first_epoch())
        .min()
        .unwrap_or(targets[0]);

    let x_t = targets
        .iter()
        .map(|t| (*t - origin).to_seconds())
        .collect::<Vec<_>>();

    let mut frame = ParameterFrame::new(targets.to_vec());

    for (channel, series) in channels.iter() {
        let values = match LinearInterpolant::new(*channel, series, origin) {
            Ok(interpolant) => x_t.iter().map(|x| interpolant.eval(*x)).collect(),
            Err(e) => {
                #[cfg(feature = "log")]
                warn!("{}", e);
                #[cfg(not(feature = "log"))]
                let _ = e;
                vec![f64::NAN; targets.len()]
            },
        };
        frame.insert(*channel, values);
    }

    #[cfg(feature = "log")]
    debug!(
        "interpolated {} channels over {} epochs (origin {})",
        channels.len(),
        targets.len(),
        origin
    );

    Ok(frame)
}
