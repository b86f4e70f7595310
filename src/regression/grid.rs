use log::{debug, log_enabled, warn, Level};

use super::{LossFn, Model, Mse, Regressor};
use crate::data::Point;

/// The closed-open range `[min, max)` searched for both `m` and `c`, sampled every `delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub min: f64,
    pub max: f64,
    pub delta: f64,
}

impl GridConfig {
    pub fn new(min: f64, max: f64, delta: f64) -> Self {
        Self { min, max, delta }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min: -100.0,
            max: 100.0,
            delta: 0.1,
        }
    }
}

/// Longest axis [`Axis::new`] will build.
pub const MAX_AXIS_LEN: usize = u32::MAX as usize;

/// A lazily generated arithmetic progression `min + i*delta` covering `[min, max)`.
///
/// Values are computed from their index so repeated addition never drifts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    min: f64,
    delta: f64,
    len: usize,
}

impl Axis {
    /// Builds the axis for `[min, max)` with step `delta`.
    ///
    /// Non-finite bounds, a non-positive step, an empty range, and ranges that would
    /// need more than [`MAX_AXIS_LEN`] values all give an empty axis.
    pub fn new(min: f64, max: f64, delta: f64) -> Self {
        let empty = Self { min, delta, len: 0 };

        let valid = min.is_finite() && max.is_finite() && delta.is_finite();
        if !valid || delta <= 0.0 || max <= min {
            return empty;
        }

        let steps = ((max - min) / delta).ceil();
        if !steps.is_finite() || steps >= MAX_AXIS_LEN as f64 {
            warn!("axis [{min}, {max}) with step {delta} is too long, searching nothing");
            return empty;
        }

        let at = |i: usize| min + i as f64 * delta;

        let mut len = steps as usize;
        while len > 0 && at(len - 1) >= max {
            len -= 1;
        }
        while at(len) < max {
            len += 1;
        }

        Self { min, delta, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + Clone {
        let Self { min, delta, len } = *self;
        (0..len).map(move |i| min + i as f64 * delta)
    }
}

impl From<GridConfig> for Axis {
    fn from(config: GridConfig) -> Self {
        Self::new(config.min, config.max, config.delta)
    }
}

/// Brute-force search over every `(m, c)` on the grid.
///
/// Scans `m` in the outer loop and `c` in the inner loop, both ascending, and only
/// replaces the best candidate on a strictly lower loss, so the first of several
/// equal candidates wins. The cost is quadratic in the number of grid values per
/// axis; this is a reference to check iterative fits against.
#[derive(Debug, Clone)]
pub struct GridSearch<L: LossFn = Mse> {
    config: GridConfig,
    loss_fn: L,
}

impl GridSearch<Mse> {
    pub fn new(config: GridConfig) -> Self {
        Self::with_loss(config, Mse::new())
    }
}

impl<L: LossFn> GridSearch<L> {
    pub fn with_loss(config: GridConfig, loss_fn: L) -> Self {
        Self { config, loss_fn }
    }
}

impl<L: LossFn> Regressor for GridSearch<L> {
    fn fit(&self, points: &[Point]) -> Model {
        let axis = Axis::from(self.config);

        let mut best = Model::default();
        let mut min_loss = f64::INFINITY;
        let mut tried = 0usize;

        for m in axis.values() {
            for c in axis.values() {
                tried += 1;

                let candidate = Model::new(m, c);
                let loss = self.loss_fn.loss(points, candidate);
                if loss < min_loss {
                    min_loss = loss;
                    best = candidate;

                    if log_enabled!(Level::Debug) {
                        let (dm, dc) = self.loss_fn.loss_prime(points, candidate);
                        debug!("grad({m:.2}, {c:.2}) = ({dm:.2}, {dc:.2})");
                    }
                }
            }
        }

        debug!("tried {tried} candidates");
        best
    }
}
