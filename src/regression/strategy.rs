use std::fmt;

use super::{DescentConfig, DescentTrainer, GridConfig, GridSearch, Model};
use crate::data::Point;

/// Anything that turns a point sequence into a fitted line.
pub trait Regressor {
    /// Fits a line to `points`, which must be non-empty.
    fn fit(&self, points: &[Point]) -> Model;
}

/// The available fitting strategies, each carrying its own configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    GridSearch(GridConfig),
    GradientDescent(DescentConfig),
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::GridSearch(_) => "grid-search",
            Strategy::GradientDescent(_) => "gradient-descent",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::GradientDescent(DescentConfig::default())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::GridSearch(GridConfig { min, max, delta }) => {
                write!(f, "{} over [{min}, {max}) step {delta}", self.name())
            }
            Strategy::GradientDescent(DescentConfig { alpha, iterations }) => {
                write!(f, "{} with alpha {alpha} for {iterations} iterations", self.name())
            }
        }
    }
}

impl Regressor for Strategy {
    fn fit(&self, points: &[Point]) -> Model {
        match *self {
            Strategy::GridSearch(config) => GridSearch::new(config).fit(points),
            Strategy::GradientDescent(config) => DescentTrainer::new(config).fit(points),
        }
    }
}

/// Fits `points` with `strategy`.
pub fn fit(points: &[Point], strategy: &Strategy) -> Model {
    strategy.fit(points)
}
