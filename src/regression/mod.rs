//! Least-squares line fitting.
//!
//! Two interchangeable strategies minimize the mean squared error of a line
//! `y = m*x + c` against a point sequence: an exhaustive [`GridSearch`] over a
//! fixed parameter range and an iterative [`DescentTrainer`]. Both are reachable
//! through [`Strategy`] and the [`Regressor`] trait.
//!
//! Every strategy expects a non-empty point sequence. The cost is a mean over the
//! points, so an empty sequence yields NaN and is not checked here.

mod descent;
mod grid;
mod loss;
mod model;
mod optimizer;
mod strategy;

pub use descent::{DescentConfig, DescentTrainer};
pub use grid::{Axis, GridConfig, GridSearch, MAX_AXIS_LEN};
pub use loss::{cost, gradient, LossFn, Mse};
pub use model::Model;
pub use optimizer::{GradientDescent, Optimizer};
pub use strategy::{fit, Regressor, Strategy};
