use log::trace;

use super::{GradientDescent, LossFn, Model, Mse, Optimizer, Regressor};
use crate::data::Point;

/// Bounds for an iterative descent run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentConfig {
    /// Step length multiplier applied to the gradient.
    pub alpha: f64,
    /// Exact number of update steps. There is no early stop.
    pub iterations: usize,
}

impl DescentConfig {
    pub fn new(alpha: f64, iterations: usize) -> Self {
        Self { alpha, iterations }
    }
}

impl Default for DescentConfig {
    fn default() -> Self {
        Self {
            alpha: 0.01,
            iterations: 1000,
        }
    }
}

/// Fits a line by repeatedly stepping against the loss gradient, starting at `(0, 0)`.
///
/// The run length is fixed by `iterations`. Nothing guards against divergence: a
/// learning rate that is too large for the data sends the parameters to infinity
/// or NaN, and that is what gets returned.
#[derive(Debug, Clone)]
pub struct DescentTrainer<L: LossFn = Mse> {
    config: DescentConfig,
    loss_fn: L,
}

impl DescentTrainer<Mse> {
    pub fn new(config: DescentConfig) -> Self {
        Self::with_loss(config, Mse::new())
    }
}

impl<L: LossFn> DescentTrainer<L> {
    pub fn with_loss(config: DescentConfig, loss_fn: L) -> Self {
        Self { config, loss_fn }
    }

    /// Runs `iterations` steps of `optimizer` over `points`.
    ///
    /// # Arguments
    /// * `points` - The observed data, must be non-empty.
    /// * `optimizer` - The update rule.
    /// * `losses` - If present, receives the loss after every step.
    pub fn train<O: Optimizer>(
        &self,
        points: &[Point],
        optimizer: &mut O,
        mut losses: Option<&mut Vec<f64>>,
    ) -> Model {
        let mut params = Model::default().params();

        for i in 0..self.config.iterations {
            let (dm, dc) = self.loss_fn.loss_prime(points, Model::from(params));
            optimizer.update_params(&mut params, &[dm, dc]);

            let [m, c] = params;
            trace!("step {i}: grad = ({dm:.4}, {dc:.4}), model = ({m:.4}, {c:.4})");

            if let Some(losses) = losses.as_deref_mut() {
                losses.push(self.loss_fn.loss(points, Model::from(params)));
            }
        }

        Model::from(params)
    }

    /// Like [`Regressor::fit`] but also returns the loss after each iteration.
    pub fn fit_with_losses(&self, points: &[Point]) -> (Model, Vec<f64>) {
        let mut losses = Vec::with_capacity(self.config.iterations);
        let mut optimizer = GradientDescent::new(self.config.alpha);

        let model = self.train(points, &mut optimizer, Some(&mut losses));
        (model, losses)
    }
}

impl<L: LossFn> Regressor for DescentTrainer<L> {
    fn fit(&self, points: &[Point]) -> Model {
        let mut optimizer = GradientDescent::new(self.config.alpha);
        self.train(points, &mut optimizer, None)
    }
}
