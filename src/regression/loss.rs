use super::Model;
use crate::data::Point;

/// Mean squared residual of the line `(m, c)` over `points`.
///
/// `cost = 1/N * sum((y - (m*x + c))^2)`
pub fn cost(points: &[Point], m: f64, c: f64) -> f64 {
    let sum: f64 = points
        .iter()
        .map(|p| {
            let d = p.y - (p.x * m + c);
            d * d
        })
        .sum();

    sum / points.len() as f64
}

/// Partial derivatives of [`cost`] with respect to `m` and `c`.
///
/// With `d = y - (m*x + c)`:
/// * `dcost/dm = 2/N * sum(-x * d)`
/// * `dcost/dc = 2/N * sum(-d)`
///
/// # Returns
/// `(dm, dc)`, pointing uphill: subtract it to descend.
pub fn gradient(points: &[Point], m: f64, c: f64) -> (f64, f64) {
    let (dm, dc) = points.iter().fold((0.0, 0.0), |(dm, dc), p| {
        let d = p.y - (p.x * m + c);
        (dm - p.x * d, dc - d)
    });

    let n = points.len() as f64;
    (2.0 / n * dm, 2.0 / n * dc)
}

/// An objective a line model is fitted against.
pub trait LossFn {
    fn loss(&self, points: &[Point], model: Model) -> f64;
    fn loss_prime(&self, points: &[Point], model: Model) -> (f64, f64);
}

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, points: &[Point], model: Model) -> f64 {
        cost(points, model.m, model.c)
    }

    fn loss_prime(&self, points: &[Point], model: Model) -> (f64, f64) {
        gradient(points, model.m, model.c)
    }
}
