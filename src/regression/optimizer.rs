/// Moves model parameters given the loss gradient at their current values.
///
/// Parameters are passed in their flat layout, `[m, c]` for a line.
pub trait Optimizer {
    fn update_params(&mut self, params: &mut [f64], grad: &[f64]);
}

/// Plain steepest descent with a constant step factor `alpha`.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    alpha: f64,
}

impl GradientDescent {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }
}

impl Optimizer for GradientDescent {
    /// Sets every parameter `p` to `p - alpha * dp`.
    ///
    /// Extra entries in either slice are ignored. No step size control is applied, so a
    /// large `alpha` is free to overshoot.
    fn update_params(&mut self, params: &mut [f64], grad: &[f64]) {
        for (p, dp) in params.iter_mut().zip(grad) {
            *p -= self.alpha * dp;
        }
    }
}
