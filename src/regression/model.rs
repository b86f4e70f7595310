use std::fmt;

/// A fitted line `y = m*x + c`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Model {
    pub m: f64,
    pub c: f64,
}

impl Model {
    #[inline]
    pub fn new(m: f64, c: f64) -> Self {
        Self { m, c }
    }

    /// Evaluates the line at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        x * self.m + self.c
    }

    /// The parameters as a flat `[m, c]` buffer, the layout optimizers work on.
    #[inline]
    pub fn params(&self) -> [f64; 2] {
        [self.m, self.c]
    }

    pub fn is_finite(&self) -> bool {
        self.m.is_finite() && self.c.is_finite()
    }
}

impl From<[f64; 2]> for Model {
    fn from([m, c]: [f64; 2]) -> Self {
        Self { m, c }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.m, self.c)
    }
}
