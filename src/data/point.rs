use std::str::FromStr;

use log::trace;

use crate::error::RecordErr;

/// A single observed `(x, y)` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl FromStr for Point {
    type Err = RecordErr;

    /// Parses a `"<x>,<y>"` record. Whitespace around either number is ignored.
    ///
    /// Only the first two fields are read. Anything after a second comma is dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.splitn(3, ',');

        let (Some(x), Some(y)) = (fields.next(), fields.next()) else {
            return Err(RecordErr::MissingSeparator);
        };

        if let Some(rest) = fields.next() {
            trace!("ignoring trailing fields {rest:?}");
        }

        let parse = |field: &'static str, raw: &str| {
            raw.trim()
                .parse::<f64>()
                .map_err(|source| RecordErr::InvalidNumber { field, source })
        };

        Ok(Self {
            x: parse("x", x)?,
            y: parse("y", y)?,
        })
    }
}
