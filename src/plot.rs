use std::{ops::Range, path::Path};

use log::{info, warn};
use plotters::prelude::*;

use crate::{data::Point, error::RenderErr, regression::Model};

/// Size and layout of the rendered plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    /// The x coordinates the fitted line is drawn between.
    pub line_span: (f64, f64),
    /// Half-width of the cross drawn for each point, in pixels.
    pub marker_size: i32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            margin: 16,
            line_span: (3.0, 20.0),
            marker_size: 4,
        }
    }
}

/// Draws `points` as red crosses with `model` as a line on top and writes a PNG to `path`.
///
/// A model with non-finite parameters is left out of the plot.
pub fn render(
    path: &Path,
    points: &[Point],
    model: Model,
    style: &PlotStyle,
) -> Result<(), RenderErr> {
    let (x0, x1) = style.line_span;
    let line = [(x0, model.predict(x0)), (x1, model.predict(x1))];
    let draw_line = model.is_finite();
    if !draw_line {
        warn!("model {model} is not finite, the fitted line is left out");
    }

    let x_range = padded_range(points.iter().map(|p| p.x).chain([x0, x1]));
    let y_range = padded_range(
        points
            .iter()
            .map(|p| p.y)
            .chain(line.iter().filter(|_| draw_line).map(|&(_, y)| y)),
    );

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| RenderErr::new("fill drawing area", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(style.margin)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| RenderErr::new("create plot", e))?;

    let marker = style.marker_size;
    chart
        .draw_series(
            points
                .iter()
                .map(|p| Cross::new((p.x, p.y), marker, RED.stroke_width(1))),
        )
        .map_err(|e| RenderErr::new("create scatter", e))?;

    if draw_line {
        chart
            .draw_series(LineSeries::new(line, BLACK.stroke_width(1)))
            .map_err(|e| RenderErr::new("create line", e))?;
    }

    root.present().map_err(|e| RenderErr::new("write png", e))?;

    info!("wrote plot to {}", path.display());
    Ok(())
}

/// Smallest range holding every finite value, widened by 5% on each side.
///
/// Falls back to `[-1, 1]` without finite values and to `±1` around a single value.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        return -1.0..1.0;
    }

    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (lo - pad)..(hi + pad)
}
