use anyhow::{bail, Context, Result};
use log::info;

use crate::{
    config::RunConfig,
    data::{load_points, Point},
    plot::{self, PlotStyle},
    regression::{cost, Model, Regressor},
};

/// Loads the configured input, fits a line and plots it.
///
/// Prints the final cost to stdout as `cost(<m>, <c>) = <cost>`.
///
/// # Returns
/// The fitted model.
///
/// # Errors
/// Fails if the input cannot be read, holds no valid point, or the plot cannot be written.
pub fn run(config: &RunConfig) -> Result<Model> {
    let points = load_points(&config.input)
        .with_context(|| format!("could not read {}", config.input.display()))?;

    if points.is_empty() {
        bail!("no valid data points in {}", config.input.display());
    }

    info!("fitting {} points using {}", points.len(), config.strategy);
    let model = config.strategy.fit(&points);

    println!("{}", cost_line(&points, model));

    plot::render(&config.output, &points, model, &PlotStyle::default())
        .context("could not plot data")?;

    Ok(model)
}

fn cost_line(points: &[Point], model: Model) -> String {
    let Model { m, c } = model;
    format!("cost({m:.2}, {c:.2}) = {:.2}", cost(points, m, c))
}
