use std::{env, path::PathBuf};

use crate::{
    error::ConfigErr,
    regression::{DescentConfig, GridConfig, Strategy},
};

pub const INPUT_VAR: &str = "LINEFIT_INPUT";
pub const OUTPUT_VAR: &str = "LINEFIT_OUTPUT";
pub const STRATEGY_VAR: &str = "LINEFIT_STRATEGY";
pub const ALPHA_VAR: &str = "LINEFIT_ALPHA";

const DEFAULT_INPUT: &str = "data.txt";
const DEFAULT_OUTPUT: &str = "out.png";

/// Everything a single run needs: where to read, where to draw, how to fit.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub strategy: Strategy,
}

impl RunConfig {
    /// Resolves the configuration from the process environment.
    ///
    /// # Args
    /// * `iterations` - Gradient-descent step count, as given on the command line.
    pub fn from_env(iterations: usize) -> Result<Self, ConfigErr> {
        Self::from_lookup(iterations, |var| env::var(var).ok())
    }

    /// Resolves the configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Unset variables fall back to their defaults. The learning rate is only read
    /// for gradient descent.
    pub fn from_lookup<F>(iterations: usize, lookup: F) -> Result<Self, ConfigErr>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = lookup(INPUT_VAR).unwrap_or_else(|| DEFAULT_INPUT.to_string());
        let output = lookup(OUTPUT_VAR).unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

        let strategy = match lookup(STRATEGY_VAR).as_deref().map(str::trim) {
            None | Some("gradient-descent") => {
                let alpha = match lookup(ALPHA_VAR) {
                    Some(raw) => parse_alpha(&raw)?,
                    None => DescentConfig::default().alpha,
                };
                Strategy::GradientDescent(DescentConfig::new(alpha, iterations))
            }
            Some("grid-search") => Strategy::GridSearch(GridConfig::default()),
            Some(other) => {
                return Err(ConfigErr::InvalidVar {
                    var: STRATEGY_VAR,
                    value: other.to_string(),
                    reason: "expected gradient-descent or grid-search".into(),
                })
            }
        };

        Ok(Self {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            strategy,
        })
    }
}

fn parse_alpha(raw: &str) -> Result<f64, ConfigErr> {
    let invalid = |reason: String| ConfigErr::InvalidVar {
        var: ALPHA_VAR,
        value: raw.to_string(),
        reason,
    };

    let alpha: f64 = raw.trim().parse().map_err(|e| invalid(format!("{e}")))?;
    if !alpha.is_finite() || alpha <= 0.0 {
        return Err(invalid("learning rate must be finite and positive".into()));
    }

    Ok(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = RunConfig::from_lookup(1000, lookup_in(&[])).unwrap();

        assert_eq!(config.input, PathBuf::from("data.txt"));
        assert_eq!(config.output, PathBuf::from("out.png"));
        assert_eq!(
            config.strategy,
            Strategy::GradientDescent(DescentConfig::new(0.01, 1000))
        );
    }

    #[test]
    fn iteration_count_is_threaded_into_descent() {
        let config = RunConfig::from_lookup(0, lookup_in(&[])).unwrap();
        assert_eq!(
            config.strategy,
            Strategy::GradientDescent(DescentConfig::new(0.01, 0))
        );
    }

    #[test]
    fn variables_override_defaults() {
        let config = RunConfig::from_lookup(
            7,
            lookup_in(&[
                (INPUT_VAR, "points.csv"),
                (OUTPUT_VAR, "plots/fit.png"),
                (ALPHA_VAR, " 0.05 "),
            ]),
        )
        .unwrap();

        assert_eq!(config.input, PathBuf::from("points.csv"));
        assert_eq!(config.output, PathBuf::from("plots/fit.png"));
        assert_eq!(
            config.strategy,
            Strategy::GradientDescent(DescentConfig::new(0.05, 7))
        );
    }

    #[test]
    fn grid_search_can_be_selected() {
        let config =
            RunConfig::from_lookup(1000, lookup_in(&[(STRATEGY_VAR, "grid-search")])).unwrap();
        assert_eq!(config.strategy, Strategy::GridSearch(GridConfig::default()));
    }

    #[test]
    fn alpha_is_ignored_for_grid_search() {
        let config = RunConfig::from_lookup(
            1000,
            lookup_in(&[(STRATEGY_VAR, "grid-search"), (ALPHA_VAR, "nope")]),
        );
        assert!(config.is_ok());
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = RunConfig::from_lookup(1000, lookup_in(&[(STRATEGY_VAR, "newton")])).unwrap_err();
        assert!(matches!(err, ConfigErr::InvalidVar { var: STRATEGY_VAR, .. }));
    }

    #[test]
    fn bad_learning_rates_are_rejected() {
        for raw in ["abc", "0", "-0.1", "inf", "NaN"] {
            let err = RunConfig::from_lookup(1000, lookup_in(&[(ALPHA_VAR, raw)])).unwrap_err();
            assert!(
                matches!(err, ConfigErr::InvalidVar { var: ALPHA_VAR, .. }),
                "{raw} was accepted"
            );
        }
    }
}
