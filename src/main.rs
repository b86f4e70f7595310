use anyhow::Result;
use clap::Parser;
use log::info;

use linefit::RunConfig;

/// Fits a line to the points in a data file and plots the result.
///
/// Input, output, strategy and learning rate are read from LINEFIT_INPUT,
/// LINEFIT_OUTPUT, LINEFIT_STRATEGY and LINEFIT_ALPHA.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// number of iterations
    #[arg(short = 'n', default_value_t = 1000)]
    iterations: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = RunConfig::from_env(cli.iterations)?;

    let model = linefit::run(&config)?;
    info!("fitted y = {:.4}*x + {:.4}", model.m, model.c);

    Ok(())
}
