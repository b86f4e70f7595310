use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use linefit::{
    config::{INPUT_VAR, OUTPUT_VAR, STRATEGY_VAR},
    regression::{cost, DescentConfig},
    LoadErr, RunConfig, Strategy,
};

use tempfile::{tempdir, TempDir};

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Writes `contents` to `name` inside `dir`.
fn write_input(dir: &TempDir, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn config(input: &Path, output: &Path, strategy: Option<&str>, iterations: usize) -> RunConfig {
    let mut vars = HashMap::new();
    vars.insert(INPUT_VAR, input.display().to_string());
    vars.insert(OUTPUT_VAR, output.display().to_string());
    if let Some(s) = strategy {
        vars.insert(STRATEGY_VAR, s.to_string());
    }

    RunConfig::from_lookup(iterations, |key: &str| vars.get(key).cloned()).unwrap()
}

fn assert_png(path: &Path) {
    let bytes = fs::read(path).unwrap();
    assert!(bytes.starts_with(PNG_MAGIC), "{} is not a png", path.display());
}

#[test]
fn gradient_descent_pipeline_fits_and_plots() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "data.txt", "1.0,1.0\n2.0,2.0\ngarbage\n3.0,3.0\n");
    let output = dir.path().join("out.png");

    let model = linefit::run(&config(&input, &output, None, 10_000)).unwrap();

    assert!((model.m - 1.0).abs() < 1e-3, "m = {}", model.m);
    assert!(model.c.abs() < 1e-3, "c = {}", model.c);
    assert_png(&output);
}

#[test]
fn grid_search_pipeline_fits_and_plots() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "data.txt", "1.0,1.0\n2.0,2.0\n3.0,3.0\n");
    let output = dir.path().join("out.png");

    let config = config(&input, &output, Some("grid-search"), 1000);
    assert!(matches!(config.strategy, Strategy::GridSearch(_)));

    let model = linefit::run(&config).unwrap();

    let points = linefit::data::load_points(&input).unwrap();
    assert!(cost(&points, model.m, model.c) < 1e-6);
    assert_png(&output);
}

#[test]
fn zero_iterations_plots_the_initial_line() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "data.txt", "3,7.5\n4,9.5\n5,11.5\n");
    let output = dir.path().join("out.png");

    let config = config(&input, &output, None, 0);
    assert_eq!(
        config.strategy,
        Strategy::GradientDescent(DescentConfig::new(0.01, 0))
    );

    let model = linefit::run(&config).unwrap();
    assert_eq!((model.m, model.c), (0.0, 0.0));
    assert_png(&output);
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.png");

    let err = linefit::run(&config(&dir.path().join("nope.txt"), &output, None, 10)).unwrap_err();

    let load = err.downcast_ref::<LoadErr>().expect("load error in the chain");
    assert!(matches!(load, LoadErr::SourceUnavailable { .. }));
    assert!(!output.exists());
}

#[test]
fn input_without_valid_points_is_fatal() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "data.txt", "garbage\n\nx,y\n");
    let output = dir.path().join("out.png");

    let err = linefit::run(&config(&input, &output, None, 10)).unwrap_err();

    assert!(err.to_string().contains("no valid data points"));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_fatal() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "data.txt", "1,1\n2,2\n");
    let output = dir.path().join("missing").join("out.png");

    let err = linefit::run(&config(&input, &output, None, 10)).unwrap_err();

    assert!(err.downcast_ref::<linefit::RenderErr>().is_some());
}

#[test]
fn non_text_lines_are_skipped_by_the_pipeline() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "data.txt", b"1,1\n\xff\xfe junk\n2,2,extra\n3,3\n");
    let output = dir.path().join("out.png");

    let config = config(&input, &output, Some("grid-search"), 1000);
    let model = linefit::run(&config).unwrap();

    let points = linefit::data::load_points(&input).unwrap();
    assert_eq!(points.len(), 3);
    assert!(cost(&points, model.m, model.c) < 1e-6);
    assert_png(&output);
}
