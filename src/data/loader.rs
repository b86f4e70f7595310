use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str,
};

use log::{info, warn};

use super::Point;
use crate::error::{LoadErr, RecordErr};

/// Reads points line by line from `reader`.
///
/// Lines that do not start with two comma-separated numbers, including lines that
/// are not valid UTF-8, are discarded with a warning and never produce a point.
/// Any I/O error aborts the whole load.
///
/// # Returns
/// The well-formed points, in input order.
pub fn read_points<R: BufRead>(mut reader: R) -> Result<Vec<Point>, LoadErr> {
    let mut points = Vec::new();
    let mut discarded = 0usize;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = trim_line_ending(&buf);
        let parsed = str::from_utf8(line)
            .map_err(RecordErr::InvalidUtf8)
            .and_then(|line| line.parse::<Point>());

        match parsed {
            Ok(point) => points.push(point),
            Err(e) => {
                warn!(
                    "discarding bad data point: {:?}: {e}",
                    String::from_utf8_lossy(line)
                );
                discarded += 1;
            }
        }
    }

    if discarded > 0 {
        info!("kept {} points, discarded {discarded} lines", points.len());
    }

    Ok(points)
}

/// Strips a trailing `\n` or `\r\n`.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => line,
    }
}

/// Opens `path` and reads its points, see [`read_points`].
///
/// The file handle is dropped on every return path.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>, LoadErr> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadErr::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let points = read_points(BufReader::new(file))?;
    info!("loaded {} points from {}", points.len(), path.display());

    Ok(points)
}
