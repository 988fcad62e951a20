//! Point-file parsing and edge-list output.
//!
//! The input format is two sections: the first line holds the decimal point
//! count `N`, and each of the next `N` lines holds two whitespace-separated
//! signed integer coordinates. No trailing blank line.
//!
//! Output walks the finished subdivision and emits each undirected edge
//! exactly once per line, smaller endpoint first under the `(x, y)`
//! lexicographic order, either as point indices or as raw coordinates.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use slotmap::SecondaryMap;
use thiserror::Error;

use crate::core::subdivision::{Subdivision, VertexKey};
use crate::geometry::point::Point;

/// Errors reading or parsing a point file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InputError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The first line was missing or not a decimal point count.
    #[error("{path}: malformed point count on line 1")]
    MalformedCount {
        /// Path of the offending file.
        path: PathBuf,
    },
    /// A point line did not hold two signed integers.
    #[error("{path}: malformed point on line {line}")]
    MalformedPoint {
        /// Path of the offending file.
        path: PathBuf,
        /// One-based line number of the bad line.
        line: usize,
    },
    /// The file ended before the declared number of points.
    #[error("{path}: expected {expected} points, found {found}")]
    TruncatedInput {
        /// Path of the offending file.
        path: PathBuf,
        /// Count declared on line 1.
        expected: usize,
        /// Points actually present.
        found: usize,
    },
}

/// How [`write_edges`] renders an edge's endpoints.
#[derive(Clone, Copy, Debug)]
pub enum EdgeOutput<'a> {
    /// Two insertion-order point indices per line, looked up in the given
    /// map.
    Indices(&'a SecondaryMap<VertexKey, usize>),
    /// Two coordinate pairs per line.
    Coordinates,
}

/// Reads a point file at `path`.
///
/// # Errors
///
/// Any [`InputError`] variant; each carries the offending path.
pub fn read_points(path: &Path) -> Result<Vec<Point>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_points(BufReader::new(file), path)
}

/// Parses the two-section point format from any buffered reader.
///
/// `path` is used only for error reporting.
///
/// # Errors
///
/// Any [`InputError`] variant.
pub fn parse_points<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Point>, InputError> {
    let mut lines = reader.lines();

    let header = lines
        .next()
        .transpose()
        .map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .ok_or_else(|| InputError::MalformedCount {
            path: path.to_path_buf(),
        })?;
    let expected: usize = header
        .trim()
        .parse()
        .map_err(|_| InputError::MalformedCount {
            path: path.to_path_buf(),
        })?;

    let mut points = Vec::with_capacity(expected);
    for (idx, line) in lines.enumerate().take(expected) {
        let line = line.map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bad = || InputError::MalformedPoint {
            path: path.to_path_buf(),
            line: idx + 2,
        };

        let mut fields = line.split_whitespace();
        let x: i64 = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        let y: i64 = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
        if fields.next().is_some() {
            return Err(bad());
        }
        points.push(Point::new(x, y));
    }

    if points.len() < expected {
        return Err(InputError::TruncatedInput {
            path: path.to_path_buf(),
            expected,
            found: points.len(),
        });
    }

    Ok(points)
}

/// Writes every undirected edge of `sub` to `out`, one per line.
///
/// Lines are sorted for a deterministic dump: by index pair in
/// [`EdgeOutput::Indices`] mode (smaller index first), by endpoint
/// coordinates in [`EdgeOutput::Coordinates`] mode (lexicographically
/// smaller endpoint first).
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_edges<W: Write>(
    sub: &Subdivision,
    mode: EdgeOutput<'_>,
    out: &mut W,
) -> std::io::Result<()> {
    match mode {
        EdgeOutput::Indices(indices) => {
            let mut pairs: Vec<(usize, usize)> = sub
                .undirected_edges()
                .map(|e| {
                    let (i, j) = (indices[sub.orig(e)], indices[sub.dest(e)]);
                    if i < j {
                        (i, j)
                    } else {
                        (j, i)
                    }
                })
                .collect();
            pairs.sort_unstable();
            for (i, j) in pairs {
                writeln!(out, "{i} {j}")?;
            }
        }
        EdgeOutput::Coordinates => {
            let mut pairs: Vec<(Point, Point)> = sub
                .undirected_edges()
                .map(|e| (sub.origin_point(e), sub.dest_point(e)))
                .collect();
            pairs.sort_unstable();
            for (a, b) in pairs {
                writeln!(out, "{a} {b}")?;
            }
        }
    }
    Ok(())
}

/// Builds the vertex-to-insertion-index map [`EdgeOutput::Indices`] expects.
#[must_use]
pub fn index_map(keys: &[VertexKey]) -> SecondaryMap<VertexKey, usize> {
    keys.iter().enumerate().map(|(i, &k)| (k, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::algorithms::divide_conquer::triangulate;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Vec<Point>, InputError> {
        parse_points(Cursor::new(text), Path::new("test-input"))
    }

    #[test]
    fn parses_the_documented_format() {
        let points = parse("3\n0 0\n1 0\n0 1\n").unwrap();
        assert_eq!(
            points,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn accepts_negative_coordinates_and_extra_spaces() {
        let points = parse("2\n-5  7\n  3 -9\n").unwrap();
        assert_eq!(points, vec![Point::new(-5, 7), Point::new(3, -9)]);
    }

    #[test]
    fn rejects_malformed_count() {
        assert!(matches!(
            parse("three\n0 0\n"),
            Err(InputError::MalformedCount { .. })
        ));
        assert!(matches!(parse(""), Err(InputError::MalformedCount { .. })));
    }

    #[test]
    fn rejects_malformed_point_with_line_number() {
        match parse("2\n0 0\n1 one\n") {
            Err(InputError::MalformedPoint { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected MalformedPoint, got {other:?}"),
        }
    }

    #[test]
    fn rejects_three_fields_on_a_point_line() {
        assert!(matches!(
            parse("1\n1 2 3\n"),
            Err(InputError::MalformedPoint { line: 2, .. })
        ));
    }

    #[test]
    fn reports_truncated_input() {
        match parse("5\n0 0\n1 1\n") {
            Err(InputError::TruncatedInput {
                expected, found, ..
            }) => {
                assert_eq!((expected, found), (5, 2));
            }
            other => panic!("expected TruncatedInput, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_points(Path::new("/no/such/file")).unwrap_err();
        assert!(err.to_string().contains("/no/such/file"));
    }

    #[test]
    fn writes_triangle_as_sorted_index_pairs() {
        let points = parse("3\n0 0\n1 0\n0 1\n").unwrap();
        let mut sub = Subdivision::with_capacity(points.len());
        let mut keys = sub.insert_points(&points).unwrap();
        let indices = index_map(&keys);
        triangulate(&mut sub, &mut keys).unwrap();

        let mut out = Vec::new();
        write_edges(&sub, EdgeOutput::Indices(&indices), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 1\n0 2\n1 2\n");
    }

    #[test]
    fn writes_coordinates_when_asked() {
        let points = parse("2\n0 0\n5 5\n").unwrap();
        let mut sub = Subdivision::with_capacity(points.len());
        let mut keys = sub.insert_points(&points).unwrap();
        triangulate(&mut sub, &mut keys).unwrap();

        let mut out = Vec::new();
        write_edges(&sub, EdgeOutput::Coordinates, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 0 5 5\n");
    }
}
