//! Command-line front end: triangulate a point file and print the edge list.
//!
//! Usage: `delaunay2d <input-file> [--coords]`
//!
//! Prints one undirected edge per line, as point indices by default or as
//! coordinate pairs with `--coords`. Exits 1 with a diagnostic on a missing
//! or malformed input file, or on pool exhaustion.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use quadedge_delaunay::prelude::*;

struct Args {
    input: PathBuf,
    coords: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut input = None;
    let mut coords = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--coords" => coords = true,
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            other => return Err(format!("unexpected argument: {other}")),
        }
    }
    let input = input.ok_or_else(|| "usage: delaunay2d <input-file> [--coords]".to_string())?;
    Ok(Args { input, coords })
}

fn run(args: &Args) -> Result<(), String> {
    let points = read_points(&args.input).map_err(|e| e.to_string())?;

    let mut sub = Subdivision::with_capacity(points.len());
    let mut keys = sub
        .insert_points(&points)
        .map_err(|e| e.to_string())?;
    let indices = index_map(&keys);

    triangulate(&mut sub, &mut keys).map_err(|e| e.to_string())?;

    let mode = if args.coords {
        EdgeOutput::Coordinates
    } else {
        EdgeOutput::Indices(&indices)
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_edges(&sub, mode, &mut out).map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(1);
        }
    };
    if let Err(msg) = run(&args) {
        eprintln!("{msg}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
