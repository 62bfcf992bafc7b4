use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use imgeom::{Affine2, MidpointRounding, Point, PointF};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "imgeom")]
#[command(about = "Integer point conversions and affine transforms")]
struct Cmd {
    /// Midpoint rule for every rounding step
    #[arg(long, value_enum, default_value_t = Rounding::Even, global = true)]
    rounding: Rounding,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Rounding {
    /// Ties to even (default)
    Even,
    /// Ties away from zero
    Away,
}

impl From<Rounding> for MidpointRounding {
    fn from(r: Rounding) -> Self {
        match r {
            Rounding::Even => MidpointRounding::ToEven,
            Rounding::Away => MidpointRounding::AwayFromZero,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Ceil,
    Round,
    Truncate,
}

#[derive(Subcommand)]
enum Action {
    /// Decode a point from two signed 16-bit halves packed in one integer
    Unpack {
        #[arg(long, allow_hyphen_values = true)]
        value: i32,
    },
    /// Narrow a float point to integer coordinates
    Convert {
        #[arg(long, allow_hyphen_values = true)]
        x: f32,
        #[arg(long, allow_hyphen_values = true)]
        y: f32,
        #[arg(long, value_enum, default_value_t = Mode::Round)]
        mode: Mode,
    },
    /// Apply a 3x2 matrix "m11,m12,m21,m22,m31,m32" to a point
    Transform {
        #[arg(long, allow_hyphen_values = true)]
        x: i32,
        #[arg(long, allow_hyphen_values = true)]
        y: i32,
        #[arg(long, allow_hyphen_values = true)]
        matrix: Affine2,
        /// Round the result back to integer coordinates
        #[arg(long)]
        round: bool,
    },
    /// Rotate a point counterclockwise, optionally about a center
    Rotate {
        #[arg(long, allow_hyphen_values = true)]
        x: i32,
        #[arg(long, allow_hyphen_values = true)]
        y: i32,
        #[arg(long, allow_hyphen_values = true)]
        degrees: f32,
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        center_x: f32,
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        center_y: f32,
    },
    /// Skew a point along x and y
    Skew {
        #[arg(long, allow_hyphen_values = true)]
        x: i32,
        #[arg(long, allow_hyphen_values = true)]
        y: i32,
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        degrees_x: f32,
        #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
        degrees_y: f32,
    },
    /// Transform a JSON array of [x, y] points and write JSON plus a provenance sidecar
    Batch {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        #[arg(long, allow_hyphen_values = true)]
        matrix: Affine2,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    run(cmd, &mut std::io::stdout().lock())
}

/// Dispatch one command. Results go to `out`; logs go to the subscriber.
fn run(cmd: Cmd, out: &mut impl Write) -> Result<()> {
    let rounding = MidpointRounding::from(cmd.rounding);
    match cmd.action {
        Action::Unpack { value } => {
            tracing::info!(value, "unpack");
            writeln!(out, "{}", Point::from_packed(value))?;
        }
        Action::Convert { x, y, mode } => {
            tracing::info!(x, y, ?mode, ?rounding, "convert");
            writeln!(out, "{}", convert(PointF::new(x, y), mode, rounding))?;
        }
        Action::Transform {
            x,
            y,
            matrix,
            round,
        } => {
            tracing::info!(x, y, matrix = ?matrix.to_rows(), round, "transform");
            let p = Point::new(x, y);
            if round {
                writeln!(out, "{}", apply_rounded(p, &matrix, rounding, Point::rotate))?;
            } else {
                writeln!(out, "{}", Point::transform(p, &matrix))?;
            }
        }
        Action::Rotate {
            x,
            y,
            degrees,
            center_x,
            center_y,
        } => {
            tracing::info!(x, y, degrees, center_x, center_y, "rotate");
            let m = Affine2::rotation_about(degrees.to_radians(), PointF::new(center_x, center_y));
            let p = apply_rounded(Point::new(x, y), &m, rounding, Point::rotate);
            writeln!(out, "{p}")?;
        }
        Action::Skew {
            x,
            y,
            degrees_x,
            degrees_y,
        } => {
            tracing::info!(x, y, degrees_x, degrees_y, "skew");
            let m = Affine2::skew_degrees(degrees_x, degrees_y);
            let p = apply_rounded(Point::new(x, y), &m, rounding, Point::skew);
            writeln!(out, "{p}")?;
        }
        Action::Batch { input, out: path, matrix } => batch(&input, &path, &matrix, rounding)?,
        Action::Report => report(out)?,
    }
    Ok(())
}

fn convert(p: PointF, mode: Mode, rounding: MidpointRounding) -> Point {
    match mode {
        Mode::Ceil => Point::ceiling(p),
        Mode::Round => Point::round_with(p, rounding),
        Mode::Truncate => Point::truncate(p),
    }
}

/// Transform and round back to the grid under `rounding`. `grid_op` is the
/// library's ties-to-even transform-and-round (`Point::rotate`/`Point::skew`).
fn apply_rounded(
    p: Point,
    m: &Affine2,
    rounding: MidpointRounding,
    grid_op: fn(Point, &Affine2) -> Point,
) -> Point {
    match rounding {
        MidpointRounding::ToEven => grid_op(p, m),
        other => Point::round_with(Point::transform(p, m), other),
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct BatchInput {
    points: Vec<[i32; 2]>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct BatchOutput {
    matrix: [f32; 6],
    rounding: String,
    points: Vec<[i32; 2]>,
}

fn transform_batch(points: &[[i32; 2]], m: &Affine2, rounding: MidpointRounding) -> BatchOutput {
    let points = points
        .iter()
        .map(|&[x, y]| {
            let (x, y): (i32, i32) = apply_rounded(Point::new(x, y), m, rounding, Point::rotate).into();
            [x, y]
        })
        .collect();
    BatchOutput {
        matrix: m.to_rows(),
        rounding: format!("{rounding:?}"),
        points,
    }
}

fn batch(input: &str, out: &str, m: &Affine2, rounding: MidpointRounding) -> Result<()> {
    tracing::info!(input, out, matrix = ?m.to_rows(), ?rounding, "batch");
    if !input.ends_with(".json") {
        bail!("batch input must be a .json file, got {input}");
    }
    let raw = std::fs::read(input).with_context(|| format!("reading {input}"))?;
    let parsed: BatchInput =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {input} as [[x, y], ...]"))?;
    let result = transform_batch(&parsed.points, m, rounding);
    tracing::info!(points = result.points.len(), "batch_transformed");

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&result)?)
        .with_context(|| format!("writing {out}"))?;

    let mut payload = provenance::Payload::new(serde_json::json!({
        "matrix": m.to_rows(),
        "rounding": format!("{rounding:?}"),
        "points": result.points.len(),
    }));
    payload.inputs.push(input.to_string());
    provenance::write_sidecar(out_path, payload)?;
    Ok(())
}

fn report(out: &mut impl Write) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": imgeom::VERSION,
        "rounding_default": format!("{:?}", MidpointRounding::default()),
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&obj)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn convert_modes() {
        let p = PointF::new(2.5, -1.5);
        assert_eq!(convert(p, Mode::Ceil, MidpointRounding::ToEven), Point::new(3, -1));
        assert_eq!(convert(p, Mode::Truncate, MidpointRounding::ToEven), Point::new(2, -1));
        assert_eq!(convert(p, Mode::Round, MidpointRounding::ToEven), Point::new(2, -2));
        assert_eq!(
            convert(p, Mode::Round, MidpointRounding::AwayFromZero),
            Point::new(3, -2)
        );
    }

    #[test]
    fn rounding_rule_reaches_transform() {
        let m = Affine2::scale(0.5, 0.5);
        let p = Point::new(5, -3);
        let even = MidpointRounding::ToEven;
        let away = MidpointRounding::AwayFromZero;
        assert_eq!(apply_rounded(p, &m, even, Point::rotate), Point::new(2, -2));
        assert_eq!(apply_rounded(p, &m, away, Point::rotate), Point::new(3, -2));
        assert_eq!(apply_rounded(p, &m, even, Point::skew), Point::new(2, -2));
    }

    fn run_to_string(args: &[&str]) -> String {
        let cmd = Cmd::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(cmd, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn stdout_carries_only_the_result() {
        assert_eq!(
            run_to_string(&["imgeom", "unpack", "--value", "196607"]),
            "Point [ X=-1, Y=2 ]\n"
        );
        assert_eq!(
            run_to_string(&["imgeom", "convert", "--x", "2.5", "--y", "-1.5"]),
            "Point [ X=2, Y=-2 ]\n"
        );
        assert_eq!(
            run_to_string(&["imgeom", "rotate", "--x", "3", "--y", "7", "--degrees", "90"]),
            "Point [ X=-7, Y=3 ]\n"
        );
        let report: serde_json::Value =
            serde_json::from_str(&run_to_string(&["imgeom", "report"])).unwrap();
        assert_eq!(report["version"], imgeom::VERSION);
    }

    #[test]
    fn skew_and_rounding_flag_reach_output() {
        assert_eq!(
            run_to_string(&["imgeom", "skew", "--x", "0", "--y", "3", "--degrees-x", "45"]),
            "Point [ X=3, Y=3 ]\n"
        );
        let half = "0.5,0,0,0.5,0,0";
        let even = ["imgeom", "transform", "--x", "5", "--y", "-3", "--matrix", half, "--round"];
        assert_eq!(run_to_string(&even), "Point [ X=2, Y=-2 ]\n");
        let away = [
            "imgeom", "--rounding", "away", "transform", "--x", "5", "--y", "-3", "--matrix", half,
            "--round",
        ];
        assert_eq!(run_to_string(&away), "Point [ X=3, Y=-2 ]\n");
    }

    #[test]
    fn cli_parses_matrix_and_negative_values() {
        let cmd = Cmd::try_parse_from([
            "imgeom",
            "transform",
            "--x",
            "-3",
            "--y",
            "4",
            "--matrix",
            "1,0,0,1,-2,0.5",
        ])
        .unwrap();
        match cmd.action {
            Action::Transform { x, y, matrix, round } => {
                assert_eq!((x, y), (-3, 4));
                assert_eq!(matrix, Affine2::translation(-2.0, 0.5));
                assert!(!round);
            }
            _ => panic!("expected transform"),
        }
        let bad = ["imgeom", "transform", "--x", "1", "--y", "1", "--matrix", "1,2"];
        assert!(Cmd::try_parse_from(bad).is_err());
    }

    #[test]
    fn batch_writes_points_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pts.json");
        std::fs::write(&input, "[[1, 0], [3, 7], [-2, 5]]").unwrap();
        let out = dir.path().join("nested").join("rotated.json");
        let m = Affine2::rotation_degrees(90.0);
        batch(
            input.to_str().unwrap(),
            out.to_str().unwrap(),
            &m,
            MidpointRounding::ToEven,
        )
        .unwrap();
        let parsed: BatchOutput = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed.points, vec![[0, 1], [-7, 3], [-5, -2]]);
        assert_eq!(parsed.rounding, "ToEven");
        assert!(dir
            .path()
            .join("nested")
            .join("rotated.provenance.json")
            .exists());
    }

    #[test]
    fn batch_rejects_non_json_input() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("o.json");
        let id = Affine2::identity();
        let err = batch("pts.csv", out.to_str().unwrap(), &id, MidpointRounding::ToEven).unwrap_err();
        assert!(err.to_string().contains(".json"));
    }
}
