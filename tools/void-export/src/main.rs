//! void-export - headless dimension export tool
//!
//! Generates any dimension without a renderer and writes scene statistics
//! (JSON) or point geometry (ASCII PLY). `--at` ticks the scene to an
//! elapsed time first, so updaters can be exercised and regression-snapshot
//! from the command line.

use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use voidscape_core::{
    ConfigPreset, Dimension, DimensionConfig, DimensionController, DimensionKind, GeometryData,
};

#[derive(Parser)]
#[command(name = "void-export")]
#[command(about = "Headless dimension generation and export")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct SceneArgs {
    /// Dimension kind (ring_of_chaos, stellar_vortex, tesseract, pulsar,
    /// black_hole, infinity_web)
    #[arg(long)]
    kind: String,

    /// Scene seed; the same seed reproduces the same scene
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// TOML config file (defaults to built-in parameters)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Named preset when no config file is given (vast, classic)
    #[arg(long)]
    preset: Option<String>,

    /// Tick the scene to this elapsed time (seconds) before export
    #[arg(long)]
    at: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print scene statistics as JSON on stdout
    Stats {
        #[command(flatten)]
        scene: SceneArgs,
    },

    /// Write all point-cloud points as ASCII PLY
    Ply {
        #[command(flatten)]
        scene: SceneArgs,

        /// Output .ply file
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn parse_kind(name: &str) -> Result<DimensionKind> {
    DimensionKind::ALL
        .into_iter()
        .find(|k| k.name() == name)
        .with_context(|| {
            let known: Vec<_> = DimensionKind::ALL.iter().map(|k| k.name()).collect();
            format!("unknown kind `{name}` (expected one of: {})", known.join(", "))
        })
}

fn load_config(args: &SceneArgs) -> Result<DimensionConfig> {
    if let Some(path) = &args.config {
        if args.preset.is_some() {
            bail!("--config and --preset are mutually exclusive");
        }
        return DimensionConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()));
    }
    match args.preset.as_deref() {
        None | Some("vast") => Ok(DimensionConfig::preset(ConfigPreset::Vast)),
        Some("classic") => Ok(DimensionConfig::preset(ConfigPreset::Classic)),
        Some(other) => bail!("unknown preset `{other}` (expected vast or classic)"),
    }
}

fn build_scene(args: &SceneArgs) -> Result<DimensionController> {
    let kind = parse_kind(&args.kind)?;
    let config = load_config(args)?;
    let mut controller = DimensionController::new(config);
    controller
        .generate(kind, args.seed)
        .with_context(|| format!("generating {}", kind.name()))?;
    if let Some(at) = args.at {
        controller.tick(at);
    }
    Ok(controller)
}

fn stats_json(dimension: &Dimension, seed: u32) -> serde_json::Value {
    let buffers: Vec<_> = dimension
        .buffers
        .iter()
        .map(|b| {
            serde_json::json!({
                "kind": b.kind_name(),
                "elements": b.element_count(),
                "rotation": b.rotation.to_array(),
            })
        })
        .collect();
    let view = dimension.initial_view.map(|v| {
        serde_json::json!({
            "position": v.position.to_array(),
            "look_at": v.look_at.to_array(),
            "distance": v.distance(),
        })
    });
    serde_json::json!({
        "kind": dimension.kind.name(),
        "seed": seed,
        "elements": dimension.element_count(),
        "buffers": buffers,
        "bounds": {
            "min": dimension.bounds.min.to_array(),
            "max": dimension.bounds.max.to_array(),
        },
        "rotation": dimension.rotation.to_array(),
        "uniforms": {
            "time": dimension.uniforms.time,
            "pulse": dimension.uniforms.pulse,
            "beam_opacity": dimension.uniforms.beam_opacity,
        },
        "initial_view": view,
    })
}

/// ASCII PLY of every point-cloud point, positions plus 8-bit colors.
/// Instanced sets and line segments carry no per-point geometry and are
/// skipped.
fn write_ply(dimension: &Dimension, writer: &mut impl Write) -> Result<()> {
    let count: usize = dimension
        .buffers
        .iter()
        .filter(|b| matches!(b.data, GeometryData::PointCloud { .. }))
        .map(|b| b.element_count())
        .sum();

    let mut body = String::new();
    for buffer in &dimension.buffers {
        if let GeometryData::PointCloud { positions, colors, .. } = &buffer.data {
            for (p, c) in positions.iter().zip(colors) {
                let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
                writeln!(
                    body,
                    "{} {} {} {} {} {}",
                    p.x,
                    p.y,
                    p.z,
                    to_byte(c.x),
                    to_byte(c.y),
                    to_byte(c.z)
                )?;
            }
        }
    }

    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "element vertex {count}")?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    writeln!(writer, "property uchar red")?;
    writeln!(writer, "property uchar green")?;
    writeln!(writer, "property uchar blue")?;
    writeln!(writer, "end_header")?;
    writer.write_all(body.as_bytes())?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { scene } => {
            let controller = build_scene(&scene)?;
            let dimension = controller.current().context("no active dimension")?;
            let json = stats_json(dimension, scene.seed);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Commands::Ply { scene, out } => {
            let controller = build_scene(&scene)?;
            let dimension = controller.current().context("no active dimension")?;
            let file = std::fs::File::create(&out)
                .with_context(|| format!("creating {}", out.display()))?;
            let mut writer = std::io::BufWriter::new(file);
            write_ply(dimension, &mut writer)?;
            writer.flush()?;
            tracing::info!(
                path = %out.display(),
                elements = dimension.element_count(),
                "wrote PLY"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_scene(kind: &str, at: Option<f64>) -> SceneArgs {
        SceneArgs {
            kind: kind.into(),
            seed: 7,
            config: None,
            preset: Some("classic".into()),
            at,
        }
    }

    #[test]
    fn test_parse_kind_round_trips() {
        for kind in DimensionKind::ALL {
            assert_eq!(parse_kind(kind.name()).unwrap(), kind);
        }
        assert!(parse_kind("warp_core").is_err());
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let mut scene = small_scene("tesseract", None);
        scene.preset = Some("enormous".into());
        assert!(load_config(&scene).is_err());
    }

    #[test]
    fn test_stats_reports_counts_and_view() {
        let controller = build_scene(&small_scene("tesseract", Some(2.0))).unwrap();
        let json = stats_json(controller.current().unwrap(), 7);
        assert_eq!(json["kind"], "tesseract");
        assert_eq!(json["elements"], 64);
        assert!(json["initial_view"]["distance"].as_f64().unwrap() > 0.0);
        assert!(json["bounds"]["min"][0].as_f64().is_some());
    }

    #[test]
    fn test_ply_output_has_header_and_vertices() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pulsar.ply");

        let controller = build_scene(&small_scene("pulsar", None)).unwrap();
        let dimension = controller.current().unwrap();
        let mut file = std::fs::File::create(&path).unwrap();
        write_ply(dimension, &mut file).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let disk_points = controller.config().pulsar.disk_points;
        assert!(text.starts_with("ply\nformat ascii 1.0\n"));
        assert!(text.contains(&format!("element vertex {disk_points}")));
        let data_lines = text
            .lines()
            .skip_while(|l| *l != "end_header")
            .skip(1)
            .count();
        assert_eq!(data_lines, disk_points);
    }
}
