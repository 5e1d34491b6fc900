//! provmap - turn a hand-drawn province map into game-ready artifacts.
//!
//! Reads a 24-bit BMP in which black pixels delimit provinces, extracts
//! every province shape, and writes the recolored province bitmap, the
//! definition table, and the persisted shape data.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use provmap_color::{ProvinceColorAssigner, provinces_from_shapes};
use provmap_finder::{ShapeFinder, TracingSink};
use provmap_io::shapedata::{self, ShapeData};
use provmap_io::{
    DEFINITION_FILENAME, PROVINCES_FILENAME, SHAPEDATA_FILENAME, StageDumpWriter, definition,
    read_bitmap, write_bitmap,
};

/// Turn a hand-drawn province map into game-ready artifacts.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Input province map (24-bit BMP; black pixels delimit provinces).
    input: PathBuf,

    /// Directory the artifacts are written into.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Also write the label grids after the first two passes
    /// (labels1.bmp, labels2.bmp) for debugging province borders.
    #[arg(long)]
    dump_stages: bool,

    /// Only report warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Trace every pixel assignment (very large output).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose {
        "trace"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let map = read_bitmap(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    info!(
        path = %args.input.display(),
        width = map.width(),
        height = map.height(),
        "loaded province map"
    );

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("failed to create {}", args.output_dir.display()))?;

    let mut assigner = ProvinceColorAssigner::new();
    let sink = TracingSink;
    let mut dump = args
        .dump_stages
        .then(|| StageDumpWriter::new(&args.output_dir));

    let extraction = {
        let mut finder = ShapeFinder::new(&map, &mut assigner).with_sink(&sink);
        if let Some(writer) = dump.as_mut() {
            finder = finder.with_stage_dump(writer);
        }
        finder.find_all_shapes()?
    };

    if let Some(writer) = dump {
        writer.finish().context("failed to write stage dumps")?;
    }

    info!(shapes = extraction.shapes().len(), "generated shapes");
    if !extraction.problematic_pixels().is_empty() {
        warn!(
            count = extraction.problematic_pixels().len(),
            "mixed-color pixels were treated as border; check the input image"
        );
    }

    let provinces_path = args.output_dir.join(PROVINCES_FILENAME);
    let recolored = extraction
        .render_unique_colors()
        .context("failed to render the province bitmap")?;
    write_bitmap(&provinces_path, &recolored)
        .with_context(|| format!("failed to write {}", provinces_path.display()))?;
    info!(path = %provinces_path.display(), "wrote province bitmap");

    let definition_path = args.output_dir.join(DEFINITION_FILENAME);
    let provinces = provinces_from_shapes(extraction.shapes());
    definition::write_definition_file(&definition_path, &provinces)
        .with_context(|| format!("failed to write {}", definition_path.display()))?;
    info!(path = %definition_path.display(), provinces = provinces.len(), "wrote definition table");

    let shapedata_path = args.output_dir.join(SHAPEDATA_FILENAME);
    let data = ShapeData::from_extraction(&extraction);
    shapedata::write_shapedata_file(&shapedata_path, &data)
        .with_context(|| format!("failed to write {}", shapedata_path.display()))?;
    info!(path = %shapedata_path.display(), "wrote shape data");

    Ok(())
}
