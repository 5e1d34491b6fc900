//! Artifact regression test
//!
//! Runs the full pipeline over a small map and exercises every
//! artifact writer end to end: the recolored province bitmap, the
//! definition table, the persisted shape data, and the stage dumps.

use std::fs;
use std::path::PathBuf;

use provmap_color::{ProvinceColorAssigner, provinces_from_shapes};
use provmap_core::PixelGrid;
use provmap_finder::{Extraction, ShapeFinder};
use provmap_io::shapedata::{self, ShapeData};
use provmap_io::stage::{LABELS1_FILENAME, LABELS2_FILENAME};
use provmap_io::{StageDumpWriter, bmp, definition};
use provmap_test::bitmap_from_rows;

const ROWS: [&str; 4] = ["RRR#BBB", "RRR#BBB", "#######", "LLL#GGG"];

fn run() -> Extraction {
    let map = bitmap_from_rows(&ROWS);
    let mut assigner = ProvinceColorAssigner::new();
    ShapeFinder::new(&map, &mut assigner)
        .find_all_shapes()
        .expect("extraction succeeds")
}

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("provmap-{tag}-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn province_bitmap_round_trips() {
    let extraction = run();
    let recolored = extraction.render_unique_colors().unwrap();

    let mut buf = Vec::new();
    bmp::write_bmp(&recolored, &mut buf).unwrap();
    let decoded = bmp::read_bmp(std::io::Cursor::new(buf)).unwrap();

    assert_eq!(decoded, recolored);
    // Distinct provinces keep distinct colors through the codec.
    assert_ne!(decoded.color_at(0, 0), decoded.color_at(6, 0));
}

#[test]
fn definition_table_covers_every_shape() {
    let extraction = run();
    let provinces = provinces_from_shapes(extraction.shapes());
    assert_eq!(provinces.len(), extraction.shapes().len());

    let mut buf = Vec::new();
    definition::write_definitions(&provinces, &mut buf).unwrap();
    let table = String::from_utf8(buf).unwrap();

    assert_eq!(table.lines().count(), provinces.len());
    // Map order: red land, blue sea, teal lake, green land.
    let kinds: Vec<_> = table
        .lines()
        .map(|line| line.split(';').nth(4).unwrap().to_string())
        .collect();
    assert_eq!(kinds, ["land", "sea", "lake", "land"]);
}

#[test]
fn shapedata_survives_a_round_trip() {
    let extraction = run();
    let data = ShapeData::from_extraction(&extraction);

    let dir = temp_dir("shapedata");
    let path = dir.join("shapedata.bin");
    shapedata::write_shapedata_file(&path, &data).unwrap();
    let decoded = shapedata::read_shapedata_file(&path).unwrap();

    assert_eq!(decoded, data);
    assert_eq!(decoded.shapes.len(), extraction.shapes().len());
    assert_eq!(
        decoded.labels.len(),
        (decoded.width * decoded.height) as usize
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn stage_dumps_land_on_disk() {
    let map = bitmap_from_rows(&ROWS);
    let mut assigner = ProvinceColorAssigner::new();
    let dir = temp_dir("stages");
    let mut dump = StageDumpWriter::new(&dir);

    ShapeFinder::new(&map, &mut assigner)
        .with_stage_dump(&mut dump)
        .find_all_shapes()
        .unwrap();
    dump.finish().unwrap();

    let labels1 = bmp::read_bitmap(dir.join(LABELS1_FILENAME)).unwrap();
    let labels2 = bmp::read_bitmap(dir.join(LABELS2_FILENAME)).unwrap();

    assert_eq!(labels1.width(), map.width());
    assert_eq!(labels2.height(), map.height());
    // Border pixels render as border in both dumps.
    assert!(labels1.color_at(3, 0).is_border());
    assert!(labels2.color_at(3, 0).is_border());
    // Non-border pixels carry label-derived colors.
    assert!(!labels1.color_at(0, 0).is_border());
    assert!(!labels2.color_at(0, 0).is_border());

    fs::remove_dir_all(&dir).ok();
}
