//! Shape finder regression test
//!
//! End-to-end scenarios over small hand-drawn maps, verifying:
//!
//! 1. Shape counts, pixel counts and bounding boxes per scenario
//! 2. The partition property (every pixel in exactly one shape)
//! 3. Label/shape correspondence after all passes
//! 4. Determinism across runs
//! 5. Warning and fatal-event reporting
//! 6. Cancellation and stage-dump behavior

use std::cell::RefCell;

use provmap_color::ProvinceColorAssigner;
use provmap_core::{PixelGrid, Point};
use provmap_finder::{
    CancelToken, EventSink, Extraction, FinderError, LabelGrid, ShapeFinder, Stage, StageDump,
    Warning,
};
use provmap_test::{GREEN, RED, assert_partition, bitmap_from_rows};

/// Records every event for later assertions.
#[derive(Default)]
struct RecordingSink {
    stages: RefCell<Vec<Stage>>,
    warnings: RefCell<Vec<Warning>>,
    errors: RefCell<Vec<FinderError>>,
}

impl RecordingSink {
    fn mixed_color_warnings(&self) -> usize {
        self.warnings
            .borrow()
            .iter()
            .filter(|w| matches!(w, Warning::MixedColorNeighborhood { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn stage(&self, stage: Stage) {
        self.stages.borrow_mut().push(stage);
    }

    fn warn(&self, warning: &Warning) {
        self.warnings.borrow_mut().push(warning.clone());
    }

    fn error(&self, error: &FinderError) {
        self.errors.borrow_mut().push(error.clone());
    }
}

fn extract(rows: &[&str]) -> (Extraction, RecordingSink) {
    let map = bitmap_from_rows(rows);
    let sink = RecordingSink::default();
    let mut assigner = ProvinceColorAssigner::new();
    let extraction = ShapeFinder::new(&map, &mut assigner)
        .with_sink(&sink)
        .find_all_shapes()
        .expect("extraction succeeds");
    (extraction, sink)
}

#[test]
fn single_shape_with_surrounding_border() {
    let rows = ["####", "#RR#", "#RR#", "####"];
    let map = bitmap_from_rows(&rows);
    let (extraction, sink) = extract(&rows);

    assert_eq!(extraction.shapes().len(), 1);
    let shape = &extraction.shapes()[0];
    assert_eq!(shape.source_color(), RED);
    assert_eq!(shape.pixel_count(), 16);
    assert_eq!(shape.bounding_box().min, Point::new(0, 0));
    assert_eq!(shape.bounding_box().max, Point::new(3, 3));
    assert_partition(&map, extraction.shapes());

    // The absorbed border stretches the box over the whole 4x4 image,
    // which is larger than an eighth of it in both dimensions; the
    // pixel count is fine. Exactly one warning.
    let warnings = sink.warnings.borrow();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], Warning::OversizedShape { index: 1, .. }));
}

#[test]
fn two_shapes_split_by_vertical_border() {
    let rows = ["RR#GG", "RR#GG", "RR#GG"];
    let map = bitmap_from_rows(&rows);
    let (extraction, sink) = extract(&rows);

    // Each border pixel adopts its left neighbor, so the whole border
    // column joins the red shape.
    assert_eq!(extraction.shapes().len(), 2);
    let red = &extraction.shapes()[0];
    let green = &extraction.shapes()[1];

    assert_eq!(red.source_color(), RED);
    assert_eq!(red.pixel_count(), 9);
    assert_eq!(red.bounding_box().min, Point::new(0, 0));
    assert_eq!(red.bounding_box().max, Point::new(2, 2));

    assert_eq!(green.source_color(), GREEN);
    assert_eq!(green.pixel_count(), 6);
    assert_eq!(green.bounding_box().min, Point::new(3, 0));
    assert_eq!(green.bounding_box().max, Point::new(4, 2));

    assert_partition(&map, extraction.shapes());
    assert_eq!(sink.mixed_color_warnings(), 0);

    // Non-border pixels are discovered in raster order.
    assert_eq!(red.pixels()[0].point, Point::new(0, 0));
    assert_eq!(green.pixels()[0].point, Point::new(3, 0));
}

#[test]
fn ring_shape_absorbs_enclosed_border() {
    let rows = ["RRRRR", "R###R", "RRRRR"];
    let map = bitmap_from_rows(&rows);
    let (extraction, _sink) = extract(&rows);

    assert_eq!(extraction.shapes().len(), 1);
    assert_eq!(extraction.shapes()[0].pixel_count(), 15);
    assert_partition(&map, extraction.shapes());
}

#[test]
fn separately_labeled_arms_merge_into_one_shape() {
    // The two arms of the U get different provisional labels in the
    // scanning pass; the bottom row forces the merge.
    let rows = ["R#R", "RRR"];
    let map = bitmap_from_rows(&rows);
    let (extraction, _sink) = extract(&rows);

    assert_eq!(extraction.shapes().len(), 1);
    assert_eq!(extraction.shapes()[0].pixel_count(), 6);
    assert_partition(&map, extraction.shapes());
}

#[test]
fn border_only_image_is_fatal() {
    let map = bitmap_from_rows(&["###", "###", "###"]);
    let sink = RecordingSink::default();
    let mut assigner = ProvinceColorAssigner::new();

    let result = ShapeFinder::new(&map, &mut assigner)
        .with_sink(&sink)
        .find_all_shapes();

    assert!(matches!(result, Err(FinderError::BorderOnly { .. })));

    // One fatal event, and the run still reports done.
    assert_eq!(sink.errors.borrow().len(), 1);
    assert_eq!(sink.stages.borrow().last(), Some(&Stage::Done));
    assert!(!sink.stages.borrow().contains(&Stage::Validating));
}

#[test]
fn mixed_color_neighborhood_warns_and_splits() {
    let rows = ["RG"];
    let (extraction, sink) = extract(&rows);

    assert_eq!(extraction.shapes().len(), 2);
    assert_eq!(extraction.shapes()[0].pixel_count(), 1);
    assert_eq!(extraction.shapes()[1].pixel_count(), 1);
    assert_eq!(sink.mixed_color_warnings(), 1);

    // The offending neighbor is remembered.
    assert_eq!(extraction.problematic_pixels().len(), 1);
    assert_eq!(extraction.problematic_pixels()[0].point, Point::new(0, 0));
    assert_eq!(extraction.problematic_pixels()[0].color, RED);
}

#[test]
fn full_width_strip_warns_about_bounding_box() {
    // One red strip across the top of a 64x64 map; the rest is a green
    // province below a border row.
    let mut map = provmap_core::Bitmap::new(64, 64).unwrap();
    for x in 0..64 {
        map.set(x, 0, RED).unwrap();
    }
    for y in 2..64 {
        for x in 0..64 {
            map.set(x, y, GREEN).unwrap();
        }
    }

    let sink = RecordingSink::default();
    let mut assigner = ProvinceColorAssigner::new();
    let extraction = ShapeFinder::new(&map, &mut assigner)
        .with_sink(&sink)
        .find_all_shapes()
        .unwrap();

    // 64 wide > 64 / 8.
    let warnings = sink.warnings.borrow();
    assert!(warnings.iter().any(|w| matches!(
        w,
        Warning::OversizedShape {
            index: 1,
            width: 64,
            height: 1,
            ..
        }
    )));

    // The border row under the strip adopts upward into it.
    assert_eq!(extraction.shapes()[0].pixel_count(), 128);
    assert_partition(&map, extraction.shapes());
}

#[test]
fn labels_match_shapes_after_all_passes() {
    let rows = ["RR#GG", "RR#GG", "RR#GG"];
    let map = bitmap_from_rows(&rows);
    let (extraction, _sink) = extract(&rows);

    for shape in extraction.shapes() {
        for pixel in shape.pixels() {
            let label = extraction
                .labels()
                .get(pixel.point.x, pixel.point.y)
                .expect("pixel in bounds");
            let owner = extraction
                .shape_for_label(label)
                .expect("label maps to a shape");
            assert_eq!(owner.unique_color(), shape.unique_color());

            // Source-color homogeneity: a member pixel either has the
            // shape's color in the input or was an absorbed border.
            let input = map.color_at(pixel.point.x, pixel.point.y);
            assert!(input == shape.source_color() || input.is_border());
        }
    }

    // No pixel is left with the reserved label.
    assert!(extraction.labels().as_slice().iter().all(|&l| l != 0));
}

#[test]
fn bounding_boxes_are_tight() {
    let rows = ["####", "#RR#", "#RR#", "#G##"];
    let (extraction, _sink) = extract(&rows);

    for shape in extraction.shapes() {
        let min_x = shape.pixels().iter().map(|p| p.point.x).min().unwrap();
        let max_x = shape.pixels().iter().map(|p| p.point.x).max().unwrap();
        let min_y = shape.pixels().iter().map(|p| p.point.y).min().unwrap();
        let max_y = shape.pixels().iter().map(|p| p.point.y).max().unwrap();

        assert_eq!(shape.bounding_box().min, Point::new(min_x, min_y));
        assert_eq!(shape.bounding_box().max, Point::new(max_x, max_y));
    }
}

#[test]
fn runs_are_deterministic() {
    let rows = ["RR#GG", "R##BG", "RR#GG"];
    let (first, _) = extract(&rows);
    let (second, _) = extract(&rows);

    assert_eq!(first.shapes(), second.shapes());
    assert_eq!(first.labels(), second.labels());
}

#[test]
fn cancellation_stops_before_any_work() {
    let map = bitmap_from_rows(&["RR", "RR"]);
    let sink = RecordingSink::default();
    let mut assigner = ProvinceColorAssigner::new();
    let token = CancelToken::new();
    token.cancel();

    let result = ShapeFinder::new(&map, &mut assigner)
        .with_sink(&sink)
        .with_token(token)
        .find_all_shapes();

    assert_eq!(
        result.unwrap_err(),
        FinderError::Cancelled {
            stage: Stage::Scanning
        }
    );
    assert_eq!(sink.errors.borrow().len(), 1);
    assert_eq!(sink.stages.borrow().last(), Some(&Stage::Done));
}

#[test]
fn stages_are_reported_in_order() {
    let (_, sink) = extract(&["#R", "RR"]);

    assert_eq!(
        *sink.stages.borrow(),
        vec![
            Stage::Scanning,
            Stage::Resolving,
            Stage::Absorbing,
            Stage::Validating,
            Stage::Done,
        ]
    );
}

/// Keeps copies of the grids handed over at pass boundaries.
#[derive(Default)]
struct GrabbingDump {
    scanned: Option<LabelGrid>,
    resolved: Option<LabelGrid>,
}

impl StageDump for GrabbingDump {
    fn scanned(&mut self, labels: &LabelGrid) {
        self.scanned = Some(labels.clone());
    }

    fn resolved(&mut self, labels: &LabelGrid) {
        self.resolved = Some(labels.clone());
    }
}

#[test]
fn stage_dumps_see_both_label_grids() {
    let map = bitmap_from_rows(&["RR#GG", "RR#GG", "RR#GG"]);
    let mut assigner = ProvinceColorAssigner::new();
    let mut dump = GrabbingDump::default();

    let extraction = ShapeFinder::new(&map, &mut assigner)
        .with_stage_dump(&mut dump)
        .find_all_shapes()
        .unwrap();

    let scanned = dump.scanned.expect("scanned grid captured");
    let resolved = dump.resolved.expect("resolved grid captured");

    // Before absorption the border column is still unassigned.
    assert_eq!(scanned.get(2, 1), Some(0));
    assert_eq!(resolved.get(2, 1), Some(0));
    // Afterwards it belongs to the red shape.
    let red_label = extraction.labels().get(0, 0).unwrap();
    assert_eq!(extraction.labels().get(2, 1), Some(red_label));

    // Non-border labels are assigned in both snapshots.
    assert!(scanned.get(0, 0).unwrap() > 0);
    assert_eq!(resolved.get(0, 0), extraction.labels().get(0, 0));
}

#[test]
fn recolored_bitmap_uses_unique_colors() {
    let rows = ["RR#GG", "RR#GG", "RR#GG"];
    let (extraction, _sink) = extract(&rows);

    let recolored = extraction.render_unique_colors().unwrap();
    assert_eq!(recolored.width(), 5);
    assert_eq!(recolored.height(), 3);

    let red_unique = extraction.shapes()[0].unique_color();
    let green_unique = extraction.shapes()[1].unique_color();
    assert_ne!(red_unique, green_unique);
    assert!(!red_unique.is_border());

    assert_eq!(recolored.color_at(0, 0), red_unique);
    // The absorbed border column renders with its owner's color.
    assert_eq!(recolored.color_at(2, 1), red_unique);
    assert_eq!(recolored.color_at(4, 2), green_unique);
}
