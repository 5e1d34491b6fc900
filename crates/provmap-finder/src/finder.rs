//! Shape-finder orchestration

use std::collections::HashMap;

use provmap_core::{Bitmap, Color, ColorAssigner, Pixel, PixelGrid, Shape, ShapeList};

use crate::absorber;
use crate::error::FinderResult;
use crate::events::{CancelToken, EventSink, NullSink, Stage, StageDump};
use crate::grid::{Label, LabelGrid};
use crate::resolver::{self, ResolveOutput};
use crate::scanner::{self, ScanOutput};
use crate::validator;

static NULL_SINK: NullSink = NullSink;

/// Runs the extraction pipeline over one image.
///
/// A finder is single-use: [`find_all_shapes`](Self::find_all_shapes)
/// consumes it. Observation hooks are optional and attached with the
/// builder methods; by default events are discarded and nothing is
/// dumped.
///
/// The input grid must not change during the run, and the assigner is
/// borrowed exclusively; the engine itself is strictly
/// single-threaded. To stop a run from another thread, keep a clone of
/// the [`CancelToken`] (see [`cancel_token`](Self::cancel_token)) and
/// cancel it; the engine returns at the next row boundary without
/// exposing partial results.
pub struct ShapeFinder<'a, G: PixelGrid> {
    grid: &'a G,
    assigner: &'a mut dyn ColorAssigner,
    sink: &'a dyn EventSink,
    dump: Option<&'a mut dyn StageDump>,
    token: CancelToken,
}

impl<'a, G: PixelGrid> ShapeFinder<'a, G> {
    pub fn new(grid: &'a G, assigner: &'a mut dyn ColorAssigner) -> Self {
        Self {
            grid,
            assigner,
            sink: &NULL_SINK,
            dump: None,
            token: CancelToken::new(),
        }
    }

    /// Report events to `sink`.
    pub fn with_sink(mut self, sink: &'a dyn EventSink) -> Self {
        self.sink = sink;
        self
    }

    /// Hand the label grid to `dump` at pass boundaries.
    pub fn with_stage_dump(mut self, dump: &'a mut dyn StageDump) -> Self {
        self.dump = Some(dump);
        self
    }

    /// Use an existing cancel token instead of a fresh one.
    pub fn with_token(mut self, token: CancelToken) -> Self {
        self.token = token;
        self
    }

    /// A clone of the cooperative stop switch for this run.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Run all passes and return the extraction.
    ///
    /// Stages are reported in order (`scanning`, `resolving`,
    /// `absorbing`, `validating`, `done`); `done` is reported even
    /// when the run fails.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::BorderOnly`](crate::FinderError::BorderOnly)
    /// when a border pixel has no shape to join (the whole image is
    /// border-colored), or
    /// [`FinderError::Cancelled`](crate::FinderError::Cancelled) when
    /// the token was set. The error is also delivered through
    /// [`EventSink::error`] before the `done` stage.
    pub fn find_all_shapes(mut self) -> FinderResult<Extraction> {
        let result = self.run();
        if let Err(error) = &result {
            self.sink.error(error);
        }
        self.sink.stage(Stage::Done);
        result
    }

    fn run(&mut self) -> FinderResult<Extraction> {
        self.sink.stage(Stage::Scanning);
        let ScanOutput {
            mut labels,
            equiv,
            border,
            problematic,
        } = scanner::scan(self.grid, self.sink, &self.token)?;
        if let Some(dump) = self.dump.as_mut() {
            dump.scanned(&labels);
        }

        self.sink.stage(Stage::Resolving);
        let ResolveOutput { mut shapes, index } = resolver::resolve(
            self.grid,
            &mut labels,
            &equiv,
            &mut *self.assigner,
            self.sink,
            &self.token,
        )?;
        // The equivalence set is dead weight from here on.
        drop(equiv);
        if let Some(dump) = self.dump.as_mut() {
            dump.resolved(&labels);
        }

        self.sink.stage(Stage::Absorbing);
        absorber::absorb(&mut labels, &mut shapes, &index, &border, &self.token)?;

        self.sink.stage(Stage::Validating);
        validator::validate(self.grid.width(), self.grid.height(), &shapes, self.sink);

        Ok(Extraction {
            shapes,
            labels,
            index,
            problematic_pixels: problematic,
        })
    }
}

/// Everything a successful run produces.
///
/// After the run, every pixel of the input belongs to exactly one
/// shape and the label grid maps each pixel position to the root label
/// of that shape.
#[derive(Debug, Clone)]
pub struct Extraction {
    shapes: ShapeList,
    labels: LabelGrid,
    index: HashMap<Label, usize>,
    problematic_pixels: Vec<Pixel>,
}

impl Extraction {
    /// The extracted shapes, in discovery order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Consume the extraction, keeping only the shape list.
    pub fn into_shapes(self) -> ShapeList {
        self.shapes
    }

    /// The resolved label grid.
    pub fn labels(&self) -> &LabelGrid {
        &self.labels
    }

    /// Pixels that had a mixed-color neighborhood during scanning.
    pub fn problematic_pixels(&self) -> &[Pixel] {
        &self.problematic_pixels
    }

    /// The shape owning `label`, if the label is a root.
    pub fn shape_for_label(&self, label: Label) -> Option<&Shape> {
        self.index.get(&label).map(|&i| &self.shapes[i])
    }

    /// Render the map with every pixel replaced by its shape's unique
    /// color.
    ///
    /// # Errors
    ///
    /// Returns a core error if the label grid has no pixels (an empty
    /// input grid).
    pub fn render_unique_colors(&self) -> provmap_core::Result<Bitmap> {
        let pixels = self
            .labels
            .as_slice()
            .iter()
            .map(|&label| {
                self.shape_for_label(label)
                    .map_or(Color::BORDER, Shape::unique_color)
            })
            .collect();
        Bitmap::from_pixels(self.labels.width(), self.labels.height(), pixels)
    }
}
