//! Stage-dump rendering
//!
//! Debug bitmaps of the label grid at pass boundaries. Every label is
//! rendered as the color whose channels are its three low bytes, so
//! the reserved border label 0 comes out as the border color and any
//! two labels below 2^24 get distinct colors, good enough to eyeball
//! mislabeled provinces.

use std::path::{Path, PathBuf};

use provmap_core::{Bitmap, Color};
use provmap_finder::{Label, LabelGrid, StageDump};

use crate::bmp;
use crate::error::IoResult;

/// File name of the label grid dumped after the scanning pass.
pub const LABELS1_FILENAME: &str = "labels1.bmp";

/// File name of the label grid dumped after the resolving pass.
pub const LABELS2_FILENAME: &str = "labels2.bmp";

/// The deterministic debug color for a label.
pub fn label_color(label: Label) -> Color {
    Color::from_rgb(label)
}

/// Render a label grid as a debug bitmap.
///
/// # Errors
///
/// Returns a core error if the grid has no pixels.
pub fn render_labels(labels: &LabelGrid) -> IoResult<Bitmap> {
    let pixels = labels.as_slice().iter().map(|&l| label_color(l)).collect();
    Ok(Bitmap::from_pixels(labels.width(), labels.height(), pixels)?)
}

/// Writes `labels1.bmp` / `labels2.bmp` into a directory as the finder
/// reaches its pass boundaries.
///
/// Dump callbacks cannot fail the run, so the first error is held back
/// until [`finish`](Self::finish).
#[derive(Debug)]
pub struct StageDumpWriter {
    dir: PathBuf,
    result: IoResult<()>,
}

impl StageDumpWriter {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            result: Ok(()),
        }
    }

    /// The first error encountered while writing, if any.
    ///
    /// # Errors
    ///
    /// Returns the held-back write error.
    pub fn finish(self) -> IoResult<()> {
        self.result
    }

    fn write(&mut self, filename: &str, labels: &LabelGrid) {
        if self.result.is_err() {
            return;
        }
        self.result = render_labels(labels)
            .and_then(|bitmap| bmp::write_bitmap(self.dir.join(filename), &bitmap));
    }
}

impl StageDump for StageDumpWriter {
    fn scanned(&mut self, labels: &LabelGrid) {
        self.write(LABELS1_FILENAME, labels);
    }

    fn resolved(&mut self, labels: &LabelGrid) {
        self.write(LABELS2_FILENAME, labels);
    }
}
