//! provmap-finder - Connected-component shape extraction
//!
//! This crate turns a province map into shapes. A shape is a maximal
//! 4-connected region of same-colored pixels; the black border pixels
//! separating regions are absorbed into a neighboring shape at the end
//! so that every pixel of the image belongs to exactly one shape.
//!
//! The pipeline is three raster passes plus a validation sweep, driven
//! by [`ShapeFinder`]:
//!
//! | Pass | Responsibility |
//! |---|---|
//! | Scanning | Assign provisional labels from the left/up neighbors; record label equivalences; collect border pixels |
//! | Resolving | Replace every label with its equivalence root; build one [`Shape`](provmap_core::Shape) per root |
//! | Absorbing | Merge each border pixel into an adjacent shape |
//! | Validating | Warn about undersized shapes and oversized bounding boxes |
//!
//! Progress, warnings and fatal conditions are reported through an
//! [`EventSink`]; a shared [`CancelToken`] stops a run between rows.
//!
//! # Examples
//!
//! ```
//! use provmap_color::ProvinceColorAssigner;
//! use provmap_core::{Bitmap, Color};
//! use provmap_finder::ShapeFinder;
//!
//! // A 3x3 map: one red province above a full-width border row,
//! // one green province below it.
//! let red = Color::new(255, 0, 0);
//! let green = Color::new(0, 255, 0);
//! let mut map = Bitmap::new(3, 3).unwrap();
//! for x in 0..3 {
//!     map.set(x, 0, red).unwrap();
//!     map.set(x, 2, green).unwrap();
//! }
//!
//! let mut assigner = ProvinceColorAssigner::new();
//! let extraction = ShapeFinder::new(&map, &mut assigner)
//!     .find_all_shapes()
//!     .unwrap();
//!
//! assert_eq!(extraction.shapes().len(), 2);
//! assert_eq!(extraction.shapes()[0].source_color(), red);
//! // The border row was absorbed; every pixel is accounted for.
//! let total: usize = extraction.shapes().iter().map(|s| s.pixel_count()).sum();
//! assert_eq!(total, 9);
//! ```

mod absorber;
mod equiv;
mod error;
mod events;
mod finder;
mod grid;
mod resolver;
mod scanner;
mod validator;

pub use error::{FinderError, FinderResult};
pub use events::{CancelToken, EventSink, NullSink, Stage, StageDump, TracingSink, Warning};
pub use finder::{Extraction, ShapeFinder};
pub use grid::{Label, LabelGrid};
pub use validator::MIN_SHAPE_SIZE;
