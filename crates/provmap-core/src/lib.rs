//! provmap-core - Fundamental types for the provmap toolchain
//!
//! This crate defines the vocabulary shared by every other crate in the
//! workspace:
//!
//! - **Colors and geometry** - [`Color`], [`Point`], [`BoundingBox`]
//! - **Shapes** - [`Pixel`], [`Shape`], [`ShapeList`]
//! - **Pixel grids** - the [`PixelGrid`] trait and the owned [`Bitmap`]
//! - **Province records** - [`ProvinceType`], [`Province`]
//! - **Color assignment** - the [`ColorAssigner`] contract
//!
//! # Examples
//!
//! ```
//! use provmap_core::{Bitmap, Color, PixelGrid};
//!
//! let mut map = Bitmap::new(4, 4).unwrap();
//! map.set(1, 1, Color::new(255, 0, 0)).unwrap();
//!
//! assert_eq!(map.color_at(1, 1), Color::new(255, 0, 0));
//! assert_eq!(map.color_at(0, 0), Color::BORDER);
//! ```

mod assign;
mod color;
mod error;
mod geometry;
mod grid;
mod province;
mod shape;

pub use assign::ColorAssigner;
pub use color::Color;
pub use error::{Error, Result};
pub use geometry::{BoundingBox, Point};
pub use grid::{Bitmap, PixelGrid};
pub use province::{DEFAULT_TERRAINS, Province, ProvinceList, ProvinceType};
pub use shape::{Pixel, Shape, ShapeList};
