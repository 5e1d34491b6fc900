//! provmap-color - Province classification and unique-color assignment
//!
//! Two concerns live here:
//!
//! - [`classify`] decides what kind of province a source color denotes
//! - [`ProvinceColorAssigner`] issues the deterministic replacement
//!   colors used in the output bitmap and definition table
//!
//! # Examples
//!
//! ```
//! use provmap_color::{ProvinceColorAssigner, classify};
//! use provmap_core::{Color, ColorAssigner, ProvinceType};
//!
//! let sea = Color::new(20, 60, 200);
//! assert_eq!(classify(sea), ProvinceType::Sea);
//!
//! let mut assigner = ProvinceColorAssigner::new();
//! let first = assigner.assign(ProvinceType::Sea);
//! let second = assigner.assign(ProvinceType::Sea);
//! assert_ne!(first, second);
//! ```

mod assigner;
mod classify;
mod provinces;

pub use assigner::ProvinceColorAssigner;
pub use classify::classify;
pub use provinces::provinces_from_shapes;
