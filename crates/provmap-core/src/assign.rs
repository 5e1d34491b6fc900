//! Color assignment contract

use crate::color::Color;
use crate::province::ProvinceType;

/// Maps source colors to deterministic replacement colors.
///
/// The engine calls [`classify`] and [`assign`] once per discovered
/// shape. Two runs over the same image with identically initialised
/// assigners must produce identical colors.
///
/// [`classify`]: ColorAssigner::classify
/// [`assign`]: ColorAssigner::assign
pub trait ColorAssigner {
    /// Classify a source color. Must be deterministic.
    fn classify(&self, color: Color) -> ProvinceType;

    /// Issue the next replacement color for `kind`.
    ///
    /// Every call returns a color that no previous call has issued
    /// since construction or the last [`reset`](ColorAssigner::reset),
    /// regardless of kind, and never [`Color::BORDER`].
    fn assign(&mut self, kind: ProvinceType) -> Color;

    /// Restart the sequence for a new run.
    fn reset(&mut self);
}
