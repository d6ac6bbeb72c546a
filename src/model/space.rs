//! Coordinate space marker types.
//!
//! These are zero-sized types (ZSTs) used as type parameters to keep
//! pixel rectangles from the gesture layer apart from the persisted
//! percentage rectangles at compile time.

use std::fmt;

/// Marker type for pixel coordinates, relative to the container's
/// top-left corner at its current rendered size.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Marker type for percentage coordinates (0.0 to 100.0 of the container).
///
/// Percentages make an area resolution-independent: the same stored
/// rectangle fits the thumbnail preview and the full edit view.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Percent {}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Percent {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
