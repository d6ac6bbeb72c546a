//! Rectangles in left/top/width/height form.

use serde::{Deserialize, Serialize};

use super::coord::Position;
use super::{Percent, Pixel};

/// An axis-aligned rectangle given by its top-left corner and its size.
///
/// The `TSpace` parameter should be either [`Pixel`] or [`Percent`].
///
/// Construction does not clamp or reorder anything: areas may legitimately
/// reach past the container edge, and negative sizes are left for
/// validation to report.
#[derive(Clone, Copy, PartialEq)]
pub struct Rect<TSpace> {
    pub origin: Position<TSpace>,
    pub width: f64,
    pub height: f64,
}

impl<TSpace> Rect<TSpace> {
    /// Creates a rectangle from explicit left/top/width/height values.
    #[inline]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Position::new(left, top),
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.origin.left
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.origin.top
    }

    /// Returns the right edge (`left + width`).
    #[inline]
    pub fn right(&self) -> f64 {
        self.origin.left + self.width
    }

    /// Returns the bottom edge (`top + height`).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.origin.top + self.height
    }

    /// Returns true if all four values are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Returns true if width or height is negative.
    #[inline]
    pub fn has_negative_size(&self) -> bool {
        self.width < 0.0 || self.height < 0.0
    }

    /// Returns true if the rectangle is at least as tall as it is wide.
    #[inline]
    pub fn is_portrait(&self) -> bool {
        self.width <= self.height
    }

    /// Returns the same rectangle moved so its top-left corner is `origin`.
    #[inline]
    pub fn moved_to(&self, origin: Position<TSpace>) -> Self {
        Self {
            origin,
            width: self.width,
            height: self.height,
        }
    }
}

impl<TSpace> std::fmt::Debug for Rect<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rect")
            .field("left", &self.origin.left)
            .field("top", &self.origin.top)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl<TSpace> Default for Rect<TSpace> {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

// Custom serde implementation to avoid TSpace: Serialize/Deserialize bounds
impl<TSpace> Serialize for Rect<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Rect", 4)?;
        state.serialize_field("left", &self.origin.left)?;
        state.serialize_field("top", &self.origin.top)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.end()
    }
}

impl<'de, TSpace> Deserialize<'de> for Rect<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RectData {
            left: f64,
            top: f64,
            width: f64,
            height: f64,
        }
        let data = RectData::deserialize(deserializer)?;
        Ok(Rect::new(data.left, data.top, data.width, data.height))
    }
}

/// The pixel size of the container an area is laid out in, as currently
/// rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true if the container cannot be used as a divisor: a zero,
    /// negative or non-finite dimension.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// Conversion between pixel and percentage coordinates.
impl Rect<Pixel> {
    /// Converts a pixel rectangle to percentages of `container`.
    ///
    /// Returns `None` for a degenerate container instead of dividing by zero.
    pub fn to_percent(&self, container: ContainerSize) -> Option<Rect<Percent>> {
        if container.is_degenerate() {
            return None;
        }

        Some(Rect::new(
            self.left() / container.width * 100.0,
            self.top() / container.height * 100.0,
            self.width / container.width * 100.0,
            self.height / container.height * 100.0,
        ))
    }
}

impl Rect<Percent> {
    /// Converts a percentage rectangle to pixels of `container`.
    pub fn to_pixel(&self, container: ContainerSize) -> Rect<Pixel> {
        Rect::new(
            self.left() * container.width / 100.0,
            self.top() * container.height / 100.0,
            self.width * container.width / 100.0,
            self.height * container.height / 100.0,
        )
    }

    /// Returns true if no part of the rectangle overlaps the container box.
    pub fn is_outside_container(&self) -> bool {
        self.right() <= 0.0 || self.bottom() <= 0.0 || self.left() >= 100.0 || self.top() >= 100.0
    }
}
