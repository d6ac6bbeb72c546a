//! Typed positions using PhantomData for compile-time safety.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// A 2D position with a type-level marker for the coordinate space.
///
/// Drag previews report `Position<Pixel>` values; they are never written
/// into the stored area.
#[derive(Clone, Copy, PartialEq)]
pub struct Position<TSpace> {
    pub left: f64,
    pub top: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> Position<TSpace> {
    /// Creates a new position.
    #[inline]
    pub fn new(left: f64, top: f64) -> Self {
        Self {
            left,
            top,
            _space: PhantomData,
        }
    }

    /// Returns true if both components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.top.is_finite()
    }
}

impl<TSpace> std::fmt::Debug for Position<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Position")
            .field("left", &self.left)
            .field("top", &self.top)
            .finish()
    }
}

impl<TSpace> Default for Position<TSpace> {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

// Custom serde implementation to avoid TSpace: Serialize/Deserialize bounds
impl<TSpace> Serialize for Position<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Position", 2)?;
        state.serialize_field("left", &self.left)?;
        state.serialize_field("top", &self.top)?;
        state.end()
    }
}

impl<'de, TSpace> Deserialize<'de> for Position<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct PositionData {
            left: f64,
            top: f64,
        }
        let data = PositionData::deserialize(deserializer)?;
        Ok(Position::new(data.left, data.top))
    }
}
