//! Pointer gestures in pixel space.
//!
//! A gesture starts from the area's rendered pixel box and the pointer
//! position at grab time. Every later pointer frame produces a preview box
//! from the accumulated pointer delta; nothing here touches stored areas.

use std::fmt;
use std::str::FromStr;

use crate::model::{Pixel, Position, Rect};

/// One of the eight resize grips around an area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    N,
    E,
    S,
    W,
    NE,
    SE,
    SW,
    NW,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::N,
        ResizeHandle::E,
        ResizeHandle::S,
        ResizeHandle::W,
        ResizeHandle::NE,
        ResizeHandle::SE,
        ResizeHandle::SW,
        ResizeHandle::NW,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeHandle::N => "n",
            ResizeHandle::E => "e",
            ResizeHandle::S => "s",
            ResizeHandle::W => "w",
            ResizeHandle::NE => "ne",
            ResizeHandle::SE => "se",
            ResizeHandle::SW => "sw",
            ResizeHandle::NW => "nw",
        }
    }

    fn moves_north(&self) -> bool {
        matches!(self, ResizeHandle::N | ResizeHandle::NE | ResizeHandle::NW)
    }

    fn moves_south(&self) -> bool {
        matches!(self, ResizeHandle::S | ResizeHandle::SE | ResizeHandle::SW)
    }

    fn moves_east(&self) -> bool {
        matches!(self, ResizeHandle::E | ResizeHandle::NE | ResizeHandle::SE)
    }

    fn moves_west(&self) -> bool {
        matches!(self, ResizeHandle::W | ResizeHandle::NW | ResizeHandle::SW)
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeHandle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeHandle::ALL
            .into_iter()
            .find(|handle| handle.as_str() == s.trim())
            .ok_or_else(|| format!("unknown resize handle '{}'", s))
    }
}

/// What a gesture does to the area box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize(ResizeHandle),
}

/// An in-flight drag or resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub index: usize,
    pub kind: GestureKind,
    start: Rect<Pixel>,
    grab: Position<Pixel>,
    preview: Rect<Pixel>,
}

impl Gesture {
    pub(crate) fn new(
        index: usize,
        kind: GestureKind,
        start: Rect<Pixel>,
        grab: Position<Pixel>,
    ) -> Self {
        Self {
            index,
            kind,
            start,
            grab,
            preview: start,
        }
    }

    /// The box as it would be committed right now.
    pub fn preview(&self) -> Rect<Pixel> {
        self.preview
    }

    /// Updates the preview for a new pointer position.
    ///
    /// Non-finite pointer positions are ignored and keep the last preview.
    pub(crate) fn track(&mut self, pointer: Position<Pixel>) -> Rect<Pixel> {
        if !pointer.is_finite() {
            return self.preview;
        }

        let dx = pointer.left - self.grab.left;
        let dy = pointer.top - self.grab.top;

        self.preview = match self.kind {
            GestureKind::Drag => self.start.moved_to(Position::new(
                self.start.left() + dx,
                self.start.top() + dy,
            )),
            GestureKind::Resize(handle) => resize(self.start, handle, dx, dy),
        };
        self.preview
    }
}

/// Applies a pointer delta to the edges a handle controls.
///
/// Sizes never go below zero; a west or north edge dragged past the
/// opposite edge pins at it.
fn resize(start: Rect<Pixel>, handle: ResizeHandle, dx: f64, dy: f64) -> Rect<Pixel> {
    let (mut left, mut width) = (start.left(), start.width);
    let (mut top, mut height) = (start.top(), start.height);

    if handle.moves_east() {
        width = (start.width + dx).max(0.0);
    }
    if handle.moves_west() {
        width = (start.width - dx).max(0.0);
        left = start.right() - width;
    }
    if handle.moves_south() {
        height = (start.height + dy).max(0.0);
    }
    if handle.moves_north() {
        height = (start.height - dy).max(0.0);
        top = start.bottom() - height;
    }

    Rect::new(left, top, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Rect<Pixel> {
        Rect::new(100.0, 100.0, 200.0, 100.0)
    }

    #[test]
    fn test_drag_moves_without_resizing() {
        let mut gesture = Gesture::new(0, GestureKind::Drag, start(), Position::new(150.0, 150.0));
        let preview = gesture.track(Position::new(170.0, 140.0));
        assert_eq!(preview, Rect::new(120.0, 90.0, 200.0, 100.0));
    }

    #[test]
    fn test_resize_east_and_south() {
        let mut gesture = Gesture::new(
            0,
            GestureKind::Resize(ResizeHandle::SE),
            start(),
            Position::new(300.0, 200.0),
        );
        let preview = gesture.track(Position::new(320.0, 250.0));
        assert_eq!(preview, Rect::new(100.0, 100.0, 220.0, 150.0));
    }

    #[test]
    fn test_resize_north_west_keeps_far_edges() {
        let mut gesture = Gesture::new(
            0,
            GestureKind::Resize(ResizeHandle::NW),
            start(),
            Position::new(100.0, 100.0),
        );
        let preview = gesture.track(Position::new(80.0, 110.0));
        assert_eq!(preview, Rect::new(80.0, 110.0, 220.0, 90.0));
        assert_eq!(preview.right(), start().right());
        assert_eq!(preview.bottom(), start().bottom());
    }

    #[test]
    fn test_resize_never_goes_negative() {
        let mut gesture = Gesture::new(
            0,
            GestureKind::Resize(ResizeHandle::W),
            start(),
            Position::new(100.0, 150.0),
        );
        let preview = gesture.track(Position::new(500.0, 150.0));
        assert_eq!(preview.width, 0.0);
        assert_eq!(preview.left(), start().right());
    }

    #[test]
    fn test_non_finite_pointer_keeps_preview() {
        let mut gesture = Gesture::new(0, GestureKind::Drag, start(), Position::new(0.0, 0.0));
        gesture.track(Position::new(10.0, 10.0));
        let preview = gesture.track(Position::new(f64::NAN, 10.0));
        assert_eq!(preview, Rect::new(110.0, 110.0, 200.0, 100.0));
    }

    #[test]
    fn test_handle_parsing() {
        assert_eq!("ne".parse::<ResizeHandle>(), Ok(ResizeHandle::NE));
        assert_eq!(" s ".parse::<ResizeHandle>(), Ok(ResizeHandle::S));
        assert!("x".parse::<ResizeHandle>().is_err());
    }
}
