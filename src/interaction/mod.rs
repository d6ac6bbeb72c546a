//! Drag and resize editing of areas.
//!
//! The [`AreaEditor`] turns pointer gestures over a container of some
//! current pixel size into stored percentage geometry. Intermediate pointer
//! frames only move a pixel preview; the stored area is written once, when
//! the gesture stops, as a single four-field replacement. That one write is
//! announced as [`AreaEvent::Committed`] on the editor's [`EventBus`].
//!
//! Enabling and disabling editing is a mode flag on the same editor and its
//! subscriptions; nothing is torn down or rebuilt.

mod events;
mod gesture;

pub use events::{AreaEvent, EventBus, Persistence, SaveLog, SubscriptionId};
pub use gesture::{Gesture, GestureKind, ResizeHandle};

use crate::model::{Area, Configuration, ContainerSize, Percent, Pixel, Position, Rect};

/// Result of stopping a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CommitOutcome {
    /// The area now holds `rect`.
    Committed { index: usize, rect: Rect<Percent> },
    /// The container had a zero or unusable dimension; the area is unchanged.
    DegenerateContainer { index: usize },
    /// The gesture's area no longer exists; nothing was written.
    MissingArea { index: usize },
    /// No gesture was in progress.
    NoGesture,
}

/// Gesture handling for the areas of one page.
#[derive(Debug)]
pub struct AreaEditor {
    editable: bool,
    gesture: Option<Gesture>,
    bus: EventBus,
}

impl AreaEditor {
    pub fn new(editable: bool) -> Self {
        Self {
            editable,
            gesture: None,
            bus: EventBus::new(),
        }
    }

    /// Creates an editor following the page's `areas_editable` flag.
    pub fn for_configuration(config: &Configuration) -> Self {
        Self::new(config.areas_editable)
    }

    pub fn events(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Switches gesture initiation on or off.
    ///
    /// Disabling while a gesture is in flight aborts it without committing.
    pub fn set_editable(&mut self, editable: bool) {
        if self.editable == editable {
            return;
        }
        tracing::debug!(editable, "area editing mode changed");
        self.editable = editable;

        if !editable {
            self.abort();
        }
    }

    /// The gesture currently in progress, if any.
    pub fn active_gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Starts dragging area `index`, rendered at `start`, grabbed at `pointer`.
    ///
    /// Returns false if editing is disabled or another gesture is running.
    pub fn begin_drag(
        &mut self,
        index: usize,
        start: Rect<Pixel>,
        pointer: Position<Pixel>,
    ) -> bool {
        self.begin(index, GestureKind::Drag, start, pointer)
    }

    /// Starts resizing area `index` from one of its grips.
    ///
    /// Returns false if editing is disabled or another gesture is running.
    pub fn begin_resize(
        &mut self,
        index: usize,
        handle: ResizeHandle,
        start: Rect<Pixel>,
        pointer: Position<Pixel>,
    ) -> bool {
        self.begin(index, GestureKind::Resize(handle), start, pointer)
    }

    fn begin(
        &mut self,
        index: usize,
        kind: GestureKind,
        start: Rect<Pixel>,
        pointer: Position<Pixel>,
    ) -> bool {
        if !self.editable {
            tracing::trace!(index, "gesture ignored: areas are not editable");
            return false;
        }
        if self.gesture.is_some() {
            tracing::trace!(index, "gesture ignored: another gesture is in progress");
            return false;
        }

        tracing::debug!(index, ?kind, ?start, "gesture started");
        self.gesture = Some(Gesture::new(index, kind, start, pointer));
        self.bus.emit(AreaEvent::GestureStarted { index, kind });
        true
    }

    /// Feeds a pointer frame to the running gesture and returns the preview.
    ///
    /// Drag frames also publish the preview's pixel position so a hover
    /// image can follow the cursor.
    pub fn pointer_moved(&mut self, pointer: Position<Pixel>) -> Option<Rect<Pixel>> {
        let gesture = self.gesture.as_mut()?;
        let preview = gesture.track(pointer);
        let (index, kind) = (gesture.index, gesture.kind);

        tracing::trace!(index, ?preview, "gesture frame");
        if kind == GestureKind::Drag {
            self.bus.emit(AreaEvent::PreviewMoved {
                index,
                position: preview.origin,
            });
        }
        Some(preview)
    }

    /// Ends the gesture and writes its preview into `areas[index]` as
    /// percentages of `container`.
    pub fn stop(&mut self, areas: &mut [Area], container: ContainerSize) -> CommitOutcome {
        let Some(gesture) = self.gesture.take() else {
            return CommitOutcome::NoGesture;
        };
        let index = gesture.index;

        let outcome = match (areas.get_mut(index), gesture.preview().to_percent(container)) {
            (None, _) => {
                tracing::warn!(index, "gesture stopped on a removed area");
                self.bus.emit(AreaEvent::Aborted { index });
                CommitOutcome::MissingArea { index }
            }
            (Some(_), None) => {
                tracing::debug!(index, ?container, "skipping commit for degenerate container");
                self.bus.emit(AreaEvent::Aborted { index });
                CommitOutcome::DegenerateContainer { index }
            }
            (Some(area), Some(rect)) => {
                area.set_rect(rect);
                tracing::debug!(index, ?rect, "area geometry committed");
                self.bus.emit(AreaEvent::Committed { index, rect });
                CommitOutcome::Committed { index, rect }
            }
        };

        self.bus.emit(AreaEvent::GestureEnded { index });
        outcome
    }

    /// Cancels the gesture in progress without writing anything.
    pub fn abort(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            let index = gesture.index;
            tracing::debug!(index, "gesture aborted");
            self.bus.emit(AreaEvent::Aborted { index });
            self.bus.emit(AreaEvent::GestureEnded { index });
        }
    }
}
