//! Change notifications emitted by the area editor.
//!
//! Collaborators subscribe explicitly instead of listening to implicit
//! attribute change events: the persistence layer saves on
//! [`AreaEvent::Committed`], the page view re-renders, and a hover image
//! preview can follow [`AreaEvent::PreviewMoved`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::gesture::GestureKind;
use crate::model::{Area, Percent, Pixel, Position, Rect};

/// Something that happened to an area during editing.
#[derive(Clone, Debug, PartialEq)]
pub enum AreaEvent {
    /// A drag or resize began. Hosts suspend page scrolling until
    /// [`AreaEvent::GestureEnded`].
    GestureStarted { index: usize, kind: GestureKind },
    /// Live pixel position of a dragged area. Best effort, never persisted.
    PreviewMoved {
        index: usize,
        position: Position<Pixel>,
    },
    /// The area's geometry was replaced with `rect`.
    Committed { index: usize, rect: Rect<Percent> },
    /// A gesture ended without changing the stored area.
    Aborted { index: usize },
    /// The gesture is over, whether it committed or not.
    GestureEnded { index: usize },
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&AreaEvent)>;

/// Single-threaded fan-out of [`AreaEvent`]s, delivered in subscription order.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback for every event.
    pub fn subscribe(&mut self, callback: impl FnMut(&AreaEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Registers a persistence collaborator that saves every commit.
    pub fn subscribe_persistence<P>(&mut self, mut store: P) -> SubscriptionId
    where
        P: Persistence + 'static,
    {
        self.subscribe(move |event| {
            if let AreaEvent::Committed { index, rect } = event {
                store.save(*index, *rect);
            }
        })
    }

    /// Removes a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn emit(&mut self, event: AreaEvent) {
        for (_, callback) in &mut self.subscribers {
            callback(&event);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// The storage side of a committed change.
///
/// Debouncing and ordering of saves are the implementor's business.
pub trait Persistence {
    fn save(&mut self, index: usize, rect: Rect<Percent>);
}

impl<P: Persistence> Persistence for Rc<RefCell<P>> {
    fn save(&mut self, index: usize, rect: Rect<Percent>) {
        self.borrow_mut().save(index, rect);
    }
}

/// A persistence collaborator that records saves in memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SaveLog {
    pub saves: Vec<(usize, Rect<Percent>)>,
}

impl Persistence for SaveLog {
    fn save(&mut self, index: usize, rect: Rect<Percent>) {
        self.saves.push((index, rect));
    }
}

impl SaveLog {
    /// Applies every recorded save to `areas`, in order.
    ///
    /// Saves for indices that no longer exist are skipped.
    pub fn replay(&self, areas: &mut [Area]) {
        for (index, rect) in &self.saves {
            if let Some(area) = areas.get_mut(*index) {
                area.set_rect(*rect);
            }
        }
    }
}
