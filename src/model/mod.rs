//! Data model for linkmap pages.
//!
//! This module defines the persisted shape of a linkmap page: its
//! [`Configuration`] with image and masking settings, and the ordered
//! [`Area`] list whose geometry is kept in container-relative percentages.
//!
//! # Design Principles
//!
//! 1. **Type Safety**: Marker types keep pixel rectangles from the gesture
//!    layer apart from stored percentage rectangles.
//!
//! 2. **Resolution Independence**: Stored geometry never depends on the
//!    size the container happens to be rendered at.
//!
//! 3. **Permissive Construction**: Out-of-range geometry, unknown enum
//!    values and malformed tokens are representable, so stored data always
//!    loads and validation can report problems.
//!
//! # Example
//!
//! ```
//! use linkmap::model::{Area, Configuration, FileId};
//!
//! let mut config = Configuration::new();
//! config.hover_image_id = Some(FileId(5));
//! config.areas.push(Area::new(10.0, 20.0, 30.0, 40.0).with_page_target(10u64, None));
//! ```

mod area;
mod configuration;
mod coord;
mod ids;
pub mod io_json;
mod lenient;
mod rect;
mod space;
mod token;

// Re-export core types for convenient access
pub use area::{Area, TargetType, DEFAULT_AREA_SIZE};
pub use configuration::{BackgroundType, Configuration};
pub use coord::Position;
pub use ids::{FileId, SiteId, TargetId};
pub use rect::{ContainerSize, Rect};
pub use space::{Percent, Pixel};
pub use token::ComponentToken;
