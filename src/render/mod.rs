//! Rendering adapters for resolved areas.
//!
//! - [`html`]: markup of the published page
//! - [`editor`]: overlay state of areas in the page editor
//! - [`listing`]: sidebar entries for file areas and sites

pub mod editor;
pub mod html;
pub mod listing;

pub use editor::EditorAreaView;
pub use html::{render_area, render_areas_div};
pub use listing::{file_area_items, site_items, FileAreaItem, SiteItem};
