//! Hotspot areas and their link targets.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{FileId, TargetId};
use super::lenient::null_as_default;
use super::rect::Rect;
use super::space::Percent;
use super::token::non_blank;
use crate::marker::{Highlight, Marker};

/// Default geometry for a freshly added area, in percent.
pub const DEFAULT_AREA_SIZE: f64 = 20.0;

/// What an area links to.
///
/// Unrecognized values read from stored configurations are kept verbatim
/// in [`TargetType::Other`] so they survive a save.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum TargetType {
    /// Another page of the same entry.
    Page,
    /// An audio file played when the area is activated.
    AudioFile,
    /// No link target.
    #[default]
    None,
    /// A value this crate does not know about.
    Other(String),
}

impl TargetType {
    pub fn as_str(&self) -> &str {
        match self {
            TargetType::Page => "page",
            TargetType::AudioFile => "audio_file",
            TargetType::None => "none",
            TargetType::Other(other) => other,
        }
    }

    /// Returns true if the variant is one of the known target types.
    pub fn is_known(&self) -> bool {
        !matches!(self, TargetType::Other(_))
    }
}

impl From<String> for TargetType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "page" => TargetType::Page,
            "audio_file" => TargetType::AudioFile,
            "none" => TargetType::None,
            _ => TargetType::Other(value),
        }
    }
}

/// `null` reads as the default; an empty string is kept as is.
impl From<Option<String>> for TargetType {
    fn from(value: Option<String>) -> Self {
        value.map(TargetType::from).unwrap_or_default()
    }
}

impl From<TargetType> for String {
    fn from(value: TargetType) -> Self {
        match value {
            TargetType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hotspot rectangle overlaid on a page's background.
///
/// Geometry is stored as percentages of the container box. Values outside
/// `0..=100` are allowed; an area may hang over the container edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Area {
    #[serde(default, deserialize_with = "null_as_default")]
    pub left: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub top: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub width: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub height: f64,

    #[serde(default)]
    pub target_type: TargetType,

    /// Page or audio file id. Ignored when `target_type` is `none`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<TargetId>,

    /// Transition style token, only meaningful for page targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_transition: Option<String>,

    #[serde(default)]
    pub marker: Marker,

    /// `"<fileId>:<component>"` reference into the color map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_map_component_id: Option<String>,

    /// Legacy spelling of `color_map_component_id`, still found in stored data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_perma_id: Option<String>,

    /// Audio file driving the inline player controls of this area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file_id: Option<FileId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_description: Option<String>,

    /// Transient hover highlight; never persisted.
    #[serde(skip)]
    pub highlight: Highlight,
}

impl Default for Area {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: DEFAULT_AREA_SIZE,
            height: DEFAULT_AREA_SIZE,
            target_type: TargetType::None,
            target_id: None,
            page_transition: None,
            marker: Marker::NoMarker,
            color_map_component_id: None,
            mask_perma_id: None,
            audio_file_id: None,
            link_title: None,
            link_description: None,
            highlight: Highlight::default(),
        }
    }
}

impl Area {
    /// Creates an unlinked area with the given geometry.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            ..Default::default()
        }
    }

    /// Links the area to a page, optionally with a transition.
    pub fn with_page_target(
        mut self,
        page_id: impl Into<TargetId>,
        transition: Option<&str>,
    ) -> Self {
        self.target_type = TargetType::Page;
        self.target_id = Some(page_id.into());
        self.page_transition = transition.map(str::to_string);
        self
    }

    /// Links the area to an audio file.
    pub fn with_audio_target(mut self, audio_file_id: impl Into<TargetId>) -> Self {
        self.target_type = TargetType::AudioFile;
        self.target_id = Some(audio_file_id.into());
        self.page_transition = None;
        self
    }

    /// Sets the color map component reference.
    pub fn with_color_map_component(mut self, token: impl Into<String>) -> Self {
        self.color_map_component_id = Some(token.into());
        self
    }

    /// Sets the legacy mask perma id.
    pub fn with_mask_perma_id(mut self, token: impl Into<String>) -> Self {
        self.mask_perma_id = Some(token.into());
        self
    }

    /// Returns the stored geometry as a percentage rectangle.
    pub fn rect(&self) -> Rect<Percent> {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    /// Replaces all four geometry values at once.
    pub fn set_rect(&mut self, rect: Rect<Percent>) {
        self.left = rect.left();
        self.top = rect.top();
        self.width = rect.width;
        self.height = rect.height;
    }

    /// Returns the component token that drives masking.
    ///
    /// `color_map_component_id` wins over the legacy `mask_perma_id`;
    /// blank values count as absent.
    pub fn effective_component_token(&self) -> Option<&str> {
        non_blank(self.color_map_component_id.as_deref())
            .or_else(|| non_blank(self.mask_perma_id.as_deref()))
    }

    /// Returns the editor path for the area at `index`.
    ///
    /// Areas with an unrecognized target type have no editor.
    pub fn edit_path(&self, index: usize) -> Option<String> {
        if self.target_type.is_known() {
            Some(format!("/linkmap_areas/{}", index))
        } else {
            None
        }
    }
}
