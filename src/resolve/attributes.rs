//! The flat attribute set produced for one area.

use serde::Serialize;
use std::collections::BTreeMap;

pub const LEFT: &str = "left";
pub const TOP: &str = "top";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const DATA_AUDIO_FILE: &str = "data-audio-file";
pub const DATA_TARGET_ID: &str = "data-target-id";
pub const DATA_PAGE_TRANSITION: &str = "data-page-transition";
pub const DATA_COLOR_MAP_COMPONENT_ID: &str = "data-color-map-component-id";
pub const HOVER_IMAGE_CLASS: &str = "hover-image-class";
pub const VISITED_IMAGE_CLASS: &str = "visited-image-class";

/// Geometry attributes in inline style order.
const STYLE_PROPERTIES: [&str; 4] = [TOP, LEFT, WIDTH, HEIGHT];

/// Attribute name to value, ready to be applied to markup.
///
/// Absent attributes are simply not in the map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PresentationAttributes {
    values: BTreeMap<String, String>,
}

impl PresentationAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Returns the value of `name`, if emitted.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterates over all attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Attributes that are not part of the inline style.
    pub fn data_attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(name, _)| name.starts_with("data-"))
    }

    /// Renders the geometry as an inline CSS declaration list,
    /// e.g. `top: 20%; left: 30%; width: 40%; height: 50%;`.
    pub fn inline_style(&self) -> String {
        STYLE_PROPERTIES
            .iter()
            .filter_map(|name| self.get(name).map(|value| format!("{}: {};", name, value)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn hover_image_class(&self) -> Option<&str> {
        self.get(HOVER_IMAGE_CLASS)
    }

    pub fn visited_image_class(&self) -> Option<&str> {
        self.get(VISITED_IMAGE_CLASS)
    }
}
