//! Page-level linkmap configuration.
//!
//! One configuration exists per page. It carries the image and masking
//! settings shared by all areas plus the ordered area list. The position of
//! an area in that list is its ordinal index.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::area::Area;
use super::ids::FileId;
use super::lenient::null_as_default;

/// The kind of background a linkmap page displays.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum BackgroundType {
    /// A (possibly panoramic) still image.
    #[default]
    Image,
    /// A video that plays while an area is hovered.
    HoverVideo,
    /// Any other background kind.
    Other(String),
}

impl BackgroundType {
    pub fn as_str(&self) -> &str {
        match self {
            BackgroundType::Image => "image",
            BackgroundType::HoverVideo => "hover_video",
            BackgroundType::Other(other) => other,
        }
    }
}

impl From<String> for BackgroundType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "image" => BackgroundType::Image,
            "hover_video" => BackgroundType::HoverVideo,
            _ => BackgroundType::Other(value),
        }
    }
}

/// `null` reads as the default; an empty string is kept as is.
impl From<Option<String>> for BackgroundType {
    fn from(value: Option<String>) -> Self {
        value.map(BackgroundType::from).unwrap_or_default()
    }
}

impl From<BackgroundType> for String {
    fn from(value: BackgroundType) -> Self {
        match value {
            BackgroundType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BackgroundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The linkmap settings of one page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_image_id: Option<FileId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visited_image_id: Option<FileId>,

    #[serde(
        default,
        rename = "linkmap_masked_hover_image_id",
        alias = "masked_hover_image_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub masked_hover_image_id: Option<FileId>,

    #[serde(
        default,
        rename = "linkmap_masked_visited_image_id",
        alias = "masked_visited_image_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub masked_visited_image_id: Option<FileId>,

    /// The color map that component tokens must reference to be honored.
    #[serde(
        default,
        rename = "linkmap_color_map_file_id",
        alias = "color_map_file_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub color_map_file_id: Option<FileId>,

    #[serde(default)]
    pub background_type: BackgroundType,

    /// Editor flag: whether areas can be dragged and resized.
    #[serde(default = "default_areas_editable", deserialize_with = "editable_or_default")]
    pub areas_editable: bool,

    #[serde(
        default,
        rename = "linkmap_areas",
        alias = "areas",
        deserialize_with = "null_as_default"
    )]
    pub areas: Vec<Area>,
}

fn default_areas_editable() -> bool {
    true
}

fn editable_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_areas_editable))
}

/// An empty page with editable areas, the same as a page read from `{}`.
impl Default for Configuration {
    fn default() -> Self {
        Self {
            hover_image_id: None,
            visited_image_id: None,
            masked_hover_image_id: None,
            masked_visited_image_id: None,
            color_map_file_id: None,
            background_type: BackgroundType::default(),
            areas_editable: default_areas_editable(),
            areas: Vec::new(),
        }
    }
}

impl Configuration {
    /// Creates an empty configuration with editable areas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an unlinked area with default geometry and returns its index.
    pub fn add_area(&mut self) -> usize {
        self.areas.push(Area::default());
        self.areas.len() - 1
    }

    /// Removes and returns the area at `index`, if any.
    ///
    /// Later areas shift down by one, which changes their ordinal index.
    pub fn remove_area(&mut self, index: usize) -> Option<Area> {
        if index < self.areas.len() {
            Some(self.areas.remove(index))
        } else {
            None
        }
    }

    /// Moves the area at `from` so that it ends up at `to`.
    ///
    /// Returns false and leaves the list untouched if either index is out
    /// of range.
    pub fn move_area(&mut self, from: usize, to: usize) -> bool {
        if from >= self.areas.len() || to >= self.areas.len() {
            return false;
        }
        let area = self.areas.remove(from);
        self.areas.insert(to, area);
        true
    }

    /// Returns true if color map resolution is skipped for this page.
    pub fn suppresses_color_map(&self) -> bool {
        self.background_type == BackgroundType::HoverVideo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TargetType;

    #[test]
    fn test_configuration_from_stored_names() {
        let json = r#"{
            "hover_image_id": 5,
            "linkmap_masked_hover_image_id": 7,
            "linkmap_color_map_file_id": 3,
            "background_type": "hover_video",
            "linkmap_areas": [{"left": 10, "target_type": "page", "target_id": 4}]
        }"#;
        let config: Configuration = serde_json::from_str(json).unwrap();

        assert_eq!(config.hover_image_id, Some(FileId(5)));
        assert_eq!(config.masked_hover_image_id, Some(FileId(7)));
        assert_eq!(config.color_map_file_id, Some(FileId(3)));
        assert_eq!(config.background_type, BackgroundType::HoverVideo);
        assert!(config.areas_editable);
        assert_eq!(config.areas.len(), 1);
        assert_eq!(config.areas[0].target_type, TargetType::Page);
    }

    #[test]
    fn test_configuration_accepts_short_aliases() {
        let json = r#"{"color_map_file_id": 3, "areas": [{}]}"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        assert_eq!(config.color_map_file_id, Some(FileId(3)));
        assert_eq!(config.areas.len(), 1);
    }

    #[test]
    fn test_unknown_background_type_roundtrips() {
        let config: Configuration =
            serde_json::from_str(r#"{"background_type": "panorama_video"}"#).unwrap();
        assert_eq!(
            config.background_type,
            BackgroundType::Other("panorama_video".into())
        );
        assert!(!config.suppresses_color_map());
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"panorama_video\""));
    }

    #[test]
    fn test_default_matches_empty_stored_page() {
        let stored: Configuration = serde_json::from_str("{}").unwrap();
        assert!(Configuration::default().areas_editable);
        assert_eq!(Configuration::default(), stored);
        assert_eq!(Configuration::default(), Configuration::new());
    }

    #[test]
    fn test_nulls_and_string_ids_load() {
        let json = r#"{
            "hover_image_id": "5",
            "linkmap_color_map_file_id": null,
            "background_type": null,
            "areas_editable": null,
            "linkmap_areas": [{
                "left": null,
                "top": 12,
                "marker": null,
                "target_type": null,
                "target_id": "10",
                "audio_file_id": "25"
            }]
        }"#;
        let config: Configuration = serde_json::from_str(json).unwrap();

        assert_eq!(config.hover_image_id, Some(FileId(5)));
        assert_eq!(config.color_map_file_id, None);
        assert_eq!(config.background_type, BackgroundType::Image);
        assert!(config.areas_editable);

        let area = &config.areas[0];
        assert_eq!(area.left, 0.0);
        assert_eq!(area.top, 12.0);
        assert_eq!(area.marker, crate::marker::Marker::NoMarker);
        assert_eq!(area.target_type, TargetType::None);
        assert_eq!(area.target_id, Some(10u64.into()));
        assert_eq!(area.audio_file_id, Some(FileId(25)));
    }

    #[test]
    fn test_null_area_list_loads_empty() {
        let config: Configuration = serde_json::from_str(r#"{"linkmap_areas": null}"#).unwrap();
        assert!(config.areas.is_empty());
    }

    #[test]
    fn test_empty_background_type_is_kept() {
        let config: Configuration =
            serde_json::from_str(r#"{"background_type": ""}"#).unwrap();
        assert_eq!(config.background_type, BackgroundType::Other(String::new()));
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""background_type":"""#));
    }

    #[test]
    fn test_area_lifecycle() {
        let mut config = Configuration::new();
        assert_eq!(config.add_area(), 0);
        assert_eq!(config.add_area(), 1);
        config.areas[1].left = 50.0;

        assert!(config.move_area(1, 0));
        assert_eq!(config.areas[0].left, 50.0);
        assert!(!config.move_area(0, 5));

        let removed = config.remove_area(0).unwrap();
        assert_eq!(removed.left, 50.0);
        assert_eq!(config.areas.len(), 1);
        assert!(config.remove_area(3).is_none());
    }

    #[test]
    fn test_added_area_defaults() {
        let mut config = Configuration::new();
        let index = config.add_area();
        let area = &config.areas[index];
        assert_eq!(area.target_type, TargetType::None);
        assert_eq!(area.width, crate::model::DEFAULT_AREA_SIZE);
        assert_eq!(area.height, crate::model::DEFAULT_AREA_SIZE);
    }
}
