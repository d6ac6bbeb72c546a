//! Editor overlay state of an area.
//!
//! The editor shows each area as a box over the background with classes
//! for highlight, orientation and marker, plus a marker sized to the
//! shorter side of the box.

use std::collections::BTreeMap;

use crate::marker::MARKER_OPTIONS;
use crate::model::{Area, Pixel, Rect, TargetType};
use crate::resolve::PresentationAttributes;

/// Space kept between the marker and the area's border, in pixels.
pub const MARKER_MARGIN_PX: f64 = 32.0;

/// Everything the editor applies to an area's element.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorAreaView {
    pub classes: Vec<String>,
    pub attributes: BTreeMap<&'static str, String>,
    pub style: String,
    /// Marker edge length in pixels, when the rendered box is known.
    pub marker_size: Option<f64>,
    /// Whether inline audio player controls are attached.
    pub audio_controls: bool,
    pub link_title: Option<String>,
    pub link_description: Option<String>,
}

impl EditorAreaView {
    /// Builds the view of `area`.
    ///
    /// `rendered` is the element's current pixel box, if it has been laid out.
    pub fn new(
        area: &Area,
        attrs: &PresentationAttributes,
        rendered: Option<Rect<Pixel>>,
    ) -> Self {
        let rect = area.rect();
        let mut classes = vec!["hover_area".to_string()];

        if area.highlight.is_on() {
            classes.push("highlighted".into());
        }
        classes.push(if rect.is_portrait() { "portrait" } else { "landscape" }.into());
        // Only the area's own marker option is active.
        for option in MARKER_OPTIONS.iter().filter(|option| **option == area.marker) {
            classes.push(option.as_str().to_string());
        }

        let mut attributes = BTreeMap::new();
        attributes.insert("data-width", area.width.to_string());
        attributes.insert("data-height", area.height.to_string());
        if let Some(audio_file_id) = area.audio_file_id {
            attributes.insert("data-audio-file", audio_file_id.to_string());
        }
        if let (TargetType::Page, Some(page_id)) = (&area.target_type, area.target_id) {
            attributes.insert("data-page", page_id.to_string());
            if let Some(transition) = area.page_transition.as_deref() {
                attributes.insert("data-page-transition", transition.to_string());
            }
        }

        let marker_size = rendered.map(|rendered| {
            let side = if rect.is_portrait() {
                rendered.width
            } else {
                rendered.height
            };
            (side - MARKER_MARGIN_PX).max(0.0)
        });

        Self {
            classes,
            attributes,
            style: attrs.inline_style(),
            marker_size,
            audio_controls: area.audio_file_id.is_some(),
            link_title: area.link_title.clone(),
            link_description: area.link_description.clone(),
        }
    }

    /// Adds the classes shown while the area is being dragged or resized.
    pub fn with_editing(mut self, editing: bool) -> Self {
        if editing {
            self.classes.push("hover".into());
            self.classes.push("editing".into());
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::Marker;
    use crate::model::{Configuration, FileId};
    use crate::resolve::resolve_area;

    fn view(area: &Area, rendered: Option<Rect<Pixel>>) -> EditorAreaView {
        let attrs = resolve_area(area, &Configuration::new(), 0);
        EditorAreaView::new(area, &attrs, rendered)
    }

    #[test]
    fn test_orientation_classes() {
        let tall = view(&Area::new(0.0, 0.0, 10.0, 10.0), None);
        assert!(tall.has_class("portrait"));
        assert!(!tall.has_class("landscape"));

        let wide = view(&Area::new(0.0, 0.0, 30.0, 10.0), None);
        assert!(wide.has_class("landscape"));
    }

    #[test]
    fn test_marker_and_highlight_classes() {
        let mut area = Area::default();
        area.marker = Marker::DynamicMarker;
        area.highlight.pointer_enter();

        let view = view(&area, None);
        assert!(view.has_class("dynamic_marker"));
        assert!(!view.has_class("no_marker"));
        assert!(view.has_class("highlighted"));
    }

    #[test]
    fn test_unknown_marker_has_no_marker_class() {
        let mut area = Area::default();
        area.marker = Marker::Other("pulse_marker".into());
        let view = view(&area, None);
        assert!(!view.has_class("pulse_marker"));
        assert!(!view.has_class("no_marker"));
    }

    #[test]
    fn test_marker_size_uses_shorter_side() {
        let wide = view(
            &Area::new(0.0, 0.0, 40.0, 10.0),
            Some(Rect::new(0.0, 0.0, 400.0, 100.0)),
        );
        assert_eq!(wide.marker_size, Some(68.0));

        let tiny = view(
            &Area::new(0.0, 0.0, 1.0, 1.0),
            Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
        );
        assert_eq!(tiny.marker_size, Some(0.0));
    }

    #[test]
    fn test_editor_attributes() {
        let mut area = Area::new(1.0, 2.0, 3.5, 4.0).with_page_target(10u64, Some("fade"));
        area.audio_file_id = Some(FileId(8));

        let view = view(&area, None).with_editing(true);
        assert_eq!(view.attributes.get("data-width").map(String::as_str), Some("3.5"));
        assert_eq!(view.attributes.get("data-page").map(String::as_str), Some("10"));
        assert_eq!(
            view.attributes.get("data-page-transition").map(String::as_str),
            Some("fade")
        );
        assert_eq!(view.attributes.get("data-audio-file").map(String::as_str), Some("8"));
        assert!(view.audio_controls);
        assert!(view.has_class("editing"));
        assert_eq!(view.style, "top: 2%; left: 1%; width: 3.5%; height: 4%;");
    }
}
