//! Area resolution: stored attributes to presentation attributes.
//!
//! [`resolve_area`] is a pure function of the area, the page configuration
//! and the area's ordinal index. It never fails; malformed or missing data
//! only leaves attributes out.
//!
//! Resolution runs in four steps:
//!
//! 1. Geometry is passed through as `"<value>%"` strings.
//! 2. The link target becomes `data-audio-file` (`"<id>.area_<index>"`) for
//!    audio targets or `data-target-id` / `data-page-transition` for pages.
//! 3. The effective component token (`color_map_component_id`, else
//!    `mask_perma_id`) is emitted as `data-color-map-component-id`, unless
//!    the page has a `hover_video` background.
//! 4. Hover and visited image classes use the masked image variant when
//!    the token references the page's color map file and a masked image is
//!    configured for the role, and the plain image otherwise.

pub mod attributes;

pub use attributes::PresentationAttributes;

use crate::model::{Area, ComponentToken, Configuration, FileId, TargetType};
use attributes::*;

/// Class prefix for plain hover/visited images.
pub const PLAIN_IMAGE_CLASS_PREFIX: &str = "image_panorama";

/// Class prefix for masked image variants.
pub const MASKED_IMAGE_CLASS_PREFIX: &str = "pageflow_linkmap_page_masked_image_file";

/// The two image roles an area can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageRole {
    Hover,
    Visited,
}

impl ImageRole {
    pub const ALL: [ImageRole; 2] = [ImageRole::Hover, ImageRole::Visited];

    fn plain_image_id(&self, config: &Configuration) -> Option<FileId> {
        match self {
            ImageRole::Hover => config.hover_image_id,
            ImageRole::Visited => config.visited_image_id,
        }
    }

    fn masked_image_id(&self, config: &Configuration) -> Option<FileId> {
        match self {
            ImageRole::Hover => config.masked_hover_image_id,
            ImageRole::Visited => config.masked_visited_image_id,
        }
    }

    /// The attribute this role's image class is emitted under.
    pub fn attribute_name(&self) -> &'static str {
        match self {
            ImageRole::Hover => HOVER_IMAGE_CLASS,
            ImageRole::Visited => VISITED_IMAGE_CLASS,
        }
    }
}

/// Resolves one area at position `index` of `config.areas`.
pub fn resolve_area(area: &Area, config: &Configuration, index: usize) -> PresentationAttributes {
    let mut attrs = PresentationAttributes::new();

    attrs.set(LEFT, percent(area.left));
    attrs.set(TOP, percent(area.top));
    attrs.set(WIDTH, percent(area.width));
    attrs.set(HEIGHT, percent(area.height));

    resolve_target(area, index, &mut attrs);

    let token = component_token(area, config);
    if let Some(token) = token {
        attrs.set(DATA_COLOR_MAP_COMPONENT_ID, token);
    }

    for role in ImageRole::ALL {
        if let Some(class) = image_class(role, token, config) {
            attrs.set(role.attribute_name(), class);
        }
    }

    attrs
}

/// Resolves every area of the configuration, in order.
pub fn resolve_areas(config: &Configuration) -> Vec<PresentationAttributes> {
    config
        .areas
        .iter()
        .enumerate()
        .map(|(index, area)| resolve_area(area, config, index))
        .collect()
}

/// Returns the token used for the color map attribute and masking, or
/// `None` when the page's background suppresses color map resolution.
pub fn component_token<'a>(area: &'a Area, config: &Configuration) -> Option<&'a str> {
    if config.suppresses_color_map() {
        return None;
    }
    area.effective_component_token()
}

/// Picks the image class for `role`.
///
/// `token` is the effective component token from [`component_token`].
pub fn image_class(role: ImageRole, token: Option<&str>, config: &Configuration) -> Option<String> {
    if let Some(class) = masked_image_class(role, token, config) {
        return Some(class);
    }
    role.plain_image_id(config)
        .map(|id| format!("{}_{}", PLAIN_IMAGE_CLASS_PREFIX, id))
}

fn masked_image_class(role: ImageRole, token: Option<&str>, config: &Configuration) -> Option<String> {
    let raw = token?;
    let masked_id = role.masked_image_id(config)?;

    let Some(parsed) = ComponentToken::parse(raw) else {
        tracing::debug!(token = raw, "malformed component token, using plain image");
        return None;
    };
    if Some(parsed.file_id) != config.color_map_file_id {
        return None;
    }

    Some(format!(
        "{}_{}_{}",
        MASKED_IMAGE_CLASS_PREFIX, parsed.component, masked_id
    ))
}

fn resolve_target(area: &Area, index: usize, attrs: &mut PresentationAttributes) {
    match (&area.target_type, area.target_id) {
        (TargetType::AudioFile, Some(id)) => {
            attrs.set(DATA_AUDIO_FILE, format!("{}.area_{}", id, index));
        }
        (TargetType::Page, Some(id)) => {
            attrs.set(DATA_TARGET_ID, id.to_string());
            if let Some(transition) = area.page_transition.as_deref().filter(|t| !t.is_empty()) {
                attrs.set(DATA_PAGE_TRANSITION, transition);
            }
        }
        _ => {}
    }
}

fn percent(value: f64) -> String {
    format!("{}%", value)
}

/// Fuzz-only entrypoint: resolves one area carrying `token` on a page
/// whose color map and masked images are all configured.
#[cfg(feature = "fuzzing")]
pub fn fuzz_resolve_token(token: &str) -> PresentationAttributes {
    let config = Configuration {
        hover_image_id: Some(FileId(5)),
        visited_image_id: Some(FileId(6)),
        masked_hover_image_id: Some(FileId(9)),
        masked_visited_image_id: Some(FileId(10)),
        color_map_file_id: Some(FileId(1)),
        ..Configuration::new()
    };
    let area = Area::default().with_color_map_component(token);
    resolve_area(&area, &config, 0)
}
