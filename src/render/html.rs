//! Published-page markup for linkmap areas.

use crate::model::{Area, Configuration};
use crate::resolve::{resolve_area, PresentationAttributes};

/// Class of the element wrapping all areas of a page.
pub const AREAS_CLASS: &str = "linkmap_areas";

/// Renders the `div.linkmap_areas` wrapper with one link per area.
pub fn render_areas_div(config: &Configuration) -> String {
    let mut html = format!("<div class=\"{}\">\n", AREAS_CLASS);
    for (index, area) in config.areas.iter().enumerate() {
        html.push_str(&render_area(area, config, index));
        html.push('\n');
    }
    html.push_str("</div>\n");
    html
}

/// Renders a single area link.
pub fn render_area(area: &Area, config: &Configuration, index: usize) -> String {
    let attrs = resolve_area(area, config, index);
    render_resolved(area, &attrs)
}

/// Renders an area from already resolved attributes.
pub fn render_resolved(area: &Area, attrs: &PresentationAttributes) -> String {
    let mut html = String::from("<a href=\"#\"");
    push_attr(
        &mut html,
        "class",
        &format!("hover_area {}", area.marker.as_str()),
    );
    push_attr(&mut html, "style", &attrs.inline_style());
    for (name, value) in attrs.data_attributes() {
        push_attr(&mut html, name, value);
    }
    html.push('>');

    if let Some(class) = attrs.hover_image_class() {
        html.push_str(&format!(
            "<div class=\"hover_image {}\"></div>",
            escape(class)
        ));
    }
    if let Some(class) = attrs.visited_image_class() {
        html.push_str(&format!(
            "<div class=\"visited_image {}\"></div>",
            escape(class)
        ));
    }
    if let Some(title) = area.link_title.as_deref() {
        html.push_str(&format!("<div class=\"link_title\">{}</div>", escape(title)));
    }
    if let Some(description) = area.link_description.as_deref() {
        html.push_str(&format!(
            "<div class=\"link_description\">{}</div>",
            escape(description)
        ));
    }

    html.push_str("</a>");
    html
}

fn push_attr(html: &mut String, name: &str, value: &str) {
    html.push_str(&format!(" {}=\"{}\"", name, escape(value)));
}

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileId;

    #[test]
    fn test_wrapper_div() {
        let html = render_areas_div(&Configuration::new());
        assert!(html.starts_with("<div class=\"linkmap_areas\">"));
    }

    #[test]
    fn test_area_link_contents() {
        let mut config = Configuration::new();
        config.hover_image_id = Some(FileId(5));
        let area = Area::new(30.0, 20.0, 40.0, 50.0).with_audio_target(25u64);

        let html = render_area(&area, &config, 5);
        assert!(html.starts_with("<a href=\"#\""));
        assert!(html.contains("style=\"top: 20%; left: 30%; width: 40%; height: 50%;\""));
        assert!(html.contains("data-audio-file=\"25.area_5\""));
        assert!(html.contains("<div class=\"hover_image image_panorama_5\"></div>"));
        assert!(html.contains("class=\"hover_area no_marker\""));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut area = Area::default();
        area.link_title = Some("<b>\"Tom & Jerry\"</b>".into());

        let html = render_area(&area, &Configuration::new(), 0);
        assert!(html.contains("&lt;b&gt;&quot;Tom &amp; Jerry&quot;&lt;/b&gt;"));
    }
}
