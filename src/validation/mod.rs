//! Page configuration validation for linkmap.
//!
//! Resolution and rendering accept anything a stored configuration can
//! hold. This module finds the entries that will not render as intended:
//! - Geometric validity (finite values, non-negative sizes, on the container)
//! - Link targets (ids present, transitions only on page links)
//! - Color map references (well-formed tokens pointing at the page's color map)

mod report;

pub use report::{IssueCode, IssueContext, Severity, ValidationIssue, ValidationReport};

use crate::model::{Area, ComponentToken, Configuration, TargetType};

/// Options for validation behavior.
#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,
}

/// Validates a page configuration and returns a report of all issues found.
pub fn validate_configuration(config: &Configuration, _opts: &ValidateOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    validate_page(config, &mut report);

    for (index, area) in config.areas.iter().enumerate() {
        validate_geometry(area, index, &mut report);
        validate_target(area, index, &mut report);
        validate_color_map(area, index, config, &mut report);

        if !area.marker.is_known() {
            report.add(ValidationIssue::warning(
                IssueCode::UnknownMarker,
                format!("Unknown marker '{}' (kept as is)", area.marker),
                IssueContext::Area { index },
            ));
        }
    }

    report
}

/// Validates page-level image settings.
fn validate_page(config: &Configuration, report: &mut ValidationReport) {
    let has_masked_image =
        config.masked_hover_image_id.is_some() || config.masked_visited_image_id.is_some();

    if has_masked_image && config.color_map_file_id.is_none() {
        report.add(ValidationIssue::warning(
            IssueCode::MaskedImageWithoutColorMap,
            "Masked images are configured but no color map file is set; plain images will be used",
            IssueContext::Configuration,
        ));
    }
}

fn validate_geometry(area: &Area, index: usize, report: &mut ValidationReport) {
    let rect = area.rect();

    if !rect.is_finite() {
        report.add(ValidationIssue::error(
            IssueCode::AreaNotFinite,
            format!(
                "Non-finite geometry (left {}, top {}, width {}, height {})",
                area.left, area.top, area.width, area.height
            ),
            IssueContext::Area { index },
        ));
        return; // Skip further geometry checks if values are invalid
    }

    if rect.has_negative_size() {
        report.add(ValidationIssue::error(
            IssueCode::NegativeAreaSize,
            format!("Negative size {}% x {}%", area.width, area.height),
            IssueContext::Area { index },
        ));
    }

    if rect.is_outside_container() {
        report.add(ValidationIssue::warning(
            IssueCode::AreaOutsideContainer,
            format!(
                "Area ({:.1}%, {:.1}%, {:.1}% x {:.1}%) lies completely outside the container",
                area.left, area.top, area.width, area.height
            ),
            IssueContext::Area { index },
        ));
    }
}

fn validate_target(area: &Area, index: usize, report: &mut ValidationReport) {
    match &area.target_type {
        TargetType::Page | TargetType::AudioFile if area.target_id.is_none() => {
            report.add(ValidationIssue::warning(
                IssueCode::MissingTargetId,
                format!("Target type '{}' without target id", area.target_type),
                IssueContext::Area { index },
            ));
        }
        TargetType::Other(other) => {
            report.add(ValidationIssue::warning(
                IssueCode::UnknownTargetType,
                format!("Unknown target type '{}' (no link is rendered)", other),
                IssueContext::Area { index },
            ));
        }
        _ => {}
    }

    if area.target_type != TargetType::Page && area.page_transition.is_some() {
        report.add(ValidationIssue::warning(
            IssueCode::TransitionWithoutPageTarget,
            format!(
                "Page transition set on a '{}' target is ignored",
                area.target_type
            ),
            IssueContext::Area { index },
        ));
    }
}

fn validate_color_map(
    area: &Area,
    index: usize,
    config: &Configuration,
    report: &mut ValidationReport,
) {
    let Some(raw) = area.effective_component_token() else {
        return;
    };

    match ComponentToken::parse(raw) {
        None => report.add(ValidationIssue::warning(
            IssueCode::MalformedComponentToken,
            format!("Component token '{}' is not of the form <fileId>:<component>", raw),
            IssueContext::Area { index },
        )),
        Some(token) => {
            if let Some(color_map) = config.color_map_file_id {
                if token.file_id != color_map {
                    report.add(ValidationIssue::warning(
                        IssueCode::ForeignColorMapComponent,
                        format!(
                            "Component token '{}' references color map {} but the page uses {}",
                            raw, token.file_id, color_map
                        ),
                        IssueContext::Area { index },
                    ));
                }
            }
        }
    }
}
