//! Marker mode and hover highlight of an area.
//!
//! The marker is persisted and toggled by the user between the two known
//! modes. Values written by other tools are carried along untouched. The
//! highlight is a transient flag driven by pointer events in the editor.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Area;

/// Marker modes with a known CSS class, in display order.
pub const MARKER_OPTIONS: [Marker; 2] = [Marker::NoMarker, Marker::DynamicMarker];

/// Visual marker mode of an area.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Marker {
    #[default]
    NoMarker,
    DynamicMarker,
    /// A marker mode this crate does not know; kept verbatim.
    Other(String),
}

impl Marker {
    pub fn as_str(&self) -> &str {
        match self {
            Marker::NoMarker => "no_marker",
            Marker::DynamicMarker => "dynamic_marker",
            Marker::Other(other) => other,
        }
    }

    /// Returns the marker after one toggle action.
    ///
    /// `no_marker` and `dynamic_marker` swap; anything else is returned
    /// unchanged.
    pub fn toggled(&self) -> Marker {
        match self {
            Marker::NoMarker => Marker::DynamicMarker,
            Marker::DynamicMarker => Marker::NoMarker,
            Marker::Other(other) => Marker::Other(other.clone()),
        }
    }

    /// Returns true if the variant is one of the known marker modes.
    pub fn is_known(&self) -> bool {
        !matches!(self, Marker::Other(_))
    }
}

impl From<String> for Marker {
    fn from(value: String) -> Self {
        match value.as_str() {
            "no_marker" => Marker::NoMarker,
            "dynamic_marker" => Marker::DynamicMarker,
            _ => Marker::Other(value),
        }
    }
}

/// `null` reads as the default; an empty string is kept as is.
impl From<Option<String>> for Marker {
    fn from(value: Option<String>) -> Self {
        value.map(Marker::from).unwrap_or_default()
    }
}

impl From<Marker> for String {
    fn from(value: Marker) -> Self {
        match value {
            Marker::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient hover highlight of an area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Highlight {
    on: bool,
}

impl Highlight {
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Pointer entered the area (or its list entry).
    pub fn pointer_enter(&mut self) {
        self.on = true;
    }

    /// Pointer left: resets the flag to its initial state.
    pub fn pointer_leave(&mut self) {
        *self = Highlight::default();
    }
}

impl Area {
    /// Applies the user's toggle action to the marker.
    ///
    /// Returns true if the marker changed.
    pub fn toggle_marker(&mut self) -> bool {
        let next = self.marker.toggled();
        let changed = next != self.marker;
        if changed {
            tracing::debug!(from = %self.marker, to = %next, "marker toggled");
        } else {
            tracing::debug!(marker = %self.marker, "unknown marker left unchanged");
        }
        self.marker = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycles_known_markers() {
        let mut area = Area::default();
        assert_eq!(area.marker, Marker::NoMarker);

        assert!(area.toggle_marker());
        assert_eq!(area.marker, Marker::DynamicMarker);

        assert!(area.toggle_marker());
        assert_eq!(area.marker, Marker::NoMarker);
    }

    #[test]
    fn test_toggle_leaves_unknown_marker() {
        let mut area = Area {
            marker: Marker::Other("pulse_marker".into()),
            ..Default::default()
        };

        assert!(!area.toggle_marker());
        assert_eq!(area.marker, Marker::Other("pulse_marker".into()));
    }

    #[test]
    fn test_marker_serde_passthrough() {
        let marker: Marker = serde_json::from_str("\"pulse_marker\"").unwrap();
        assert_eq!(serde_json::to_string(&marker).unwrap(), "\"pulse_marker\"");

        let known: Marker = serde_json::from_str("\"dynamic_marker\"").unwrap();
        assert_eq!(known, Marker::DynamicMarker);
    }

    #[test]
    fn test_null_marker_reads_as_default() {
        let marker: Marker = serde_json::from_str("null").unwrap();
        assert_eq!(marker, Marker::NoMarker);

        let area: Area = serde_json::from_str(r#"{"marker": null}"#).unwrap();
        assert_eq!(area.marker, Marker::NoMarker);
    }

    #[test]
    fn test_empty_marker_is_kept_verbatim() {
        let marker: Marker = serde_json::from_str(r#""""#).unwrap();
        assert_eq!(marker, Marker::Other(String::new()));
        assert_eq!(serde_json::to_string(&marker).unwrap(), r#""""#);
    }

    #[test]
    fn test_highlight_enter_leave() {
        let mut highlight = Highlight::default();
        highlight.pointer_enter();
        assert!(highlight.is_on());
        highlight.pointer_leave();
        assert!(!highlight.is_on());
        highlight.pointer_leave();
        assert!(!highlight.is_on());
    }
}
