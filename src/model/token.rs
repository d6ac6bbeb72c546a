//! Color map component tokens.
//!
//! Areas reference a region of a color map image as `"<fileId>:<component>"`.
//! Parsing is total: anything that does not split cleanly is simply not a
//! token, and callers treat it as absent.

use std::fmt;

use super::ids::FileId;

/// A parsed `"<fileId>:<component>"` reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentToken<'a> {
    pub file_id: FileId,
    pub component: &'a str,
}

impl<'a> ComponentToken<'a> {
    /// Parses a token, splitting at the first `:`.
    ///
    /// Returns `None` when the separator is missing, the file id is not an
    /// unsigned integer, or the component part is empty.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (file_id, component) = raw.trim().split_once(':')?;
        let file_id = file_id.trim().parse::<u64>().ok()?;

        if component.is_empty() {
            return None;
        }

        Some(Self {
            file_id: FileId(file_id),
            component,
        })
    }
}

impl fmt::Display for ComponentToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_id, self.component)
    }
}

/// Returns the value if it is present and not blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
