//! Sidebar list entries for areas with file targets and for sites.

use crate::model::{Area, Configuration, TargetId};
use crate::references::{target_file, FileRegistry, Navigation};
use crate::site::Site;

/// Title shown when an area's file is missing.
pub const NO_FILE_LABEL: &str = "No file";

/// Title shown for a site without one.
pub const UNTITLED_LABEL: &str = "(Unbenannt)";

/// One entry of the area list in the editor sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileAreaItem {
    pub index: usize,
    pub title: String,
    pub thumbnail_url: Option<String>,
    /// Set when the area references a file that no longer exists, or none.
    pub dangling: bool,
    /// Where the edit button leads; the button is hidden when `None`.
    pub edit_path: Option<String>,
}

impl FileAreaItem {
    pub fn new(area: &Area, index: usize, audio_files: &FileRegistry) -> Self {
        let file = target_file(area, audio_files).file();

        Self {
            index,
            title: file
                .map(|f| f.file_name.clone())
                .unwrap_or_else(|| NO_FILE_LABEL.to_string()),
            thumbnail_url: file.and_then(|f| f.thumbnail_url.clone()),
            dangling: file.is_none(),
            edit_path: area.edit_path(index),
        }
    }

    pub fn show_edit_button(&self) -> bool {
        self.edit_path.is_some()
    }

    /// Edit button: navigates to the area's editor, if it has one.
    pub fn click_edit(&self, navigation: &mut impl Navigation) -> bool {
        match &self.edit_path {
            Some(path) => {
                navigation.navigate(path);
                true
            }
            None => false,
        }
    }

    pub fn pointer_enter(&self, config: &mut Configuration) {
        if let Some(area) = config.areas.get_mut(self.index) {
            area.highlight.pointer_enter();
        }
    }

    pub fn pointer_leave(&self, config: &mut Configuration) {
        if let Some(area) = config.areas.get_mut(self.index) {
            area.highlight.pointer_leave();
        }
    }

    /// Remove button: deletes the area from the configuration.
    pub fn remove(self, config: &mut Configuration) -> Option<Area> {
        tracing::debug!(index = self.index, "area removed from list");
        config.remove_area(self.index)
    }
}

/// List entries for every area of the configuration.
pub fn file_area_items(config: &Configuration, audio_files: &FileRegistry) -> Vec<FileAreaItem> {
    config
        .areas
        .iter()
        .enumerate()
        .map(|(index, area)| FileAreaItem::new(area, index, audio_files))
        .collect()
}

/// One entry of the site list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteItem {
    pub title: String,
    pub thumbnail_url: Option<String>,
    /// Where a click on the entry leads; unsaved sites are not clickable.
    pub editor_path: Option<String>,
    /// Where the select button returns to. The button is hidden when `None`.
    pub referer: Option<String>,
}

impl SiteItem {
    /// Builds the entry for `site`, listed while editing `page` if given.
    pub fn new(site: &Site, image_files: &FileRegistry, page: Option<TargetId>) -> Self {
        Self {
            title: site
                .title
                .as_deref()
                .filter(|title| !title.is_empty())
                .unwrap_or(UNTITLED_LABEL)
                .to_string(),
            thumbnail_url: site
                .thumbnail(image_files)
                .file()
                .and_then(|f| f.thumbnail_url.clone()),
            editor_path: site.editor_path(page),
            referer: None,
        }
    }

    /// Lists the entry for picking a site, returning to `referer` after.
    pub fn selectable(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    pub fn show_select_button(&self) -> bool {
        self.referer.is_some()
    }

    /// Click on the entry: opens the site's editor, if it has been saved.
    pub fn click(&self, navigation: &mut impl Navigation) -> bool {
        match &self.editor_path {
            Some(path) => {
                navigation.navigate(path);
                true
            }
            None => false,
        }
    }

    /// Select button: hands `site` to `on_select`, then returns to the
    /// referer. Does nothing when the entry is not selectable.
    pub fn click_select(
        &self,
        site: &Site,
        on_select: impl FnOnce(&Site),
        navigation: &mut impl Navigation,
    ) -> bool {
        let Some(referer) = &self.referer else {
            return false;
        };
        tracing::debug!(site = ?site.id, "site selected");
        on_select(site);
        navigation.navigate(referer);
        true
    }
}

/// List entries for `sites`, in order.
pub fn site_items(sites: &[Site], image_files: &FileRegistry, page: Option<TargetId>) -> Vec<SiteItem> {
    sites
        .iter()
        .map(|site| SiteItem::new(site, image_files, page))
        .collect()
}
