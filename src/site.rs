//! External sites an area can link to.
//!
//! Sites live outside the page configuration and are shared by all linkmap
//! pages of an entry. The editor lists them, opens a saved site's editor on
//! click and lets a site be picked as an area's target. Every change to a
//! site is saved right away.

use serde::{Deserialize, Serialize};

use crate::model::{FileId, SiteId, TargetId};
use crate::references::{get_reference, FileRegistry, Reference};

/// Editor route of saved sites.
pub const SITES_PATH: &str = "/linkmap_page/sites";

/// An external site with its editor-facing attributes.
///
/// Attributes this crate does not use are kept in `other` so a save
/// writes them back unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Unset until the site has been saved for the first time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SiteId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(
        default = "default_open_in_new_tab",
        deserialize_with = "open_in_new_tab_or_default"
    )]
    pub open_in_new_tab: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_id: Option<FileId>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

fn default_open_in_new_tab() -> bool {
    true
}

fn open_in_new_tab_or_default<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_open_in_new_tab))
}

impl Default for Site {
    fn default() -> Self {
        Self {
            id: None,
            title: None,
            open_in_new_tab: default_open_in_new_tab(),
            thumbnail_id: None,
            other: serde_json::Map::new(),
        }
    }
}

impl Site {
    /// Creates an unsaved site.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<SiteId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns true if the site has never been saved.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// The site's thumbnail image.
    pub fn thumbnail<'a>(&self, image_files: &'a FileRegistry) -> Reference<'a> {
        get_reference(self.thumbnail_id, image_files)
    }

    /// Editor path of a saved site.
    ///
    /// When opened from a page, the path carries that page so the editor
    /// can return to the site list afterwards. Unsaved sites have no path.
    pub fn editor_path(&self, page: Option<TargetId>) -> Option<String> {
        let id = self.id?;
        Some(match page {
            Some(page) => format!("{}/{}/?page={}&return_to=sites", SITES_PATH, id, page),
            None => format!("{}/{}", SITES_PATH, id),
        })
    }
}

/// Receives every changed site.
pub trait SiteStore {
    fn save(&mut self, site: &Site);
}

/// A site store that records saves in memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteSaveLog {
    pub saves: Vec<Site>,
}

impl SiteStore for SiteSaveLog {
    fn save(&mut self, site: &Site) {
        self.saves.push(site.clone());
    }
}

/// A site paired with the store it saves itself to.
#[derive(Debug)]
pub struct AutosaveSite<S> {
    site: Site,
    store: S,
}

impl<S: SiteStore> AutosaveSite<S> {
    pub fn new(site: Site, store: S) -> Self {
        Self { site, store }
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Applies `change` and saves the site if anything differs afterwards.
    ///
    /// Returns true if a save happened.
    pub fn update(&mut self, change: impl FnOnce(&mut Site)) -> bool {
        let before = self.site.clone();
        change(&mut self.site);
        if self.site == before {
            return false;
        }
        tracing::debug!(site = ?self.site.id, "site changed, saving");
        self.store.save(&self.site);
        true
    }

    pub fn set_title(&mut self, title: Option<String>) -> bool {
        self.update(|site| site.title = title)
    }

    pub fn set_open_in_new_tab(&mut self, open_in_new_tab: bool) -> bool {
        self.update(|site| site.open_in_new_tab = open_in_new_tab)
    }

    pub fn set_thumbnail(&mut self, thumbnail_id: Option<FileId>) -> bool {
        self.update(|site| site.thumbnail_id = thumbnail_id)
    }

    /// Records the id assigned by the first save. Not itself a change.
    pub fn mark_saved(&mut self, id: SiteId) {
        self.site.id = Some(id);
    }

    pub fn into_parts(self) -> (Site, S) {
        (self.site, self.store)
    }
}
