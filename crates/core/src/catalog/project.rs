use folio_protocol::SharedStr;
use serde::{Deserialize, Serialize};

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: SharedStr,
    pub title: SharedStr,
    pub short_title: SharedStr,
    pub year: u16,
    pub marquee_key: SharedStr,
    pub tags: Vec<SharedStr>,
    /// Slash-separated discipline list shown on the works page.
    pub categories: SharedStr,
    pub description: SharedStr,
    pub images: Vec<SharedStr>,
    pub hero_image: SharedStr,
}

impl ProjectRecord {
    /// Marquee label as displayed: trimmed and upper-cased.
    pub fn display_marquee_key(&self) -> SharedStr {
        SharedStr::from(self.marquee_key.trim().to_uppercase())
    }
}
