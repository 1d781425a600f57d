use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FaceSide {
    Front,
    Back,
}

/// New content for one card face. Only emitted when the project shown on
/// that face changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceUpdate {
    pub side: FaceSide,
    pub index: usize,
    pub id: SharedStr,
    pub title: SharedStr,
    pub tags: Vec<SharedStr>,
    pub images: Vec<SharedStr>,
}

/// New marquee label. `key` is already trimmed and upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarqueeUpdate {
    pub index: usize,
    pub key: SharedStr,
}
