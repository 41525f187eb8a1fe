// SPDX-License-Identifier: MPL-2.0
//! Review queue records.

use serde::{Deserialize, Serialize};

/// The kind of content a review item carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewItemKind {
    Seed,
    Insight,
    Summary,
}

impl ReviewItemKind {
    /// Lowercase label used for the kind badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ReviewItemKind::Seed => "seed",
            ReviewItemKind::Insight => "insight",
            ReviewItemKind::Summary => "summary",
        }
    }
}

/// A unit of user-generated content awaiting disposition.
///
/// Items are constructed once by the data layer and never mutated;
/// dispositioning an item does not remove it from the underlying list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub id: String,
    pub kind: ReviewItemKind,
    pub title: String,
    pub content: String,
    pub author: String,
    pub submitted_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels_are_lowercase() {
        assert_eq!(ReviewItemKind::Seed.label(), "seed");
        assert_eq!(ReviewItemKind::Insight.label(), "insight");
        assert_eq!(ReviewItemKind::Summary.label(), "summary");
    }
}
