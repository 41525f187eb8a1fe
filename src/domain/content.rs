// SPDX-License-Identifier: MPL-2.0
//! Knowledge content records: summary documents and the garden.

use serde::{Deserialize, Serialize};

/// A consolidated summary document addressed by slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDocument {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub highlights: Vec<String>,
    pub last_updated: String,
}

/// A named collection of insights inside the garden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenCollection {
    pub name: String,
    pub insight_count: u32,
}

/// Aggregate counters for the garden screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenOverview {
    pub collections: Vec<GardenCollection>,
    pub experiments: u32,
    pub open_questions: u32,
}

/// A single garden insight, addressed by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenInsight {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub last_edited: String,
}
