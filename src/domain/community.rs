// SPDX-License-Identifier: MPL-2.0
//! Community records: circles and learning paths.

use serde::{Deserialize, Serialize};

/// A named community group as listed on the circles screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub member_count: u32,
    pub is_public: bool,
}

/// Full circle record shown on the circle detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub member_count: u32,
    pub is_public: bool,
    pub focus_topics: Vec<String>,
    pub meeting_cadence: String,
}

/// A learning path as listed on the paths screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: String,
    pub name: String,
    pub description: String,
    pub progress: u32,
    pub total_steps: u32,
}

/// A single checklist entry on a learning path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub completed: bool,
}

/// Full learning path record with its milestone checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPathDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub progress: u32,
    pub total_steps: u32,
    pub milestones: Vec<Milestone>,
}

impl LearningPathDetail {
    /// Drops the milestone checklist, keeping the list-level fields.
    #[must_use]
    pub fn summary(&self) -> LearningPath {
        LearningPath {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            progress: self.progress,
            total_steps: self.total_steps,
        }
    }
}
