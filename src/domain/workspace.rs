// SPDX-License-Identifier: MPL-2.0
//! Workspace dashboard records: stats, the home overview, and pricing.

use serde::{Deserialize, Serialize};

/// Direction of a stat's movement since the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Steady,
}

/// A single headline metric on the workspace overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceStat {
    pub label: String,
    pub value: String,
    pub helper_text: String,
    pub trend: Trend,
}

/// A shortcut link rendered on the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub label: String,
    pub href: String,
    pub description: String,
}

/// The current focus snapshot shown on the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeOverview {
    pub focus_area: String,
    pub next_milestone: String,
    pub quick_links: Vec<QuickLink>,
    pub reminders: Vec<String>,
}

/// Billing cadence for a pricing plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Monthly,
    Annual,
}

/// A subscription tier on the pricing screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: String,
    pub cadence: Cadence,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}
