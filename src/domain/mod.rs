// SPDX-License-Identifier: MPL-2.0
//! Plain data records shared across the application.
//!
//! Every type here is a dumb value: constructed by the data layer (or a
//! fixture), rendered by a view, never mutated in place. Cross-references
//! between records are plain identifier strings used as routing keys.

pub mod account;
pub mod community;
pub mod content;
pub mod review;
pub mod workspace;

pub use account::{
    AuthCallbackState, AuthProvider, AuthStatus, BillingSettings, NotificationSettings,
    ProfileSettings, UserProfile, UserStats,
};
pub use community::{CircleDetail, CircleSummary, LearningPath, LearningPathDetail, Milestone};
pub use content::{GardenCollection, GardenInsight, GardenOverview, SummaryDocument};
pub use review::{ReviewItem, ReviewItemKind};
pub use workspace::{Cadence, HomeOverview, PricingPlan, QuickLink, Trend, WorkspaceStat};
