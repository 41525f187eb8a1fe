// SPDX-License-Identifier: MPL-2.0
//! Account-side records: settings screens, public profiles, and the auth
//! placeholders.

use serde::{Deserialize, Serialize};

/// The signed-in member's profile preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub display_name: String,
    pub role: String,
    pub timezone: String,
    pub availability: Vec<String>,
}

/// Subscription status for the billing screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSettings {
    pub plan: String,
    pub price: String,
    pub renews_on: String,
    pub seats: u32,
    pub payment_method: String,
}

/// Notification delivery preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_digests: bool,
    pub push_reminders: bool,
    pub weekly_summary_day: String,
}

/// Contribution counters on a public profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub circles: u32,
    pub paths: u32,
    pub contributions: u32,
}

/// A member's public profile, addressed by username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub joined_at: String,
    pub stats: UserStats,
}

/// A sign-in option listed on the auth screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthProvider {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Progress of the (placeholder) auth callback exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    Pending,
    Success,
    Error,
}

/// State shown on the auth callback screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCallbackState {
    pub status: AuthStatus,
    pub message: String,
    pub next_route: String,
}
