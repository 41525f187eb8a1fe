// SPDX-License-Identifier: MPL-2.0
//! Static fixture records backing the mock data provider.
//!
//! Each constructor allocates a fresh copy so callers own their data the
//! same way they would own a deserialized response.

use crate::domain::{
    AuthProvider, BillingSettings, Cadence, CircleDetail, CircleSummary, GardenCollection,
    GardenInsight, GardenOverview, HomeOverview, LearningPathDetail, Milestone,
    NotificationSettings, PricingPlan, ProfileSettings, QuickLink, ReviewItem, ReviewItemKind,
    SummaryDocument, Trend, UserProfile, UserStats, WorkspaceStat,
};

fn stat(label: &str, value: &str, helper_text: &str, trend: Trend) -> WorkspaceStat {
    WorkspaceStat {
        label: label.to_string(),
        value: value.to_string(),
        helper_text: helper_text.to_string(),
        trend,
    }
}

pub fn workspace_stats() -> Vec<WorkspaceStat> {
    vec![
        stat("Focus score", "82", "+5 vs last week", Trend::Up),
        stat("Active circles", "12", "3 in review", Trend::Steady),
        stat("Seeds planted", "48", "8 new this week", Trend::Up),
    ]
}

fn quick_link(label: &str, href: &str, description: &str) -> QuickLink {
    QuickLink {
        label: label.to_string(),
        href: href.to_string(),
        description: description.to_string(),
    }
}

pub fn home_overview() -> HomeOverview {
    HomeOverview {
        focus_area: "Research notes about async rituals".to_string(),
        next_milestone: "Consolidate summary for Friday demo".to_string(),
        quick_links: vec![
            quick_link("Jump to review", "/review", "8 items waiting"),
            quick_link("Open garden", "/garden", "Track experiments"),
            quick_link("Check circles", "/circles", "See community"),
        ],
        reminders: vec![
            "Draft summary of interviews".to_string(),
            "Record garden insight".to_string(),
            "Share update with core circle".to_string(),
        ],
    }
}

pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            id: "starter".to_string(),
            name: "Starter".to_string(),
            price: "$12".to_string(),
            cadence: Cadence::Monthly,
            description: "For individuals exploring their garden.".to_string(),
            features: vec![
                "Unlimited seeds".to_string(),
                "Basic review automation".to_string(),
                "1 circle".to_string(),
            ],
            popular: false,
        },
        PricingPlan {
            id: "growth".to_string(),
            name: "Growth".to_string(),
            price: "$29".to_string(),
            cadence: Cadence::Monthly,
            description: "For small teams building a shared practice.".to_string(),
            features: vec![
                "Shared garden".to_string(),
                "Priority review cues".to_string(),
                "3 circles".to_string(),
            ],
            popular: true,
        },
        PricingPlan {
            id: "strategy".to_string(),
            name: "Strategy".to_string(),
            price: "$99".to_string(),
            cadence: Cadence::Monthly,
            description: "For orgs turning ideas into playbooks.".to_string(),
            features: vec![
                "Custom automations".to_string(),
                "Insights API".to_string(),
                "Unlimited circles".to_string(),
            ],
            popular: false,
        },
    ]
}

pub fn summary_documents() -> Vec<SummaryDocument> {
    vec![SummaryDocument {
        slug: "north-star".to_string(),
        title: "North Star Narrative".to_string(),
        summary: "Map the signals from research into a single decision frame.".to_string(),
        highlights: vec![
            "Focus on habits not tactics".to_string(),
            "Share context with circles weekly".to_string(),
            "Invite critique before locking roadmap".to_string(),
        ],
        last_updated: "2024-11-18".to_string(),
    }]
}

pub fn garden_overview() -> GardenOverview {
    GardenOverview {
        collections: vec![
            GardenCollection {
                name: "Research".to_string(),
                insight_count: 18,
            },
            GardenCollection {
                name: "Design".to_string(),
                insight_count: 9,
            },
            GardenCollection {
                name: "Go-to-market".to_string(),
                insight_count: 16,
            },
        ],
        experiments: 4,
        open_questions: 7,
    }
}

pub fn garden_insights() -> Vec<GardenInsight> {
    vec![
        GardenInsight {
            id: "async-rituals".to_string(),
            title: "Async rituals reduce blocker time".to_string(),
            excerpt: "Teams with async rituals close loops 32% faster.".to_string(),
            tags: vec!["rituals".to_string(), "ops".to_string()],
            last_edited: "2024-11-20".to_string(),
        },
        GardenInsight {
            id: "feedback-layers".to_string(),
            title: "Layered feedback keeps circles healthy".to_string(),
            excerpt: "Feedback ladders help avoid burnout and churn.".to_string(),
            tags: vec!["feedback".to_string(), "circles".to_string()],
            last_edited: "2024-11-22".to_string(),
        },
    ]
}

pub fn review_queue() -> Vec<ReviewItem> {
    vec![
        ReviewItem {
            id: "review-1".to_string(),
            kind: ReviewItemKind::Seed,
            title: "Garden retro notes".to_string(),
            content: "Notes from last week's retrospective about improving the garden \
                      interface and workflow."
                .to_string(),
            author: "Jordan Smart".to_string(),
            submitted_at: "1 hour ago".to_string(),
        },
        ReviewItem {
            id: "review-2".to_string(),
            kind: ReviewItemKind::Insight,
            title: "Async rituals recap".to_string(),
            content: "Summary of findings from our month-long experiment with async standups."
                .to_string(),
            author: "Alex Chen".to_string(),
            submitted_at: "3 hours ago".to_string(),
        },
        ReviewItem {
            id: "review-3".to_string(),
            kind: ReviewItemKind::Summary,
            title: "Q4 learning report".to_string(),
            content: "Comprehensive report consolidating key learnings and decisions from Q4 \
                      initiatives."
                .to_string(),
            author: "Sam Rivera".to_string(),
            submitted_at: "5 hours ago".to_string(),
        },
    ]
}

pub fn circles() -> Vec<CircleSummary> {
    vec![
        CircleSummary {
            id: "pattern-lab".to_string(),
            name: "Pattern Lab".to_string(),
            description: "Research crew validating rituals.".to_string(),
            member_count: 18,
            is_public: true,
        },
        CircleSummary {
            id: "ops-guild".to_string(),
            name: "Ops Guild".to_string(),
            description: "Operators sharing weekly experiments.".to_string(),
            member_count: 9,
            is_public: false,
        },
    ]
}

pub fn circle_details() -> Vec<CircleDetail> {
    vec![
        CircleDetail {
            id: "pattern-lab".to_string(),
            name: "Pattern Lab".to_string(),
            description: "Research crew validating rituals.".to_string(),
            member_count: 18,
            is_public: true,
            focus_topics: vec!["Signal design".to_string(), "Ritual QA".to_string()],
            meeting_cadence: "Weekly".to_string(),
        },
        CircleDetail {
            id: "ops-guild".to_string(),
            name: "Ops Guild".to_string(),
            description: "Operators sharing weekly experiments.".to_string(),
            member_count: 9,
            is_public: false,
            focus_topics: vec!["Playbooks".to_string(), "Automation".to_string()],
            meeting_cadence: "Bi-weekly".to_string(),
        },
    ]
}

fn milestone(title: &str, completed: bool) -> Milestone {
    Milestone {
        title: title.to_string(),
        completed,
    }
}

pub fn learning_paths() -> Vec<LearningPathDetail> {
    vec![
        LearningPathDetail {
            id: "discovery-first".to_string(),
            name: "Discovery First".to_string(),
            description: "Guide teams through discovery-first rituals.".to_string(),
            progress: 3,
            total_steps: 7,
            milestones: vec![
                milestone("Interview core customers", true),
                milestone("Synthesize insights", false),
                milestone("Playbook review", false),
            ],
        },
        LearningPathDetail {
            id: "async-mastery".to_string(),
            name: "Async Mastery".to_string(),
            description: "Enable async rituals inside remote teams.".to_string(),
            progress: 5,
            total_steps: 10,
            milestones: vec![
                milestone("Document rituals", true),
                milestone("Pilot with circle", true),
                milestone("Rollout dashboard", false),
            ],
        },
    ]
}

pub fn profile_settings() -> ProfileSettings {
    ProfileSettings {
        display_name: "Jordan Smart".to_string(),
        role: "Research Lead".to_string(),
        timezone: "UTC-5".to_string(),
        availability: vec!["Mon".to_string(), "Tue".to_string(), "Thu".to_string()],
    }
}

pub fn billing_settings() -> BillingSettings {
    BillingSettings {
        plan: "Growth".to_string(),
        price: "$29".to_string(),
        renews_on: "2025-02-01".to_string(),
        seats: 8,
        payment_method: "•••• 4242".to_string(),
    }
}

pub fn notification_settings() -> NotificationSettings {
    NotificationSettings {
        email_digests: true,
        push_reminders: false,
        weekly_summary_day: "Friday".to_string(),
    }
}

pub fn user_profiles() -> Vec<UserProfile> {
    vec![UserProfile {
        username: "demo-user".to_string(),
        display_name: "Demo User".to_string(),
        bio: "Learning architect exploring async rituals.".to_string(),
        joined_at: "2023-05-10".to_string(),
        stats: UserStats {
            circles: 3,
            paths: 2,
            contributions: 41,
        },
    }]
}

pub fn auth_providers() -> Vec<AuthProvider> {
    vec![
        AuthProvider {
            id: "email".to_string(),
            name: "Magic link".to_string(),
            description: "Send a secure link to your inbox.".to_string(),
        },
        AuthProvider {
            id: "github".to_string(),
            name: "GitHub".to_string(),
            description: "Use your GitHub identity.".to_string(),
        },
        AuthProvider {
            id: "google".to_string(),
            name: "Google".to_string(),
            description: "Sign in with Google Workspace.".to_string(),
        },
    ]
}
