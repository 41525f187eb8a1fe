// SPDX-License-Identifier: MPL-2.0
//! Route parsing and validation.
//!
//! Screens are addressed by URL-style paths (the launcher accepts one as a
//! positional argument and the sidebar navigates with them). Identifiers
//! are validated here, before any data access: empty segments and malformed
//! usernames never reach the data layer.

use crate::error::RouteError;

/// Screens the user can navigate between, with their route parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Overview,
    Home,
    Pricing,
    Review,
    Summary { slug: String },
    Garden,
    Insight { id: String },
    Circles,
    CircleDetail { id: String },
    Paths,
    PathDetail { id: String },
    SettingsProfile,
    SettingsBilling,
    SettingsNotifications,
    UserProfile { username: String },
    SignIn,
    SignUp,
    AuthCallback,
    ComponentsDemo,
}

impl Route {
    /// Parses and validates a URL-style path.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] when the path matches no screen, an
    /// identifier segment is empty, or a username violates the
    /// 3-30 char alphanumeric/underscore/hyphen rule.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed
                .strip_prefix('/')
                .ok_or_else(|| RouteError::UnknownPath(path.to_string()))?
                .split('/')
                .collect()
        };

        match segments.as_slice() {
            [] => Ok(Route::Overview),
            ["home"] => Ok(Route::Home),
            ["pricing"] => Ok(Route::Pricing),
            ["review"] => Ok(Route::Review),
            ["summary", slug] => Ok(Route::Summary {
                slug: require_identifier(slug, "Slug")?,
            }),
            ["garden"] => Ok(Route::Garden),
            ["garden", "insight", id] => Ok(Route::Insight {
                id: require_identifier(id, "Identifier")?,
            }),
            ["circles"] => Ok(Route::Circles),
            ["circles", id] => Ok(Route::CircleDetail {
                id: require_identifier(id, "Identifier")?,
            }),
            ["paths"] => Ok(Route::Paths),
            ["paths", id] => Ok(Route::PathDetail {
                id: require_identifier(id, "Identifier")?,
            }),
            ["settings", "profile"] => Ok(Route::SettingsProfile),
            ["settings", "billing"] => Ok(Route::SettingsBilling),
            ["settings", "notifications"] => Ok(Route::SettingsNotifications),
            ["u", username] => Ok(Route::UserProfile {
                username: require_username(username)?,
            }),
            ["auth", "signin"] => Ok(Route::SignIn),
            ["auth", "signup"] => Ok(Route::SignUp),
            ["auth", "callback"] => Ok(Route::AuthCallback),
            ["components"] => Ok(Route::ComponentsDemo),
            _ => Err(RouteError::UnknownPath(path.to_string())),
        }
    }

    /// The canonical path for this route, used by navigation links.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Overview => "/".to_string(),
            Route::Home => "/home".to_string(),
            Route::Pricing => "/pricing".to_string(),
            Route::Review => "/review".to_string(),
            Route::Summary { slug } => format!("/summary/{slug}"),
            Route::Garden => "/garden".to_string(),
            Route::Insight { id } => format!("/garden/insight/{id}"),
            Route::Circles => "/circles".to_string(),
            Route::CircleDetail { id } => format!("/circles/{id}"),
            Route::Paths => "/paths".to_string(),
            Route::PathDetail { id } => format!("/paths/{id}"),
            Route::SettingsProfile => "/settings/profile".to_string(),
            Route::SettingsBilling => "/settings/billing".to_string(),
            Route::SettingsNotifications => "/settings/notifications".to_string(),
            Route::UserProfile { username } => format!("/u/{username}"),
            Route::SignIn => "/auth/signin".to_string(),
            Route::SignUp => "/auth/signup".to_string(),
            Route::AuthCallback => "/auth/callback".to_string(),
            Route::ComponentsDemo => "/components".to_string(),
        }
    }
}

fn require_identifier(segment: &str, param: &'static str) -> Result<String, RouteError> {
    if segment.is_empty() {
        Err(RouteError::EmptyIdentifier { param })
    } else {
        Ok(segment.to_string())
    }
}

fn require_username(segment: &str) -> Result<String, RouteError> {
    let valid_length = (3..=30).contains(&segment.len());
    let valid_chars = segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid_length && valid_chars {
        Ok(segment.to_string())
    } else {
        Err(RouteError::InvalidUsername(segment.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_the_overview() {
        assert_eq!(Route::parse("/"), Ok(Route::Overview));
    }

    #[test]
    fn flat_paths_parse_to_their_screens() {
        assert_eq!(Route::parse("/home"), Ok(Route::Home));
        assert_eq!(Route::parse("/pricing"), Ok(Route::Pricing));
        assert_eq!(Route::parse("/review"), Ok(Route::Review));
        assert_eq!(Route::parse("/garden"), Ok(Route::Garden));
        assert_eq!(Route::parse("/circles"), Ok(Route::Circles));
        assert_eq!(Route::parse("/paths"), Ok(Route::Paths));
        assert_eq!(Route::parse("/components"), Ok(Route::ComponentsDemo));
    }

    #[test]
    fn parameterized_paths_capture_their_identifier() {
        assert_eq!(
            Route::parse("/circles/pattern-lab"),
            Ok(Route::CircleDetail {
                id: "pattern-lab".to_string()
            })
        );
        assert_eq!(
            Route::parse("/garden/insight/async-rituals"),
            Ok(Route::Insight {
                id: "async-rituals".to_string()
            })
        );
        assert_eq!(
            Route::parse("/summary/north-star"),
            Ok(Route::Summary {
                slug: "north-star".to_string()
            })
        );
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::parse("/circles/"), Ok(Route::Circles));
        assert_eq!(
            Route::parse("/paths/async-mastery/"),
            Ok(Route::PathDetail {
                id: "async-mastery".to_string()
            })
        );
    }

    #[test]
    fn empty_identifier_is_rejected_before_any_fetch() {
        assert_eq!(
            Route::parse("/circles//"),
            Err(RouteError::EmptyIdentifier {
                param: "Identifier"
            })
        );
        assert_eq!(
            Route::parse("/summary//"),
            Err(RouteError::EmptyIdentifier { param: "Slug" })
        );
    }

    #[test]
    fn valid_usernames_pass_the_pattern() {
        for name in ["demo-user", "abc", "A_1", "x".repeat(30).as_str()] {
            assert_eq!(
                Route::parse(&format!("/u/{name}")),
                Ok(Route::UserProfile {
                    username: name.to_string()
                })
            );
        }
    }

    #[test]
    fn short_long_and_malformed_usernames_are_rejected() {
        for name in ["ab", "x".repeat(31).as_str(), "has space", "dot.name", "émile"] {
            assert_eq!(
                Route::parse(&format!("/u/{name}")),
                Err(RouteError::InvalidUsername(name.to_string())),
                "username {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert!(matches!(
            Route::parse("/garden/insight"),
            Err(RouteError::UnknownPath(_))
        ));
        assert!(matches!(
            Route::parse("/nowhere"),
            Err(RouteError::UnknownPath(_))
        ));
        assert!(matches!(
            Route::parse("relative/path"),
            Err(RouteError::UnknownPath(_))
        ));
    }

    #[test]
    fn canonical_paths_round_trip_through_parse() {
        let routes = [
            Route::Overview,
            Route::Home,
            Route::Review,
            Route::Summary {
                slug: "north-star".to_string(),
            },
            Route::CircleDetail {
                id: "ops-guild".to_string(),
            },
            Route::UserProfile {
                username: "demo-user".to_string(),
            },
            Route::AuthCallback,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Ok(route.clone()));
        }
    }
}
