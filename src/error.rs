// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Route(RouteError),
}

/// Validation failures raised while parsing a route path, before any data
/// access happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The path does not correspond to any screen.
    UnknownPath(String),
    /// A path segment that must carry an identifier was empty.
    EmptyIdentifier { param: &'static str },
    /// Username outside the 3-30 char alphanumeric/underscore/hyphen rule.
    InvalidUsername(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::UnknownPath(path) => write!(f, "Unknown route: {}", path),
            RouteError::EmptyIdentifier { param } => write!(f, "{} is required", param),
            RouteError::InvalidUsername(username) => write!(
                f,
                "Invalid username {:?}: must be 3-30 letters, numbers, underscores, or hyphens",
                username
            ),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Route(e) => write!(f, "Route Error: {}", e),
        }
    }
}

impl From<RouteError> for Error {
    fn from(err: RouteError) -> Self {
        Error::Route(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn route_error_folds_into_error() {
        let err: Error = RouteError::EmptyIdentifier { param: "Slug" }.into();
        assert_eq!(format!("{}", err), "Route Error: Slug is required");
    }

    #[test]
    fn invalid_username_mentions_the_rule() {
        let err = RouteError::InvalidUsername("ab".to_string());
        assert!(format!("{}", err).contains("3-30"));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
