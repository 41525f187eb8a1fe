// SPDX-License-Identifier: MPL-2.0
//! Backend configuration presence check.
//!
//! The overview screen shows whether the three backend environment
//! variables are set. Only presence is reported; values are never
//! validated, and nothing else in the application is gated on the result.

use std::collections::HashMap;

/// Environment variable expected to carry the backend project URL.
pub const BACKEND_URL_KEY: &str = "SUPABASE_URL";
/// Environment variable expected to carry the anonymous API key.
pub const BACKEND_ANON_KEY: &str = "SUPABASE_ANON_KEY";
/// Environment variable expected to carry the service role key.
pub const BACKEND_SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Presence summary for the backend configuration keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendEnvSummary {
    pub has_url: bool,
    pub has_anon_key: bool,
    pub has_service_role_key: bool,
    /// Names of the keys that are unset or empty, in declaration order.
    pub missing_keys: Vec<&'static str>,
}

impl BackendEnvSummary {
    /// True when every backend key is present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_keys.is_empty()
    }
}

/// Summarizes backend key presence from an explicit environment view.
///
/// Empty values count as missing, matching how a blank line in an env file
/// behaves.
#[must_use]
pub fn summarize(env: &HashMap<String, String>) -> BackendEnvSummary {
    let present = |key: &str| env.get(key).is_some_and(|value| !value.is_empty());

    let has_url = present(BACKEND_URL_KEY);
    let has_anon_key = present(BACKEND_ANON_KEY);
    let has_service_role_key = present(BACKEND_SERVICE_ROLE_KEY);

    let missing_keys = [
        (BACKEND_URL_KEY, has_url),
        (BACKEND_ANON_KEY, has_anon_key),
        (BACKEND_SERVICE_ROLE_KEY, has_service_role_key),
    ]
    .into_iter()
    .filter(|(_, present)| !present)
    .map(|(key, _)| key)
    .collect();

    BackendEnvSummary {
        has_url,
        has_anon_key,
        has_service_role_key,
        missing_keys,
    }
}

/// Captures the process environment and summarizes it.
///
/// This is the only place the process environment is read; everything else
/// receives the summary as a value.
#[must_use]
pub fn from_process_env() -> BackendEnvSummary {
    let env: HashMap<String, String> = std::env::vars().collect();
    summarize(&env)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_environment_reports_all_keys_missing() {
        let summary = summarize(&HashMap::new());
        assert!(!summary.has_url);
        assert!(!summary.has_anon_key);
        assert!(!summary.has_service_role_key);
        assert_eq!(
            summary.missing_keys,
            vec![BACKEND_URL_KEY, BACKEND_ANON_KEY, BACKEND_SERVICE_ROLE_KEY]
        );
        assert!(!summary.is_complete());
    }

    #[test]
    fn full_environment_reports_no_missing_keys() {
        let env = env_with(&[
            (BACKEND_URL_KEY, "https://example.supabase.co"),
            (BACKEND_ANON_KEY, "anon"),
            (BACKEND_SERVICE_ROLE_KEY, "service"),
        ]);
        let summary = summarize(&env);
        assert!(summary.is_complete());
        assert!(summary.missing_keys.is_empty());
    }

    #[test]
    fn partial_environment_lists_only_absent_keys() {
        let env = env_with(&[(BACKEND_ANON_KEY, "anon")]);
        let summary = summarize(&env);
        assert!(!summary.has_url);
        assert!(summary.has_anon_key);
        assert_eq!(
            summary.missing_keys,
            vec![BACKEND_URL_KEY, BACKEND_SERVICE_ROLE_KEY]
        );
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let env = env_with(&[(BACKEND_URL_KEY, "")]);
        let summary = summarize(&env);
        assert!(!summary.has_url);
        assert!(summary.missing_keys.contains(&BACKEND_URL_KEY));
    }

    #[test]
    fn values_are_not_validated_beyond_presence() {
        let env = env_with(&[
            (BACKEND_URL_KEY, "not a url at all"),
            (BACKEND_ANON_KEY, "x"),
            (BACKEND_SERVICE_ROLE_KEY, "y"),
        ]);
        assert!(summarize(&env).is_complete());
    }
}
