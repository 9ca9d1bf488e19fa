use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cost class of a facade call, used to pick the simulated latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationClass {
    Poll,
    Read,
    List,
    Write,
    Create,
}

/// Flat artificial delay per operation class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub poll: Duration,
    pub read: Duration,
    pub list: Duration,
    pub write: Duration,
    pub create: Duration,
}

impl LatencyProfile {
    /// Delays mirroring a typical remote API: reads 200-400ms, writes 600ms, creates 800ms.
    pub const fn standard() -> Self {
        Self {
            poll: Duration::from_millis(200),
            read: Duration::from_millis(300),
            list: Duration::from_millis(400),
            write: Duration::from_millis(600),
            create: Duration::from_millis(800),
        }
    }

    pub const fn instant() -> Self {
        Self {
            poll: Duration::ZERO,
            read: Duration::ZERO,
            list: Duration::ZERO,
            write: Duration::ZERO,
            create: Duration::ZERO,
        }
    }

    pub const fn delay_for(&self, class: OperationClass) -> Duration {
        match class {
            OperationClass::Poll => self.poll,
            OperationClass::Read => self.read,
            OperationClass::List => self.list,
            OperationClass::Write => self.write,
            OperationClass::Create => self.create,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::standard()
    }
}

/// Whether mutation endpoints write through to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Append or replace records so later reads observe the write.
    #[default]
    Persist,
    /// Echo a synthesized record without touching the store.
    EchoOnly,
}

impl WritePolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "persist" => Some(Self::Persist),
            "echo" | "echo_only" | "echo-only" => Some(Self::EchoOnly),
            _ => None,
        }
    }
}

/// How job search results relate to the requested page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationMode {
    /// Return every matching job; `page` and `limit` are echoed only.
    #[default]
    Unsliced,
    /// Return the `page`th window of `limit` jobs.
    Sliced,
}

impl PaginationMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "unsliced" | "full" => Some(Self::Unsliced),
            "sliced" | "paged" => Some(Self::Sliced),
            _ => None,
        }
    }
}

/// Runtime switches for the API facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardOptions {
    pub latency: LatencyProfile,
    pub write_policy: WritePolicy,
    pub pagination: PaginationMode,
}

impl BoardOptions {
    /// No latency, persisting writes, unsliced search. Used by tests and the CLI.
    pub fn immediate() -> Self {
        Self {
            latency: LatencyProfile::instant(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_profile_orders_classes_by_cost() {
        let profile = LatencyProfile::standard();
        assert!(profile.delay_for(OperationClass::Poll) < profile.delay_for(OperationClass::Read));
        assert!(profile.delay_for(OperationClass::List) < profile.delay_for(OperationClass::Write));
        assert_eq!(
            profile.delay_for(OperationClass::Create),
            Duration::from_millis(800)
        );
    }

    #[test]
    fn policies_parse_from_env_style_values() {
        assert_eq!(WritePolicy::parse(" Echo "), Some(WritePolicy::EchoOnly));
        assert_eq!(WritePolicy::parse("persist"), Some(WritePolicy::Persist));
        assert_eq!(WritePolicy::parse("sometimes"), None);
        assert_eq!(PaginationMode::parse("SLICED"), Some(PaginationMode::Sliced));
        assert_eq!(PaginationMode::parse(""), None);
    }
}
