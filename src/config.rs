//! Runtime configuration
//!
//! Read from environment variables; command-line flags override.

/// Default tracing directive when `NUTRIPLAN_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "nutriplan=info";

/// Planner configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Tracing filter directive added on top of `RUST_LOG`
    pub log_directive: String,
    /// Reject empty collections and non-finite portions
    pub strict: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            strict: false,
            pretty: false,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_directive: lookup("NUTRIPLAN_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_directive),
            strict: lookup("NUTRIPLAN_STRICT")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.strict),
            pretty: lookup("NUTRIPLAN_PRETTY")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.pretty),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
