//! Constants used throughout secrets-to-env.
//!
//! Centralizes names defined by the CI runner.

/// Secret name of the runner-provided job token.
///
/// The runner already exposes this token to every step, so it is always
/// part of the exclude list and never re-exported.
pub const PROTECTED_TOKEN: &str = "github_token";

/// File the runner reads exported variables from between steps.
pub const GITHUB_ENV: &str = "GITHUB_ENV";

/// Set to `true` by the runner for every step it executes.
pub const GITHUB_ACTIONS: &str = "GITHUB_ACTIONS";

/// Prefix of the heredoc delimiter used in the `GITHUB_ENV` file.
pub const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "SECRETS_TO_ENV_LOG";
