use thiserror::Error;

/// Errors that abort a run.
///
/// Every variant is fatal: `main` reports it once through the failure
/// channel and exits non-zero. Per-key exclusions are decisions, not errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error(
        "Cannot parse JSON secrets.
Make sure you add the following to this action:

with:
      secrets: ${{{{ toJSON(secrets) }}}}
or:
      secrets: ${{{{ toJSON(vars) }}}}
"
    )]
    SecretsParse(#[source] serde_json::Error),

    #[error("Unknown convert value \"{0}\". Available: lower, upper")]
    UnknownConversion(String),

    #[error("invalid pattern \"{pattern}\": {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unable to export {name}: {reason}")]
    Export { name: String, reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
