//! secrets-to-env - Export CI secrets as environment variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Reporter for runner logs and terminals
//! │   └── run           # Inputs to pipeline wiring
//! └── core/             # Core library components
//!     ├── config        # Options and runner input rules
//!     ├── bundle        # Ordered secret bundle parsed from JSON
//!     ├── pattern       # Include/exclude regex lists
//!     ├── transform     # Prefix and case renaming
//!     ├── env           # Environment trait (process, memory)
//!     ├── report        # Reporter trait
//!     └── pipeline      # Per-key decisions and exports
//! ```
//!
//! # Example
//!
//! ```
//! use secrets_to_env::core::bundle::SecretBundle;
//! use secrets_to_env::core::config::Config;
//! use secrets_to_env::core::env::MemoryEnv;
//! use secrets_to_env::core::pipeline;
//! use secrets_to_env::core::report::RecordingReporter;
//!
//! let bundle = SecretBundle::parse(r#"{"APP_TOKEN":"abc","github_token":"t"}"#).unwrap();
//! let config = Config::default().with_prefix("APP_");
//! let mut env = MemoryEnv::new();
//! let mut reporter = RecordingReporter::new();
//!
//! let outcome = pipeline::run(&config, &bundle, &mut env, &mut reporter).unwrap();
//! assert_eq!(outcome.published(), ["TOKEN"]);
//! ```

pub mod cli;
pub mod core;
pub mod error;
