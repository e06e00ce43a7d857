//! Core library components.
//!
//! This module contains the key pipeline and the collaborators it talks to:
//! configuration, the secret bundle, the environment and the reporter.

pub mod bundle;
pub mod config;
pub mod constants;
pub mod env;
pub mod pattern;
pub mod pipeline;
pub mod report;
pub mod transform;
