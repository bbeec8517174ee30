pub mod analyzer;
pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod event;
pub mod host;
pub mod notes;
pub mod orchestrator;
pub mod ui;

pub use error::{ReleaseError, Result};
