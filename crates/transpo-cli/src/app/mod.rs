//! Application-level utilities for the Transpo CLI.
//!
//! This module provides the application context that ties CLI flags to
//! the config file.

mod context;

pub use context::AppContext;
