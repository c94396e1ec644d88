//! CrabiProbe: a pair of small desktop tools for poking at HTTP APIs.
//!
//! The generic tester sends a GET to any URL (optionally with an API key in the
//! query string) and shows the JSON it gets back. The validator checks whether
//! an OpenWeatherMap key is accepted.

pub mod app;
pub mod classify;
pub mod config;
pub mod error;
pub mod executor;
pub mod form;
pub mod logging;
pub mod outcome;
pub mod presenter;
pub mod probe;
pub mod session;
pub mod url_builder;

pub use error::{FailureKind, ProbeError};
pub use outcome::Outcome;
