//! Core domain types for the heart-rate daily summariser.
//!
//! Holds the measurement and summary models, the error taxonomy, the median
//! helper, timestamp parsing and the CLI settings.

pub mod error;
pub mod models;
pub mod settings;
pub mod statistics;
pub mod time_utils;

pub use error::{Result, SummaryError};
