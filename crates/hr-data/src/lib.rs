//! Data layer for the heart-rate daily summariser.
//!
//! Responsible for reading measurement documents, grouping measurements by
//! day, writing the resulting summaries and running the end-to-end pipeline.

pub mod aggregator;
pub mod pipeline;
pub mod reader;
pub mod writer;

pub use hr_core as core;
