//! Batch chart generator: a JSON config lists jobs, each job discovers
//! delimited data files by glob pattern, sums one or more numeric columns per
//! group key, and renders the result as a bar or line chart PNG next to the
//! source file.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod files;
pub mod pipeline;
pub mod render;
pub mod table;

pub type Result<T> = anyhow::Result<T>;
