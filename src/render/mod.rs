//! Chart rendering: turn an aggregated series into a PNG artifact on disk.

pub mod chart;

pub use chart::{ChartKind, render_chart};
