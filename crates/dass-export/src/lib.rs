//! dass-export
//!
//! Result presentation: the on-screen table, CSV export, the bar chart
//! rendered to PNG, and a Markdown report from a Tera template.

pub mod chart;
pub mod error;
mod font;
pub mod png;
pub mod render;
pub mod styles;
pub mod table;
pub mod tabular;

pub use table::ResultRow;
