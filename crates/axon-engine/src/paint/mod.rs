//! Paint model shared between scene styles and renderers.
//!
//! Scope:
//! - color representation and its CSS string form
//! - fill rules

pub mod color;
mod fill_rule;

pub use color::Color;
pub use fill_rule::FillRule;
