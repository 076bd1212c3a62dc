//! Scene model types.
//!
//! Responsibilities:
//! - declarative geometry (`Shape`) and its flattened form (`Path3D`)
//! - the recursive scene tree (`Drawing`) with its monoid and styles
//!
//! Everything here is a plain value. Interpretation lives in `render`.

mod drawing;
mod path3d;
mod shape;
mod style;

pub use drawing::Drawing;
pub use path3d::Path3D;
pub use shape::Shape;
pub use style::{FillStyle, OutlineStyle};
