//! Render interpreter.
//!
//! Walks a [`Drawing`](crate::scene::Drawing) depth-first, accumulates its
//! transforms, projects leaf geometry to 2D and issues ordered commands to a
//! [`Renderer`].
//!
//! Convention:
//! - each leaf is bracketed by `save` / `restore`, so style changes never leak
//! - the first renderer error aborts the walk and is returned unchanged

mod ctx;
mod interpret;
mod recorder;
mod renderer;

pub use ctx::RenderCtx;
pub use interpret::{render, render_shape, render_with};
pub use recorder::{Recorder, RenderCmd};
pub use renderer::Renderer;
