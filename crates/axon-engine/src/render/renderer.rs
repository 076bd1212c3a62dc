use crate::coords::Vec2;
use crate::paint::FillRule;

/// Canvas-like drawing surface consumed by the interpreter.
///
/// Commands are issued strictly in sequence and each must take effect before
/// the next one is sent. Path commands build the current path between
/// `begin_path` and `fill` / `stroke`; `save` / `restore` bracket style state.
///
/// Returning an error aborts the render in progress. The interpreter does not
/// retry and does not issue the pending `restore`; resetting the surface is
/// the caller's job.
pub trait Renderer {
    type Error;

    fn begin_path(&mut self) -> Result<(), Self::Error>;

    /// Starts a new subpath at `p`.
    fn move_to(&mut self, p: Vec2) -> Result<(), Self::Error>;

    fn line_to(&mut self, p: Vec2) -> Result<(), Self::Error>;

    fn close_path(&mut self) -> Result<(), Self::Error>;

    /// Fills the current path. `None` uses the surface default (non-zero).
    fn fill(&mut self, rule: Option<FillRule>) -> Result<(), Self::Error>;

    fn stroke(&mut self) -> Result<(), Self::Error>;

    fn save(&mut self) -> Result<(), Self::Error>;

    fn restore(&mut self) -> Result<(), Self::Error>;

    /// `css` is a CSS color string, see [`Color::to_css`](crate::paint::Color::to_css).
    fn set_fill_style(&mut self, css: &str) -> Result<(), Self::Error>;

    fn set_stroke_style(&mut self, css: &str) -> Result<(), Self::Error>;

    fn set_line_width(&mut self, width: f32) -> Result<(), Self::Error>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Error = R::Error;

    fn begin_path(&mut self) -> Result<(), Self::Error> {
        (**self).begin_path()
    }

    fn move_to(&mut self, p: Vec2) -> Result<(), Self::Error> {
        (**self).move_to(p)
    }

    fn line_to(&mut self, p: Vec2) -> Result<(), Self::Error> {
        (**self).line_to(p)
    }

    fn close_path(&mut self) -> Result<(), Self::Error> {
        (**self).close_path()
    }

    fn fill(&mut self, rule: Option<FillRule>) -> Result<(), Self::Error> {
        (**self).fill(rule)
    }

    fn stroke(&mut self) -> Result<(), Self::Error> {
        (**self).stroke()
    }

    fn save(&mut self) -> Result<(), Self::Error> {
        (**self).save()
    }

    fn restore(&mut self) -> Result<(), Self::Error> {
        (**self).restore()
    }

    fn set_fill_style(&mut self, css: &str) -> Result<(), Self::Error> {
        (**self).set_fill_style(css)
    }

    fn set_stroke_style(&mut self, css: &str) -> Result<(), Self::Error> {
        (**self).set_stroke_style(css)
    }

    fn set_line_width(&mut self, width: f32) -> Result<(), Self::Error> {
        (**self).set_line_width(width)
    }
}
