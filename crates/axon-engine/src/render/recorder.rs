use core::convert::Infallible;

use crate::coords::Vec2;
use crate::paint::FillRule;

use super::Renderer;

/// One renderer command, as captured by [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCmd {
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    ClosePath,
    Fill(Option<FillRule>),
    Stroke,
    Save,
    Restore,
    SetFillStyle(String),
    SetStrokeStyle(String),
    SetLineWidth(f32),
}

/// Renderer that records the command stream instead of drawing.
///
/// Useful for tests and for replaying a render onto another surface.
#[derive(Debug, Default)]
pub struct Recorder {
    cmds: Vec<RenderCmd>,
}

impl Recorder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns commands in issue order.
    #[inline]
    pub fn commands(&self) -> &[RenderCmd] {
        &self.cmds
    }

    #[inline]
    pub fn into_commands(self) -> Vec<RenderCmd> {
        self.cmds
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Re-issues every recorded command to `target`, stopping at the first error.
    pub fn replay<R: Renderer>(&self, target: &mut R) -> Result<(), R::Error> {
        for cmd in &self.cmds {
            match cmd {
                RenderCmd::BeginPath => target.begin_path()?,
                RenderCmd::MoveTo(p) => target.move_to(*p)?,
                RenderCmd::LineTo(p) => target.line_to(*p)?,
                RenderCmd::ClosePath => target.close_path()?,
                RenderCmd::Fill(rule) => target.fill(*rule)?,
                RenderCmd::Stroke => target.stroke()?,
                RenderCmd::Save => target.save()?,
                RenderCmd::Restore => target.restore()?,
                RenderCmd::SetFillStyle(css) => target.set_fill_style(css)?,
                RenderCmd::SetStrokeStyle(css) => target.set_stroke_style(css)?,
                RenderCmd::SetLineWidth(w) => target.set_line_width(*w)?,
            }
        }
        Ok(())
    }

    #[inline]
    fn push(&mut self, cmd: RenderCmd) -> Result<(), Infallible> {
        self.cmds.push(cmd);
        Ok(())
    }
}

impl Renderer for Recorder {
    type Error = Infallible;

    fn begin_path(&mut self) -> Result<(), Infallible> {
        self.push(RenderCmd::BeginPath)
    }

    fn move_to(&mut self, p: Vec2) -> Result<(), Infallible> {
        self.push(RenderCmd::MoveTo(p))
    }

    fn line_to(&mut self, p: Vec2) -> Result<(), Infallible> {
        self.push(RenderCmd::LineTo(p))
    }

    fn close_path(&mut self) -> Result<(), Infallible> {
        self.push(RenderCmd::ClosePath)
    }

    fn fill(&mut self, rule: Option<FillRule>) -> Result<(), Infallible> {
        self.push(RenderCmd::Fill(rule))
    }

    fn stroke(&mut self) -> Result<(), Infallible> {
        self.push(RenderCmd::Stroke)
    }

    fn save(&mut self) -> Result<(), Infallible> {
        self.push(RenderCmd::Save)
    }

    fn restore(&mut self) -> Result<(), Infallible> {
        self.push(RenderCmd::Restore)
    }

    fn set_fill_style(&mut self, css: &str) -> Result<(), Infallible> {
        self.push(RenderCmd::SetFillStyle(css.to_owned()))
    }

    fn set_stroke_style(&mut self, css: &str) -> Result<(), Infallible> {
        self.push(RenderCmd::SetStrokeStyle(css.to_owned()))
    }

    fn set_line_width(&mut self, width: f32) -> Result<(), Infallible> {
        self.push(RenderCmd::SetLineWidth(width))
    }
}
