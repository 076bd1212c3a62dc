use std::fmt::Write as _;

use anyhow::bail;
use axon_engine::coords::Vec2;
use axon_engine::paint::FillRule;
use axon_engine::render::Renderer;

/// Canvas style state covered by `save` / `restore`.
#[derive(Debug, Clone, PartialEq)]
struct StyleState {
    fill: String,
    stroke: String,
    line_width: f32,
}

impl Default for StyleState {
    // Canvas 2D defaults.
    fn default() -> Self {
        Self { fill: "black".into(), stroke: "black".into(), line_width: 1.0 }
    }
}

/// Renderer that writes each filled or stroked path as an SVG `<path>`.
pub struct SvgRenderer {
    width: f32,
    height: f32,
    body: String,
    path_data: String,
    style: StyleState,
    saved: Vec<StyleState>,
}

impl SvgRenderer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            path_data: String::new(),
            style: StyleState::default(),
            saved: Vec::new(),
        }
    }

    /// Completed `<path>` elements, one per line.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Wraps the recorded elements in an `<svg>` root.
    pub fn finish(self) -> anyhow::Result<String> {
        if !self.saved.is_empty() {
            bail!("{} save() calls without matching restore()", self.saved.len());
        }
        let (w, h) = (num(self.width), num(self.height));
        Ok(format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{}</svg>\n",
            self.body
        ))
    }

    fn push_segment(&mut self, op: char, p: Vec2) -> anyhow::Result<()> {
        if !self.path_data.is_empty() {
            self.path_data.push(' ');
        }
        write!(self.path_data, "{op} {} {}", num(p.x), num(p.y))?;
        Ok(())
    }
}

/// Rounds to two decimals and drops a trailing `.0`.
fn num(v: f32) -> String {
    let r = (v * 100.0).round() / 100.0;
    // Normalize -0 so output stays stable.
    if r == 0.0 { "0".into() } else { format!("{r}") }
}

impl Renderer for SvgRenderer {
    type Error = anyhow::Error;

    fn begin_path(&mut self) -> anyhow::Result<()> {
        self.path_data.clear();
        Ok(())
    }

    fn move_to(&mut self, p: Vec2) -> anyhow::Result<()> {
        self.push_segment('M', p)
    }

    fn line_to(&mut self, p: Vec2) -> anyhow::Result<()> {
        self.push_segment('L', p)
    }

    fn close_path(&mut self) -> anyhow::Result<()> {
        self.path_data.push_str(" Z");
        Ok(())
    }

    fn fill(&mut self, rule: Option<FillRule>) -> anyhow::Result<()> {
        if self.path_data.is_empty() {
            return Ok(());
        }
        let rule = rule.unwrap_or_default();
        writeln!(
            self.body,
            "<path d=\"{}\" fill=\"{}\" fill-rule=\"{}\" stroke=\"none\"/>",
            self.path_data,
            self.style.fill,
            rule.as_str()
        )?;
        Ok(())
    }

    fn stroke(&mut self) -> anyhow::Result<()> {
        if self.path_data.is_empty() {
            return Ok(());
        }
        writeln!(
            self.body,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            self.path_data,
            self.style.stroke,
            num(self.style.line_width)
        )?;
        Ok(())
    }

    fn save(&mut self) -> anyhow::Result<()> {
        self.saved.push(self.style.clone());
        Ok(())
    }

    fn restore(&mut self) -> anyhow::Result<()> {
        match self.saved.pop() {
            Some(style) => {
                self.style = style;
                Ok(())
            }
            None => bail!("restore() without matching save()"),
        }
    }

    fn set_fill_style(&mut self, css: &str) -> anyhow::Result<()> {
        self.style.fill = css.to_owned();
        Ok(())
    }

    fn set_stroke_style(&mut self, css: &str) -> anyhow::Result<()> {
        self.style.stroke = css.to_owned();
        Ok(())
    }

    fn set_line_width(&mut self, width: f32) -> anyhow::Result<()> {
        if !(width.is_finite() && width > 0.0) {
            // Canvas ignores non-positive widths; keep the current one.
            log::warn!("ignoring line width {width}");
            return Ok(());
        }
        self.style.line_width = width;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axon_engine::coords::point;
    use axon_engine::paint::Color;
    use axon_engine::render::render;
    use axon_engine::scene::{Drawing, FillStyle, OutlineStyle, Shape};

    fn triangle() -> Shape {
        Shape::closed([point(0.0, 0.0, 0.0), point(10.0, 0.0, 0.0), point(0.0, 10.0, 0.0)])
    }

    #[test]
    fn fill_writes_path_with_current_style() {
        let mut svg = SvgRenderer::new(20.0, 20.0);
        render(&Drawing::fill(triangle(), FillStyle::color(Color::RED)), &mut svg).unwrap();
        assert_eq!(
            svg.body(),
            "<path d=\"M 0 0 L 10 0 L 0 10 L 0 0\" fill=\"rgba(255, 0, 0, 1)\" fill-rule=\"nonzero\" stroke=\"none\"/>\n"
        );
    }

    #[test]
    fn styles_do_not_leak_between_leaves() {
        let d = Drawing::many([
            Drawing::outline(triangle(), OutlineStyle::color(Color::BLUE).with_line_width(3.0)),
            Drawing::outline(triangle(), OutlineStyle::default()),
        ]);
        let mut svg = SvgRenderer::new(20.0, 20.0);
        render(&d, &mut svg).unwrap();
        let lines: Vec<_> = svg.body().lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("stroke=\"rgba(0, 0, 255, 1)\" stroke-width=\"3\""));
        assert!(lines[1].contains("stroke=\"black\" stroke-width=\"1\""));
    }

    #[test]
    fn empty_path_writes_nothing() {
        let mut svg = SvgRenderer::new(1.0, 1.0);
        render(&Drawing::fill(Shape::composite([]), FillStyle::default()), &mut svg).unwrap();
        assert!(svg.body().is_empty());
    }

    #[test]
    fn unbalanced_restore_is_an_error() {
        let mut svg = SvgRenderer::new(1.0, 1.0);
        assert!(svg.restore().is_err());
    }

    #[test]
    fn finish_wraps_document() {
        let svg = SvgRenderer::new(64.0, 32.5);
        let doc = svg.finish().unwrap();
        assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"64\" height=\"32.5\""));
        assert!(doc.ends_with("</svg>\n"));
    }

    #[test]
    fn numbers_are_rounded() {
        assert_eq!(num(1.23456), "1.23");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(5.0), "5");
    }
}
