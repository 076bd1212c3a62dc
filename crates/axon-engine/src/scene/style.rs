use crate::paint::{Color, FillRule};

/// Fill parameters. Unset fields leave the renderer's current state alone.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FillStyle {
    pub color: Option<Color>,
    pub rule: Option<FillRule>,
}

impl FillStyle {
    #[inline]
    pub fn color(color: Color) -> Self {
        Self { color: Some(color), rule: None }
    }

    #[inline]
    pub fn with_rule(mut self, rule: FillRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Field-wise merge; fields set on `self` win over `other`.
    ///
    /// `FillStyle::default()` is the identity.
    #[inline]
    pub fn combine(self, other: FillStyle) -> Self {
        Self {
            color: self.color.or(other.color),
            rule: self.rule.or(other.rule),
        }
    }
}

/// Stroke parameters. Unset fields leave the renderer's current state alone.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct OutlineStyle {
    pub color: Option<Color>,
    pub line_width: Option<f32>,
}

impl OutlineStyle {
    #[inline]
    pub fn color(color: Color) -> Self {
        Self { color: Some(color), line_width: None }
    }

    #[inline]
    pub fn line_width(width: f32) -> Self {
        Self { color: None, line_width: Some(width) }
    }

    #[inline]
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    /// Field-wise merge; fields set on `self` win over `other`.
    ///
    /// `OutlineStyle::default()` is the identity.
    #[inline]
    pub fn combine(self, other: OutlineStyle) -> Self {
        Self {
            color: self.color.or(other.color),
            line_width: self.line_width.or(other.line_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_combine_prefers_left() {
        let left = FillStyle::color(Color::RED);
        let right = FillStyle::color(Color::BLUE).with_rule(FillRule::EvenOdd);
        let out = left.combine(right);
        assert_eq!(out.color, Some(Color::RED));
        assert_eq!(out.rule, Some(FillRule::EvenOdd));
    }

    #[test]
    fn fill_default_is_identity() {
        let s = FillStyle::color(Color::GREEN);
        assert_eq!(FillStyle::default().combine(s), s);
        assert_eq!(s.combine(FillStyle::default()), s);
    }

    #[test]
    fn outline_combine_is_field_wise() {
        let left = OutlineStyle::line_width(2.0);
        let right = OutlineStyle::color(Color::BLACK).with_line_width(5.0);
        let out = left.combine(right);
        assert_eq!(out.color, Some(Color::BLACK));
        assert_eq!(out.line_width, Some(2.0));
    }

    #[test]
    fn outline_combine_is_associative() {
        let a = OutlineStyle::line_width(1.0);
        let b = OutlineStyle::color(Color::RED);
        let c = OutlineStyle::color(Color::BLUE).with_line_width(3.0);
        assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
    }
}
