//! Demo scene: a shaded cube with a tilted ring of markers.

use axon_engine::coords::{point, Angle, Matrix, Vec3};
use axon_engine::paint::Color;
use axon_engine::render::RenderCtx;
use axon_engine::scene::{Drawing, FillStyle, OutlineStyle, Shape};

/// Faces of the unit cube centered on the origin.
pub fn cube_faces() -> Vec<Shape> {
    let c = |x: f32, y: f32, z: f32| point(x - 0.5, y - 0.5, z - 0.5);
    vec![
        Shape::closed([c(0.0, 0.0, 0.0), c(1.0, 0.0, 0.0), c(1.0, 1.0, 0.0), c(0.0, 1.0, 0.0)]),
        Shape::closed([c(0.0, 0.0, 1.0), c(1.0, 0.0, 1.0), c(1.0, 1.0, 1.0), c(0.0, 1.0, 1.0)]),
        Shape::closed([c(0.0, 0.0, 0.0), c(0.0, 1.0, 0.0), c(0.0, 1.0, 1.0), c(0.0, 0.0, 1.0)]),
        Shape::closed([c(1.0, 0.0, 0.0), c(1.0, 1.0, 0.0), c(1.0, 1.0, 1.0), c(1.0, 0.0, 1.0)]),
        Shape::closed([c(0.0, 0.0, 0.0), c(1.0, 0.0, 0.0), c(1.0, 0.0, 1.0), c(0.0, 0.0, 1.0)]),
        Shape::closed([c(0.0, 1.0, 0.0), c(1.0, 1.0, 0.0), c(1.0, 1.0, 1.0), c(0.0, 1.0, 1.0)]),
    ]
}

fn cube() -> Drawing {
    let shades = [
        Color::from_srgb_u8(0x3a, 0x6e, 0xa5, 0xff),
        Color::from_srgb_u8(0x4f, 0x86, 0xc6, 0xff),
        Color::from_srgb_u8(0x2b, 0x52, 0x7a, 0xff),
    ];
    let edges = OutlineStyle::color(Color::WHITE).with_line_width(1.5);

    cube_faces()
        .into_iter()
        .enumerate()
        .map(|(i, face)| {
            Drawing::fill(face.clone(), FillStyle::color(shades[i / 2]))
                .concat(Drawing::outline(face, edges))
        })
        .collect()
}

fn marker_ring(count: usize) -> Drawing {
    let marker = Shape::closed([point(-0.05, -0.05, 0.0), point(0.05, -0.05, 0.0), point(0.0, 0.07, 0.0)]);
    (0..count)
        .map(|i| {
            let turn = Angle::Radians(i as f32 * core::f32::consts::TAU / count as f32);
            Drawing::rotate_angles(
                Angle::Degrees(0.0),
                Angle::Degrees(0.0),
                turn,
                Drawing::translate(
                    0.9,
                    0.0,
                    0.0,
                    Drawing::fill(marker.clone(), FillStyle::color(Color::from_srgb_u8(0xe0, 0x8a, 0x2c, 0xff))),
                ),
            )
        })
        .collect()
}

/// The full demo scene in model units (roughly [-1, 1]).
pub fn demo_scene() -> Drawing {
    Drawing::many([cube(), Drawing::rotate(70.0, 0.0, 0.0, marker_ring(12))])
}

/// Maps model units onto a `width × height` canvas with +Y down.
///
/// The canvas mapping is folded into the projection so the view rotation
/// never moves the canvas origin.
pub fn canvas_ctx(width: f32, height: f32, isometric: bool) -> RenderCtx {
    let unit = width.min(height) / 3.0;
    let to_canvas = Matrix::scale(Vec3::new(unit, -unit, unit))
        .concat(&Matrix::translate(Vec3::new(width / 2.0, height / 2.0, 0.0)));

    let view = if isometric {
        Matrix::axonometric(45.0, 35.264)
    } else {
        Matrix::orthographic()
    };
    RenderCtx::default().with_projection(view.concat(&to_canvas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axon_engine::coords::Vec2;
    use axon_engine::render::{render_with, Recorder, RenderCmd};

    #[test]
    fn cube_has_six_closed_faces() {
        let faces = cube_faces();
        assert_eq!(faces.len(), 6);
        assert!(faces.iter().all(|f| matches!(f, Shape::Path { closed: true, points } if points.len() == 4)));
    }

    #[test]
    fn demo_scene_leaf_count() {
        // 6 faces × (fill + outline) + 12 markers.
        assert_eq!(demo_scene().leaf_count(), 24);
    }

    #[test]
    fn flat_ctx_puts_origin_at_canvas_center() {
        let ctx = canvas_ctx(300.0, 300.0, false);
        assert_eq!(ctx.project(&[point(0.0, 0.0, 0.0)]), vec![Vec2::new(150.0, 150.0)]);
        assert_eq!(ctx.project(&[point(1.0, 1.0, 0.0)]), vec![Vec2::new(250.0, 50.0)]);
    }

    #[test]
    fn isometric_ctx_keeps_origin_centered() {
        let ctx = canvas_ctx(300.0, 300.0, true);
        let p = ctx.project(&[point(0.0, 0.0, 0.0)])[0];
        assert!((p.x - 150.0).abs() < 1e-3 && (p.y - 150.0).abs() < 1e-3);
    }

    #[test]
    fn demo_scene_renders_balanced() {
        let mut rec = Recorder::new();
        render_with(&demo_scene(), &canvas_ctx(480.0, 360.0, true), &mut rec).unwrap();
        let saves = rec.commands().iter().filter(|c| **c == RenderCmd::Save).count();
        let restores = rec.commands().iter().filter(|c| **c == RenderCmd::Restore).count();
        assert_eq!(saves, 24);
        assert_eq!(saves, restores);
    }
}
