use crate::scene::{Drawing, FillStyle, OutlineStyle, Path3D, Shape};

use super::{RenderCtx, Renderer};

/// Flattens a shape into subpaths.
///
/// Composites concatenate their children's subpaths in order. A closed path
/// yields exactly one subpath ending on its first point; the seed subpath
/// that [`Path3D::close_path`] leaves behind is dropped.
pub fn render_shape(shape: &Shape) -> Path3D {
    let mut out = Path3D::new();
    flatten_into(shape, &mut out);
    out
}

fn flatten_into(shape: &Shape, out: &mut Path3D) {
    match shape {
        Shape::Composite(children) => {
            for child in children {
                flatten_into(child, out);
            }
        }
        Shape::Path { closed, points } => {
            let Some((first, rest)) = points.split_first() else {
                return;
            };

            let mut path = Path3D::new();
            path.push_move(*first);
            for p in rest {
                path.push_line(*p);
            }
            if *closed {
                // Only strip a seed that close_path actually appended.
                let before = path.len();
                path.push_close();
                if path.len() > before {
                    path.drop_trailing_seed();
                }
            }
            out.extend_from(&path);
        }
    }
}

/// Renders `drawing` from the identity transform with an orthographic projection.
pub fn render<R: Renderer>(drawing: &Drawing, renderer: &mut R) -> Result<(), R::Error> {
    render_with(drawing, &RenderCtx::default(), renderer)
}

/// Renders `drawing` starting from `ctx`.
///
/// Traversal is depth-first and pre-order; siblings share their parent's
/// transform. The first renderer error is returned as-is and ends the render.
pub fn render_with<R: Renderer>(
    drawing: &Drawing,
    ctx: &RenderCtx,
    renderer: &mut R,
) -> Result<(), R::Error> {
    log::debug!("render: start ({} leaves)", drawing.leaf_count());
    walk(drawing, ctx, renderer)?;
    log::debug!("render: done");
    Ok(())
}

fn walk<R: Renderer>(drawing: &Drawing, ctx: &RenderCtx, r: &mut R) -> Result<(), R::Error> {
    match drawing {
        Drawing::Many(children) => {
            for child in children {
                walk(child, ctx, r)?;
            }
            Ok(())
        }
        Drawing::Scale { sx, sy, sz, child } => walk(child, &ctx.scaled(*sx, *sy, *sz), r),
        Drawing::Translate { dx, dy, dz, child } => {
            walk(child, &ctx.translated(*dx, *dy, *dz), r)
        }
        Drawing::Rotate { ax, ay, az, child } => walk(child, &ctx.rotated(*ax, *ay, *az), r),
        Drawing::Fill { shape, style } => fill_leaf(shape, style, ctx, r),
        Drawing::Outline { shape, style } => outline_leaf(shape, style, ctx, r),
    }
}

fn fill_leaf<R: Renderer>(
    shape: &Shape,
    style: &FillStyle,
    ctx: &RenderCtx,
    r: &mut R,
) -> Result<(), R::Error> {
    log::trace!("render: fill {style:?}");
    r.save()?;
    if let Some(color) = style.color {
        r.set_fill_style(&color.to_css())?;
    }
    emit_path(shape, ctx, r)?;
    r.fill(style.rule)?;
    r.restore()
}

fn outline_leaf<R: Renderer>(
    shape: &Shape,
    style: &OutlineStyle,
    ctx: &RenderCtx,
    r: &mut R,
) -> Result<(), R::Error> {
    log::trace!("render: outline {style:?}");
    r.save()?;
    if let Some(color) = style.color {
        r.set_stroke_style(&color.to_css())?;
    }
    if let Some(width) = style.line_width {
        r.set_line_width(width)?;
    }
    emit_path(shape, ctx, r)?;
    r.stroke()?;
    r.restore()
}

fn emit_path<R: Renderer>(shape: &Shape, ctx: &RenderCtx, r: &mut R) -> Result<(), R::Error> {
    r.begin_path()?;
    for subpath in &render_shape(shape) {
        let projected = ctx.project(subpath);
        let Some((first, rest)) = projected.split_first() else {
            continue;
        };
        r.move_to(*first)?;
        for p in rest {
            r.line_to(*p)?;
        }
    }
    Ok(())
}
