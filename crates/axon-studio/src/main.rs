mod config;
mod scene;
mod svg;

use anyhow::Context;
use axon_engine::logging::{init_logging, LoggingConfig};
use axon_engine::render::render_with;
use clap::Parser;

use config::StudioConfig;
use svg::SvgRenderer;

fn main() -> anyhow::Result<()> {
    let config = StudioConfig::parse();

    init_logging(match &config.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let drawing = scene::demo_scene();
    let ctx = scene::canvas_ctx(config.width, config.height, !config.flat);

    let mut svg = SvgRenderer::new(config.width, config.height);
    render_with(&drawing, &ctx, &mut svg).context("rendering demo scene")?;
    let doc = svg.finish()?;

    match &config.out {
        Some(path) => {
            std::fs::write(path, &doc).with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {} ({} bytes)", path.display(), doc.len());
        }
        None => print!("{doc}"),
    }

    Ok(())
}
