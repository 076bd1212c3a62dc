use std::path::PathBuf;

use clap::Parser;

/// Renders the demo scene to SVG.
#[derive(Debug, Clone, Parser)]
#[command(name = "axon-studio", version)]
pub struct StudioConfig {
    /// Output file. Writes to stdout when omitted.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 480.0)]
    pub width: f32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 360.0)]
    pub height: f32,

    /// Use a flat front view instead of the isometric projection.
    #[arg(long)]
    pub flat: bool,

    /// `env_logger` filter, overriding `RUST_LOG`.
    #[arg(long)]
    pub log: Option<String>,
}
