// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "space-navigator")]
#[command(about = "Hand-controlled 3D mesh viewer over a warp starfield", long_about = None)]
pub struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Number of stars in the background field
    #[arg(long, default_value_t = 300)]
    pub stars: usize,

    /// Don't read tracking samples from stdin (auto-rotate demo only)
    #[arg(long = "no-tracking", default_value = "false")]
    pub no_tracking: bool,
}
