use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "feedmedia")]
#[command(about = "Resolve feed enclosure media types and render embed markup", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to FEEDMEDIA_CONFIG or config/feedmedia.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical type and handler of an enclosure
    Classify(ClassifyArgs),
    /// Render embed markup for a single link
    Embed(EmbedArgs),
    /// Render embed markup for an enclosure record stored as JSON
    Render(RenderArgs),
    /// Print the effective configuration as TOML
    Config,
}

#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    /// Enclosure link
    pub link: String,

    /// Declared MIME type
    #[arg(long = "type")]
    pub mime_type: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct EmbedArgs {
    /// Enclosure link
    pub link: String,

    /// Declared MIME type
    #[arg(long = "type")]
    pub mime_type: Option<String>,

    /// Enclosure title
    #[arg(long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub render: RenderFlags,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// JSON file holding the enclosure record ("-" for stdin)
    #[arg(long, short)]
    pub input: PathBuf,

    #[command(flatten)]
    pub render: RenderFlags,
}

#[derive(clap::Args, Debug)]
pub struct RenderFlags {
    /// Option string, e.g. "width:640,widescreen:true"
    #[arg(long, short, default_value = "")]
    pub options: String,

    /// Emit plugin <embed> tags instead of script calls
    #[arg(long, conflicts_with = "script")]
    pub native: bool,

    /// Emit script calls even when the configuration prefers native tags
    #[arg(long)]
    pub script: bool,
}

impl RenderFlags {
    /// Command-line flags win over the configured default
    pub fn native(&self, configured: bool) -> bool {
        if self.native {
            true
        } else if self.script {
            false
        } else {
            configured
        }
    }
}
