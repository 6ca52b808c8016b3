use std::path::PathBuf;

use edumap::DocumentFormat;

/// County educational attainment choropleth
#[derive(clap::Parser, Debug)]
#[command(name = "edumap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Fetch both datasets and write the map document (forbids stdout)
    Render(RenderArgs),

    /// Replay a hover script against the tooltip and print its state as JSON lines
    Hover(HoverArgs),
}

/// Where the map configuration and datasets come from.
#[derive(clap::Args, Debug)]
pub struct SourceArgs {
    /// TOML configuration file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Education dataset URL or path, overrides the configuration
    #[arg(long)]
    pub education: Option<String>,

    /// Geometry (TopoJSON) URL or path, overrides the configuration
    #[arg(long)]
    pub geometry: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output document (must be a file path; "-" is rejected)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Output format, inferred from the extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<DocumentFormat>,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct HoverArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Hover script, one event per line
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub script: PathBuf,
}
