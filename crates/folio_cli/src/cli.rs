//! Command-line argument model.

use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_core::DEFAULT_BASE_PATH;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Browse the portfolio catalogs from the terminal.")]
pub struct Cli {
    /// Deployment base path used to resolve media assets.
    #[arg(long, global = true, default_value = DEFAULT_BASE_PATH)]
    pub base_path: String,

    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long, global = true)]
    pub log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error); only valid with `--log-dir`.
    #[arg(long, global = true, requires = "log_dir")]
    pub log_level: Option<String>,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the project gallery.
    Projects(ProjectsArgs),
    /// Show the blog list.
    Blog(BlogArgs),
    /// List the tag vocabulary of a section.
    Tags {
        #[arg(value_enum)]
        section: Section,
    },
    /// Format a number as a compact label.
    Format { value: u64 },
    /// Print every static site section.
    Site,
    /// Print the core version.
    Version,
}

#[derive(Debug, Args)]
pub struct ProjectsArgs {
    /// Tag chip to toggle; give several to require all of them.
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Project id to show in the detail overlay.
    #[arg(long)]
    pub open: Option<u32>,
}

#[derive(Debug, Args)]
pub struct BlogArgs {
    /// Tag chip to toggle; give several to require all of them.
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Case-insensitive substring matched against title and excerpt.
    #[arg(long)]
    pub query: Option<String>,

    /// Post id to show in the reading overlay.
    #[arg(long)]
    pub open: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Projects,
    Blog,
}
