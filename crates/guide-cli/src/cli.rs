//! CLI argument definitions for the physics study guide.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use guide_model::ChapterId;
use guide_session::Tab;

#[derive(Parser)]
#[command(
    name = "physics-guide",
    version,
    about = "Physics study guide tools - view, check, repair and export chapters",
    long_about = "Tools for the per-chapter JSON study guide.\n\n\
                  Renders chapters as the viewer shows them, checks JSON syntax,\n\
                  repairs LaTeX damage with literal replacement tables and exports\n\
                  the guide as MyST documents."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (TOML).
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding capitulo_NN.json files (overrides config and environment).
    #[arg(long = "content-dir", value_name = "DIR", global = true)]
    pub content_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List parts and their chapters.
    Parts,

    /// Render one chapter as the viewer would show it.
    Show(ShowArgs),

    /// Check JSON syntax of chapter files.
    Check(CheckArgs),

    /// Validate chapter structure and content.
    Validate(ValidateArgs),

    /// Apply a replacement table to MyST documents in place.
    RepairMyst(RepairMystArgs),

    /// Apply a replacement table to the markdown fields of chapter JSON files.
    RepairJson(RepairJsonArgs),

    /// Turn an extracted text dump into a MyST document.
    ImportText(ImportTextArgs),

    /// Export all chapters as MyST documents with an index.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Chapter number.
    #[arg(value_name = "CHAPTER")]
    pub chapter: ChapterId,

    /// Part to select first (slug or 1-based number); defaults to the chapter's part.
    #[arg(long = "part", value_name = "SLUG")]
    pub part: Option<String>,

    /// Tab to print.
    #[arg(long = "tab", value_enum, default_value = "theory")]
    pub tab: TabArg,

    /// Expand every exercise.
    #[arg(long = "expand-all", conflicts_with = "expand")]
    pub expand_all: bool,

    /// Expand one exercise (1-based); may be repeated.
    #[arg(long = "expand", value_name = "N")]
    pub expand: Vec<usize>,

    /// Print the page model as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Files to check (default: every chapter file in the content directory).
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Strip control characters from invalid files and rewrite them.
    #[arg(long = "cleanup")]
    pub cleanup: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Chapters to validate (default: every catalog chapter).
    #[arg(value_name = "CHAPTER")]
    pub chapters: Vec<ChapterId>,
}

#[derive(Parser)]
pub struct RepairMystArgs {
    /// Directories to scan (default: from configuration).
    #[arg(value_name = "DIRS")]
    pub dirs: Vec<PathBuf>,

    /// Replacement table (TOML with [[rule]] entries).
    #[arg(long = "rules", value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Report what would change without writing.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct RepairJsonArgs {
    /// Replacement table (TOML with [[rule]] entries).
    #[arg(long = "rules", value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Report what would change without writing.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ImportTextArgs {
    /// Text file produced by an OCR tool.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output directory.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "docs_limpios")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Output directory (default: docs_dir from configuration).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TabArg {
    Theory,
    Exercises,
}

impl From<TabArg> for Tab {
    fn from(value: TabArg) -> Self {
        match value {
            TabArg::Theory => Tab::Theory,
            TabArg::Exercises => Tab::Exercises,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
